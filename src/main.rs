use modelgen::model::DATA_OBJECT_KEYWORDS;
use modelgen::{
    Column, FieldDescriptor, GeneratorConfig, Relation, RelationshipKind, Template,
};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match GeneratorConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig {
            field_nullable: true,
            ..GeneratorConfig::default()
        },
    };
    let mapper = config.type_mapper();

    let columns = vec![
        Column::new("id", "bigint(20) unsigned").with_primary_key(true),
        Column::new("name", "varchar(64)").with_nullable(false).with_comment("display name"),
        Column::new("active", "tinyint(1)").with_default("1"),
        Column::new("level", "tinyint(4)").with_comment("membership tier\n0 = free"),
        Column::new("order", "int(11)"),
        Column::new("alias", "varchar(32)"),
        Column::new("avatar", "mediumblob"),
        Column::new("location", "point"),
        Column::new("created_at", "datetime").with_nullable(false),
    ];

    println!("=== Model Generation Demo ===\n");

    let mut fields: Vec<FieldDescriptor> = columns
        .iter()
        .map(|column| {
            let mut field = config.build_field(&mapper, column);
            field.escape_keyword_for(&DATA_OBJECT_KEYWORDS);
            field
        })
        .collect();
    fields.push(FieldDescriptor::from_relation(Relation::new(
        RelationshipKind::HasMany,
        "CreditCards",
        format!("{}.CreditCard", config.model_pkg),
    )));

    println!("package {}\n", config.model_pkg);
    println!("type User struct {{");
    for field in &mut fields {
        for line in comment_lines(field) {
            println!("    {}", line);
        }
        let tags = field.tags();
        if tags.is_empty() {
            println!("    {} {}", field.name, field.ty);
        } else {
            println!("    {} {} `{}`", field.name, field.ty, tags);
        }
    }
    println!("}}\n");

    println!("--- Field classes ---");
    for field in &fields {
        println!("  {:<14} {}", field.name, field.gen_type());
    }
    println!();

    println!("--- Query template ---");
    let source = r#"
        SELECT * FROM @@table
        {{where}}
            {{if name != ""}} name = @name {{end}}
            {{if active}} AND active = @active {{end}}
        {{end}}
    "#;
    match Template::parse(source) {
        Ok(template) => {
            for clause in template.clauses() {
                println!("  {:?}: {:?}", clause.status, clause.value);
            }
        }
        Err(e) => eprintln!("Template error: {}", e),
    }
}

/// Go comment lines placed above a struct field
fn comment_lines(field: &FieldDescriptor) -> Vec<String> {
    if field.multiline_comment {
        let mut lines = vec!["/*".to_string()];
        lines.extend(field.column_comment.lines().map(str::to_string));
        lines.push("*/".to_string());
        lines
    } else if field.column_comment.is_empty() {
        Vec::new()
    } else {
        vec![format!("// {}", field.column_comment)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines() {
        let field = FieldDescriptor::new("Level", "int32").with_comment("membership tier\n0 = free");
        assert_eq!(comment_lines(&field), vec!["/*", "membership tier", "0 = free", "*/"]);

        let field = FieldDescriptor::new("Name", "string").with_comment("display name");
        assert_eq!(comment_lines(&field), vec!["// display name"]);

        assert!(comment_lines(&FieldDescriptor::new("ID", "int64")).is_empty());
    }
}
