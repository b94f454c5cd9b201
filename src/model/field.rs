//! Generated struct field descriptors

use super::keyword::{KeywordSet, QUERY_BUILDER_KEYWORDS};
use super::relation::Relation;
use super::tag::{BuildTag, OrmTag, Tag, TAG_KEY_GORM};

/// One field of a generated model struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDescriptor {
    /// Identifier in generated code
    pub name: String,
    /// Go type, `*` prefixed when nullable (e.g., "*int64")
    pub ty: String,
    pub column_name: String,
    pub column_comment: String,
    /// Render the comment as a block comment
    pub multiline_comment: bool,
    pub tag: Tag,
    pub orm_tag: OrmTag,
    /// Overrides the classification returned by [`FieldDescriptor::gen_type`]
    pub custom_gen_type: Option<String>,
    pub relation: Option<Relation>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Build a relation field; its type is the relation's Go type
    pub fn from_relation(relation: Relation) -> Self {
        Self {
            name: relation.name.clone(),
            ty: relation.go_type(),
            relation: Some(relation),
            ..Self::default()
        }
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Set the column comment; comments spanning lines render as block comments
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.column_comment = comment.into();
        self.multiline_comment = self.column_comment.contains('\n');
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_orm_tag(mut self, orm_tag: OrmTag) -> Self {
        self.orm_tag = orm_tag;
        self
    }

    pub fn with_custom_gen_type(mut self, gen_type: impl Into<String>) -> Self {
        self.custom_gen_type = Some(gen_type.into());
        self
    }

    /// Rendered struct tag.
    ///
    /// A `gorm` entry already present in [`FieldDescriptor::tag`] is used as
    /// is. Otherwise the rendered ORM tag is installed under `gorm` the first
    /// time this is called, so later calls return the same text.
    pub fn tags(&mut self) -> String {
        if self.tag.contains_key(TAG_KEY_GORM) {
            return self.tag.build();
        }

        let orm_tag = self.orm_tag.build();
        let orm_tag = orm_tag.trim();
        if !orm_tag.is_empty() {
            tracing::debug!(field = %self.name, orm_tag, "installing rendered ORM tag");
            self.tag.set(TAG_KEY_GORM, orm_tag);
        }
        self.tag.build()
    }

    pub fn is_relation(&self) -> bool {
        self.relation.is_some()
    }

    /// Classification used to pick the template family for this field
    pub fn gen_type(&self) -> String {
        if self.is_relation() {
            return self.ty.clone();
        }
        if let Some(custom) = self.custom_gen_type.as_deref().filter(|c| !c.is_empty()) {
            return custom.to_string();
        }

        let ty = self.ty.trim_start_matches('*');
        match ty {
            "string" | "bytes" | "bool" | "int" | "int8" | "int16" | "int32" | "int64" | "uint"
            | "uint8" | "uint16" | "uint32" | "uint64" | "float32" | "float64" => title(ty),
            "time.Time" => "Time".to_string(),
            "json.RawMessage" | "[]byte" => "Bytes".to_string(),
            "serializer" => "Serializer".to_string(),
            _ => "Field".to_string(),
        }
    }

    /// Escape the name against the query builder's method names
    pub fn escape_keyword(&mut self) -> &mut Self {
        self.escape_keyword_for(&QUERY_BUILDER_KEYWORDS)
    }

    /// Append `_` to the name if it is one of `keywords`
    pub fn escape_keyword_for(&mut self, keywords: &KeywordSet) -> &mut Self {
        if keywords.full_match(&self.name) {
            tracing::debug!(field = %self.name, "escaping reserved field name");
            self.name.push('_');
        }
        self
    }
}

/// Upper-case the first character
fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::keyword::DATA_OBJECT_KEYWORDS;
    use crate::model::relation::RelationshipKind;
    use crate::model::tag::{TAG_KEY_GORM_COLUMN, TAG_KEY_GORM_PRIMARY_KEY, TAG_KEY_JSON};

    #[test]
    fn test_gen_type_primitives() {
        let cases = [
            ("string", "String"),
            ("bytes", "Bytes"),
            ("int", "Int"),
            ("int8", "Int8"),
            ("int64", "Int64"),
            ("uint", "Uint"),
            ("uint32", "Uint32"),
            ("float32", "Float32"),
            ("float64", "Float64"),
            ("bool", "Bool"),
            ("time.Time", "Time"),
            ("[]byte", "Bytes"),
            ("json.RawMessage", "Bytes"),
            ("serializer", "Serializer"),
            ("[]uint8", "Field"),
            ("gorm.DeletedAt", "Field"),
            ("", "Field"),
        ];
        for (ty, expected) in cases {
            assert_eq!(FieldDescriptor::new("F", ty).gen_type(), expected, "{ty}");
        }
    }

    #[test]
    fn test_gen_type_strips_pointer() {
        let plain = FieldDescriptor::new("ID", "int64");
        let pointer = FieldDescriptor::new("ID", "*int64");
        assert_eq!(pointer.gen_type(), plain.gen_type());
        assert_eq!(FieldDescriptor::new("At", "*time.Time").gen_type(), "Time");
    }

    #[test]
    fn test_gen_type_relation_returns_raw_type() {
        let relation = Relation::new(RelationshipKind::HasMany, "Cards", "model.CreditCard");
        let mut field = FieldDescriptor::from_relation(relation);
        assert!(field.is_relation());
        assert_eq!(field.gen_type(), "[]model.CreditCard");

        field.ty = "*int64".to_string();
        field.custom_gen_type = Some("Custom".to_string());
        assert_eq!(field.gen_type(), "*int64");
    }

    #[test]
    fn test_gen_type_custom_override() {
        let field = FieldDescriptor::new("Data", "datatypes.JSON").with_custom_gen_type("Field");
        assert_eq!(field.gen_type(), "Field");

        let field = FieldDescriptor::new("Count", "int64").with_custom_gen_type("Uint");
        assert_eq!(field.gen_type(), "Uint");

        let field = FieldDescriptor::new("Count", "int64").with_custom_gen_type("");
        assert_eq!(field.gen_type(), "Int64");
    }

    #[test]
    fn test_escape_keyword() {
        let mut field = FieldDescriptor::new("Find", "string");
        field.escape_keyword();
        assert_eq!(field.name, "Find_");
        field.escape_keyword();
        assert_eq!(field.name, "Find_");

        let mut field = FieldDescriptor::new("Name", "string");
        field.escape_keyword();
        assert_eq!(field.name, "Name");
    }

    #[test]
    fn test_escape_keyword_for_chains() {
        let mut field = FieldDescriptor::new("Alias", "string");
        field.escape_keyword().escape_keyword_for(&DATA_OBJECT_KEYWORDS);
        assert_eq!(field.name, "Alias_");
        assert_eq!(field.ty, "string");
    }

    #[test]
    fn test_tags_installs_orm_tag_once() {
        let mut orm_tag = OrmTag::new();
        orm_tag.set(TAG_KEY_GORM_COLUMN, "id");
        orm_tag.flag(TAG_KEY_GORM_PRIMARY_KEY);

        let mut field = FieldDescriptor::new("ID", "int64")
            .with_tag(Tag::new().with(TAG_KEY_JSON, "id"))
            .with_orm_tag(orm_tag);

        let first = field.tags();
        assert_eq!(first, r#"gorm:"column:id;primaryKey" json:"id""#);

        field.orm_tag.set(TAG_KEY_GORM_COLUMN, "other");
        assert_eq!(field.tags(), first);
    }

    #[test]
    fn test_tags_respects_preset_gorm_entry() {
        let mut orm_tag = OrmTag::new();
        orm_tag.set(TAG_KEY_GORM_COLUMN, "id");

        let mut field = FieldDescriptor::new("ID", "int64")
            .with_tag(Tag::new().with(TAG_KEY_GORM, "-"))
            .with_orm_tag(orm_tag);
        assert_eq!(field.tags(), r#"gorm:"-""#);

        // An empty preset still wins over the ORM tag
        let mut field = FieldDescriptor::new("ID", "int64")
            .with_tag(Tag::new().with(TAG_KEY_GORM, ""))
            .with_orm_tag(field.orm_tag.clone());
        assert_eq!(field.tags(), "");
        assert_eq!(field.tags(), "");
    }

    #[test]
    fn test_tags_empty() {
        let mut field = FieldDescriptor::new("Name", "string");
        assert_eq!(field.tags(), "");
        assert_eq!(field.tags(), "");
        assert!(!field.tag.contains_key(TAG_KEY_GORM));
    }

    #[test]
    fn test_with_comment_detects_multiline() {
        let field = FieldDescriptor::new("Bio", "string").with_comment("about\nthe user");
        assert!(field.multiline_comment);
        let field = FieldDescriptor::new("Bio", "string").with_comment("about the user");
        assert!(!field.multiline_comment);
    }
}
