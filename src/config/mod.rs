//! Generator configuration
//!
//! Supports TOML configuration files. Every key is optional:
//!
//! ```toml
//! model_pkg = "model"
//! field_nullable = true
//! field_with_index_tag = false
//! field_with_type_tag = true
//!
//! [data_types]
//! uuid = "uuid.UUID"
//! json = "datatypes.JSON"
//! ```
//!
//! `[data_types]` entries are registered on top of the built-in table when
//! [`GeneratorConfig::type_mapper`] builds the registry, so they override
//! built-in mappings of the same name.

mod error;
pub mod naming;

pub use error::{ConfigError, ConfigResult};
pub use naming::to_camel_case;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::tag::{
    TAG_KEY_GORM_AUTO_INCREMENT, TAG_KEY_GORM_COLUMN, TAG_KEY_GORM_COMMENT, TAG_KEY_GORM_DEFAULT,
    TAG_KEY_GORM_INDEX, TAG_KEY_GORM_NOT_NULL, TAG_KEY_GORM_PRIMARY_KEY, TAG_KEY_GORM_TYPE,
    TAG_KEY_JSON,
};
use crate::model::{FieldDescriptor, OrmTag, Tag, TypeMapper, DEFAULT_MODEL_PKG};

/// Options controlling how columns become model fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package name for generated models
    pub model_pkg: String,
    /// Pointer-qualify the type of nullable columns
    pub field_nullable: bool,
    /// Emit `index` in the ORM tag for indexed columns
    pub field_with_index_tag: bool,
    /// Emit the column's declared type in the ORM tag
    pub field_with_type_tag: bool,
    /// Schema type -> fixed Go type overrides
    pub data_types: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_pkg: DEFAULT_MODEL_PKG.to_string(),
            field_nullable: false,
            field_with_index_tag: false,
            field_with_type_tag: false,
            data_types: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let pkg = &self.model_pkg;
        let valid_pkg = pkg.starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
            && pkg.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_pkg {
            return Err(ConfigError::InvalidModelPkg(pkg.clone()));
        }

        for (schema_type, target) in &self.data_types {
            if schema_type.trim().is_empty() || target.trim().is_empty() {
                return Err(ConfigError::InvalidDataType {
                    schema_type: schema_type.clone(),
                });
            }
        }
        Ok(())
    }

    /// Built-in type registry with `[data_types]` overrides applied
    pub fn type_mapper(&self) -> TypeMapper {
        let mut mapper = TypeMapper::new();
        for (schema_type, target) in &self.data_types {
            mapper.set_fixed(schema_type.trim(), target.trim());
        }
        mapper
    }

    /// Describe the model field generated for `column`
    pub fn build_field(&self, mapper: &TypeMapper, column: &Column) -> FieldDescriptor {
        let mut ty = mapper.get(&column.data_type, &column.column_type);
        if self.field_nullable && column.nullable && !ty.starts_with('*') {
            ty.insert(0, '*');
        }

        let mut orm_tag = OrmTag::new();
        orm_tag.set(TAG_KEY_GORM_COLUMN, column.name.as_str());
        if self.field_with_type_tag && !column.column_type.is_empty() {
            orm_tag.set(TAG_KEY_GORM_TYPE, column.column_type.as_str());
        }
        if column.primary_key {
            orm_tag.flag(TAG_KEY_GORM_PRIMARY_KEY);
        }
        if column.auto_increment {
            orm_tag.flag(TAG_KEY_GORM_AUTO_INCREMENT);
        }
        if !column.nullable {
            orm_tag.flag(TAG_KEY_GORM_NOT_NULL);
        }
        if self.field_with_index_tag && column.indexed {
            orm_tag.flag(TAG_KEY_GORM_INDEX);
        }
        if let Some(default) = &column.default {
            orm_tag.set(TAG_KEY_GORM_DEFAULT, default.as_str());
        }
        if !column.comment.is_empty() {
            // Struct tag values are quoted Go strings
            orm_tag.set(TAG_KEY_GORM_COMMENT, column.comment.replace('\n', "\\n"));
        }

        let mut field = FieldDescriptor::new(to_camel_case(&column.name), ty)
            .with_column_name(column.name.as_str())
            .with_comment(column.comment.as_str())
            .with_tag(Tag::new().with(TAG_KEY_JSON, column.name.as_str()))
            .with_orm_tag(orm_tag);
        field.escape_keyword();
        field
    }
}

/// A table column as reported by schema introspection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    /// Bare type name (e.g., "tinyint")
    pub data_type: String,
    /// Full declaration (e.g., "tinyint(1) unsigned")
    pub column_type: String,
    pub comment: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub indexed: bool,
    pub default: Option<String>,
}

impl Column {
    /// Create a nullable column; `column_type` is split at the first `(` or
    /// space to get the bare type name
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        let column_type = column_type.into();
        let data_type = column_type
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name: name.into(),
            data_type,
            column_type,
            nullable: true,
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Mark as primary key; primary keys are never nullable
    pub fn with_primary_key(mut self, auto_increment: bool) -> Self {
        self.primary_key = true;
        self.auto_increment = auto_increment;
        self.nullable = false;
        self
    }

    pub fn with_index(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_toml("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.model_pkg, "model");
    }

    #[test]
    fn test_parse_full_config() {
        let config = GeneratorConfig::from_toml(
            r#"
model_pkg = "entity"
field_nullable = true
field_with_type_tag = true

[data_types]
uuid = "uuid.UUID"
JSON = "datatypes.JSON"
"#,
        )
        .unwrap();
        assert_eq!(config.model_pkg, "entity");
        assert!(config.field_nullable);
        assert!(!config.field_with_index_tag);

        let mapper = config.type_mapper();
        assert_eq!(mapper.get("UUID", ""), "uuid.UUID");
        assert_eq!(mapper.get("json", ""), "datatypes.JSON");
        assert_eq!(mapper.get("bigint", ""), "int64");
    }

    #[test]
    fn test_invalid_toml() {
        let err = GeneratorConfig::from_toml("model_pkg = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values() {
        let err = GeneratorConfig::from_toml("model_pkg = \"My-Models\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidModelPkg(ref p) if p == "My-Models"));

        let err = GeneratorConfig::from_toml("[data_types]\nuuid = \" \"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDataType { ref schema_type } if schema_type == "uuid"));
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorConfig::from_file("/nonexistent/modelgen.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_column_splits_type_name() {
        assert_eq!(Column::new("a", "tinyint(1) unsigned").data_type, "tinyint");
        assert_eq!(Column::new("a", "bigint unsigned").data_type, "bigint");
        assert_eq!(Column::new("a", "text").data_type, "text");
        assert_eq!(Column::new("a", "").data_type, "");
    }

    #[test]
    fn test_build_field_primary_key() {
        let config = GeneratorConfig::default();
        let mapper = config.type_mapper();
        let column = Column::new("id", "bigint(20) unsigned").with_primary_key(true);

        let mut field = config.build_field(&mapper, &column);
        assert_eq!(field.name, "ID");
        assert_eq!(field.ty, "int64");
        assert_eq!(field.column_name, "id");
        assert_eq!(
            field.tags(),
            r#"gorm:"column:id;primaryKey;autoIncrement;not null" json:"id""#
        );
    }

    #[test]
    fn test_build_field_nullable_pointer() {
        let config = GeneratorConfig {
            field_nullable: true,
            ..GeneratorConfig::default()
        };
        let mapper = config.type_mapper();

        let field = config.build_field(&mapper, &Column::new("age", "int(11)"));
        assert_eq!(field.ty, "*int32");
        assert_eq!(field.gen_type(), "Int32");

        let field =
            config.build_field(&mapper, &Column::new("age", "int(11)").with_nullable(false));
        assert_eq!(field.ty, "int32");
    }

    #[test]
    fn test_build_field_escapes_keyword() {
        let config = GeneratorConfig::default();
        let field = config.build_field(&config.type_mapper(), &Column::new("order", "int"));
        assert_eq!(field.name, "Order_");
        assert_eq!(field.column_name, "order");
    }

    #[test]
    fn test_build_field_optional_tags() {
        let config = GeneratorConfig {
            field_with_index_tag: true,
            field_with_type_tag: true,
            ..GeneratorConfig::default()
        };
        let column = Column::new("email", "varchar(255)")
            .with_nullable(false)
            .with_index()
            .with_default("''")
            .with_comment("login\naddress");

        let mut field = config.build_field(&config.type_mapper(), &column);
        assert!(field.multiline_comment);
        assert_eq!(
            field.tags(),
            "gorm:\"column:email;type:varchar(255);not null;index;default:'';comment:login\\naddress\" json:\"email\""
        );
    }

    #[test]
    fn test_build_field_multiline_comment_stays_on_one_tag_line() {
        let config = GeneratorConfig::default();
        let column = Column::new("bio", "text").with_comment("line one\nline two");

        let mut field = config.build_field(&config.type_mapper(), &column);
        let tags = field.tags();
        assert!(!tags.contains('\n'));
        assert_eq!(tags, "gorm:\"column:bio;comment:line one\\nline two\" json:\"bio\"");
        // The Go comment above the field keeps the real line break
        assert_eq!(field.column_comment, "line one\nline two");
        assert!(field.multiline_comment);
    }
}
