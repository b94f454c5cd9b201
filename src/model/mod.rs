//! Model generation core
//!
//! This module decides what a generated model looks like: which Go type a
//! column becomes, which struct tag it carries, how its generated name avoids
//! clashing with the query builder's methods, and how raw SQL text is
//! normalized before it is embedded in a generated method.
//!
//! # Example
//!
//! ```rust
//! use modelgen::model::{FieldDescriptor, OrmTag, Tag, TypeMapper};
//! use modelgen::model::tag::{TAG_KEY_GORM_COLUMN, TAG_KEY_JSON};
//!
//! let mut mapper = TypeMapper::new();
//! mapper.set("uuid", |_: &str| "uuid.UUID".to_string());
//!
//! let mut orm_tag = OrmTag::new();
//! orm_tag.set(TAG_KEY_GORM_COLUMN, "find");
//!
//! let mut field = FieldDescriptor::new("Find", mapper.get("tinyint", "tinyint(1)"))
//!     .with_tag(Tag::new().with(TAG_KEY_JSON, "find"))
//!     .with_orm_tag(orm_tag);
//! field.escape_keyword();
//!
//! assert_eq!(field.name, "Find_");
//! assert_eq!(field.gen_type(), "Bool");
//! assert_eq!(field.tags(), r#"gorm:"column:find" json:"find""#);
//! ```

pub mod data_type;
pub mod field;
pub mod keyword;
pub mod relation;
pub mod sql_buffer;
pub mod tag;

pub use data_type::{DataTypeMapping, TypeMapper, DEFAULT_DATA_TYPE};
pub use field::FieldDescriptor;
pub use keyword::{KeywordSet, DATA_OBJECT_KEYWORDS, GENERATOR_KEYWORDS, QUERY_BUILDER_KEYWORDS};
pub use relation::{Relation, RelationshipKind};
pub use sql_buffer::SqlBuffer;
pub use tag::{BuildTag, OrmTag, Tag};

/// Package name for generated models
pub const DEFAULT_MODEL_PKG: &str = "model";

/// Kind of fragment a SQL template is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClauseStatus {
    #[default]
    Unknown,
    /// Plain SQL text
    Sql,
    /// `@@name`: table or column placeholder
    Data,
    /// `@name`: bound parameter
    Variable,
    If,
    Else,
    Where,
    Set,
    For,
    End,
    Trim,
}

impl ClauseStatus {
    /// True for clauses that open a block closed by `{{end}}`
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            ClauseStatus::If
                | ClauseStatus::Where
                | ClauseStatus::Set
                | ClauseStatus::For
                | ClauseStatus::Trim
        )
    }
}

/// Where model definitions are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceCode {
    /// An existing struct
    #[default]
    Struct,
    /// A database table
    Table,
    /// A programmatic object description
    Object,
}
