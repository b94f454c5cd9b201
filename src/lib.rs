pub mod config;
pub mod model;
pub mod template;

pub use config::{Column, ConfigError, GeneratorConfig};
pub use model::{
    ClauseStatus, FieldDescriptor, KeywordSet, OrmTag, Relation, RelationshipKind, SourceCode,
    SqlBuffer, Tag, TypeMapper,
};
pub use template::{Clause, Template, TemplateError};
