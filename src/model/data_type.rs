//! Schema column type to Go type resolution

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type used for any schema type without a registered mapping
pub const DEFAULT_DATA_TYPE: &str = "string";

/// Computes the Go type for a column from its detail string
/// (the full declaration, e.g. `"tinyint(1) unsigned"`).
pub type DataTypeMapping = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Registry mapping schema type names to Go types.
///
/// Keys are stored lowercased and looked up case-insensitively. The registry
/// is seeded with the built-in table and can be extended or overridden with
/// [`TypeMapper::set`] while the generator is being configured.
#[derive(Clone)]
pub struct TypeMapper {
    mappings: HashMap<String, DataTypeMapping>,
}

impl TypeMapper {
    /// Create a mapper seeded with the built-in table
    pub fn new() -> Self {
        let mut mapper = Self::empty();
        for &(schema_type, target) in BUILTIN_TYPES {
            mapper.set(schema_type, move |_: &str| target.to_string());
        }
        mapper.set("tinyint", |detail: &str| {
            if detail.trim().starts_with("tinyint(1)") {
                "bool".to_string()
            } else {
                "int32".to_string()
            }
        });
        mapper
    }

    /// Create a mapper with no registered types; every lookup falls back to
    /// [`DEFAULT_DATA_TYPE`]
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    /// Resolve the Go type for `schema_type`, passing `detail` to the mapping
    pub fn get(&self, schema_type: &str, detail: &str) -> String {
        match self.mappings.get(&schema_type.to_lowercase()) {
            Some(convert) => convert(detail),
            None => {
                tracing::trace!(schema_type, "no mapping registered, using default type");
                DEFAULT_DATA_TYPE.to_string()
            }
        }
    }

    /// Resolve the Go type for `schema_type` without a detail string
    pub fn get_data_type(&self, schema_type: &str) -> String {
        self.get(schema_type, "")
    }

    /// Register or replace the mapping for `schema_type`. Last write wins.
    pub fn set<F>(&mut self, schema_type: impl Into<String>, mapping: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let key = schema_type.into().to_lowercase();
        if self.mappings.insert(key.clone(), Arc::new(mapping)).is_some() {
            tracing::debug!(schema_type = %key, "overriding data type mapping");
        }
    }

    /// Register a mapping that ignores the detail string
    pub fn set_fixed(&mut self, schema_type: impl Into<String>, target: impl Into<String>) {
        let target = target.into();
        self.set(schema_type, move |_: &str| target.clone());
    }

    /// Check if a mapping is registered (case-insensitive)
    pub fn contains(&self, schema_type: &str) -> bool {
        self.mappings.contains_key(&schema_type.to_lowercase())
    }

    /// Registered schema type names, sorted
    pub fn schema_types(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.mappings.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMapper")
            .field("schema_types", &self.schema_types())
            .finish()
    }
}

/// Built-in mappings that do not depend on the detail string.
/// `tinyint` is registered separately.
pub const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("numeric", "int32"),
    ("integer", "int32"),
    ("int", "int32"),
    ("smallint", "int32"),
    ("mediumint", "int32"),
    ("bigint", "int64"),
    ("float", "float32"),
    ("real", "float64"),
    ("double", "float64"),
    ("decimal", "float64"),
    ("char", "string"),
    ("varchar", "string"),
    ("tinytext", "string"),
    ("mediumtext", "string"),
    ("longtext", "string"),
    ("binary", "[]byte"),
    ("varbinary", "[]byte"),
    ("tinyblob", "[]byte"),
    ("blob", "[]byte"),
    ("mediumblob", "[]byte"),
    ("longblob", "[]byte"),
    ("text", "string"),
    ("json", "string"),
    ("enum", "string"),
    ("time", "time.Time"),
    ("date", "time.Time"),
    ("datetime", "time.Time"),
    ("timestamp", "time.Time"),
    ("year", "int32"),
    ("bit", "[]uint8"),
    ("boolean", "bool"),
];
