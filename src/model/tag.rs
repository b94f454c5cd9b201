//! Struct tag containers and rendering
//!
//! A generated field carries two tag containers:
//!
//! - [`Tag`]: the Go struct tag, rendered as `key:"value"` pairs separated
//!   by spaces (`json:"id" gorm:"column:id;primaryKey"`)
//! - [`OrmTag`]: the structured ORM tag whose rendered form becomes the value
//!   of the `gorm` entry, rendered as `key:value` pairs separated by `;`
//!
//! Both render their keys in a stable order: by descending priority, then
//! alphabetically.

use std::collections::HashMap;

pub const TAG_KEY_GORM: &str = "gorm";
pub const TAG_KEY_JSON: &str = "json";

pub const TAG_KEY_GORM_COLUMN: &str = "column";
pub const TAG_KEY_GORM_TYPE: &str = "type";
pub const TAG_KEY_GORM_PRIMARY_KEY: &str = "primaryKey";
pub const TAG_KEY_GORM_AUTO_INCREMENT: &str = "autoIncrement";
pub const TAG_KEY_GORM_NOT_NULL: &str = "not null";
pub const TAG_KEY_GORM_UNIQUE_INDEX: &str = "uniqueIndex";
pub const TAG_KEY_GORM_INDEX: &str = "index";
pub const TAG_KEY_GORM_DEFAULT: &str = "default";
pub const TAG_KEY_GORM_COMMENT: &str = "comment";

/// Render ordering weight for a tag key; unknown keys sort last
fn key_priority(key: &str) -> i16 {
    match key {
        TAG_KEY_GORM => 100,
        TAG_KEY_JSON => 99,
        TAG_KEY_GORM_COLUMN => 10,
        TAG_KEY_GORM_TYPE => 9,
        TAG_KEY_GORM_PRIMARY_KEY => 8,
        TAG_KEY_GORM_AUTO_INCREMENT => 7,
        TAG_KEY_GORM_NOT_NULL => 6,
        TAG_KEY_GORM_UNIQUE_INDEX => 5,
        TAG_KEY_GORM_INDEX => 4,
        TAG_KEY_GORM_DEFAULT => 3,
        _ => 0,
    }
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = keys.map(String::as_str).collect();
    keys.sort_by(|a, b| {
        key_priority(b)
            .cmp(&key_priority(a))
            .then_with(|| a.cmp(b))
    });
    keys
}

/// Anything that renders to a tag string
pub trait BuildTag {
    fn build(&self) -> String;
}

/// Go struct tag: `key:"value"` entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    entries: HashMap<String, String>,
}

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a key, replacing any existing value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`Tag::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key was set, even to an empty value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BuildTag for Tag {
    fn build(&self) -> String {
        sorted_keys(self.entries.keys())
            .into_iter()
            .filter_map(|key| {
                let value = &self.entries[key];
                if key.is_empty() || value.is_empty() {
                    None
                } else {
                    Some(format!("{key}:\"{value}\""))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// ORM tag: `key:value` entries, a key may carry several values or none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrmTag {
    entries: HashMap<String, Vec<String>>,
}

impl OrmTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single value for a key, replacing existing values
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Add values to a key. With no values, a bare flag key (e.g. `primaryKey`)
    /// is recorded.
    pub fn append<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries
            .entry(key.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// Record a key with no value
    pub fn flag(&mut self, key: impl Into<String>) {
        self.append(key, std::iter::empty::<String>());
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BuildTag for OrmTag {
    fn build(&self) -> String {
        let mut parts = Vec::new();
        for key in sorted_keys(self.entries.keys()) {
            let values = &self.entries[key];
            if values.is_empty() {
                if !key.is_empty() {
                    parts.push(key.to_string());
                }
                continue;
            }
            for value in values {
                match (key.is_empty(), value.is_empty()) {
                    (true, true) => {}
                    (true, false) => parts.push(value.clone()),
                    (false, true) => parts.push(key.to_string()),
                    (false, false) => parts.push(format!("{key}:{value}")),
                }
            }
        }
        parts.join(";")
    }
}
