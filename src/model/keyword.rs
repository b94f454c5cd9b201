//! Reserved identifier sets for generated code

/// An immutable list of reserved words.
///
/// Generated identifiers are checked against these sets so that a field or
/// method name never shadows a method on the generated API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// True if `word` equals one of the reserved words exactly
    pub fn full_match(&self, word: &str) -> bool {
        self.words.iter().any(|item| *item == word)
    }

    /// True if any reserved word appears somewhere inside `text`
    pub fn contain(&self, text: &str) -> bool {
        self.words.iter().any(|item| text.contains(item))
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }
}

/// Methods exposed by the generated query builder
#[rustfmt::skip]
pub static QUERY_BUILDER_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "UnderlyingDB", "UseDB", "UseModel", "UseTable", "Quote", "Debug", "TableName", "WithContext",
    "As", "Not", "Or", "Build", "Columns", "Hints",
    "Distinct", "Omit",
    "Select", "Where", "Order", "Group", "Having", "Limit", "Offset",
    "Join", "LeftJoin", "RightJoin",
    "Save", "Create", "CreateInBatches",
    "Update", "Updates", "UpdateColumn", "UpdateColumns",
    "Find", "FindInBatches", "First", "Take", "Last", "Pluck", "Count",
    "Scan", "ScanRows", "Row", "Rows",
    "Delete", "Unscoped",
    "Scopes",
]);

/// Methods exposed by generated data objects
pub static DATA_OBJECT_KEYWORDS: KeywordSet =
    KeywordSet::new(&["Alias", "TableName", "WithContext"]);

/// Helper names used inside generated method bodies
pub static GENERATOR_KEYWORDS: KeywordSet =
    KeywordSet::new(&["generateSQL", "whereClause", "setClause"]);
