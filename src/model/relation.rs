//! Association descriptors for relation fields

use std::fmt;

/// Kind of association between two generated models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    HasOne,
    HasMany,
    BelongsTo,
    Many2Many,
}

impl RelationshipKind {
    /// Tag name used in generated code and templates
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::HasOne => "has_one",
            RelationshipKind::HasMany => "has_many",
            RelationshipKind::BelongsTo => "belongs_to",
            RelationshipKind::Many2Many => "many_many",
        }
    }

    /// True if the field holds a collection of associated models
    pub fn is_collection(&self) -> bool {
        matches!(self, RelationshipKind::HasMany | RelationshipKind::Many2Many)
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An association from one generated model to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Field name on the owning model (e.g., "CreditCards")
    pub name: String,
    pub kind: RelationshipKind,
    /// Associated model type (e.g., "model.CreditCard")
    pub field_type: String,
    /// Dotted path from the root model, for nested relations
    pub field_path: String,
    /// Relations declared on the associated model
    pub child_relations: Vec<Relation>,
}

impl Relation {
    pub fn new(
        kind: RelationshipKind,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            field_path: name.clone(),
            name,
            kind,
            field_type: field_type.into(),
            child_relations: Vec::new(),
        }
    }

    /// Add a nested relation; its path is prefixed with this relation's path
    pub fn with_child(mut self, mut child: Relation) -> Self {
        child.prefix_path(&self.field_path);
        self.child_relations.push(child);
        self
    }

    fn prefix_path(&mut self, parent: &str) {
        self.field_path = format!("{}.{}", parent, self.field_path);
        for child in &mut self.child_relations {
            child.prefix_path(parent);
        }
    }

    /// Go type of the relation field: `Model` or `[]Model` for collections
    pub fn go_type(&self) -> String {
        if self.kind.is_collection() {
            format!("[]{}", self.field_type)
        } else {
            self.field_type.clone()
        }
    }
}
