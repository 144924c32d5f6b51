//! Relation types: edges between classes, carrying a kind and cardinalities.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// The kind of a relation between two classes.
///
/// The names match external configuration strings (lowercase).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Plain association (default)
    #[default]
    Association,
    Aggregation,
    Composition,
    /// Inheritance; drives subclass declarations in generated code. The
    /// source is the subclass, the target the superclass.
    Generalization,
    Implementation,
    Dependency,
}

impl FromStr for RelationKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "association" => Ok(Self::Association),
            "aggregation" => Ok(Self::Aggregation),
            "composition" => Ok(Self::Composition),
            "generalization" => Ok(Self::Generalization),
            "implementation" => Ok(Self::Implementation),
            "dependency" => Ok(Self::Dependency),
            _ => Err("Unsupported relation kind"),
        }
    }
}

impl From<RelationKind> for &'static str {
    fn from(val: RelationKind) -> Self {
        match val {
            RelationKind::Association => "association",
            RelationKind::Aggregation => "aggregation",
            RelationKind::Composition => "composition",
            RelationKind::Generalization => "generalization",
            RelationKind::Implementation => "implementation",
            RelationKind::Dependency => "dependency",
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A relation (edge) between two classes.
///
/// Both endpoints must reference existing classes; relations touching a
/// deleted class are pruned by the diagram. At most one relation connects
/// any unordered pair of classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    id: Id,
    source: Id,
    target: Id,
    kind: RelationKind,
    source_cardinality: Option<String>,
    target_cardinality: Option<String>,
}

impl Relation {
    /// Create a new Relation between two class ids.
    pub fn new(
        id: Id,
        source: Id,
        target: Id,
        kind: RelationKind,
        source_cardinality: Option<String>,
        target_cardinality: Option<String>,
    ) -> Self {
        Self {
            id,
            source,
            target,
            kind,
            source_cardinality,
            target_cardinality,
        }
    }

    /// Get the relation identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the source class id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target class id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the relation kind.
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Cardinality label at the source end, if any.
    pub fn source_cardinality(&self) -> Option<&str> {
        self.source_cardinality.as_deref()
    }

    /// Cardinality label at the target end, if any.
    pub fn target_cardinality(&self) -> Option<&str> {
        self.target_cardinality.as_deref()
    }

    /// True when this relation connects `a` and `b`, in either direction.
    pub fn connects(&self, a: Id, b: Id) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// True when either endpoint is `class`.
    pub fn touches(&self, class: Id) -> bool {
        self.source == class || self.target == class
    }

    /// Replace the relation kind.
    pub fn set_kind(&mut self, kind: RelationKind) {
        self.kind = kind;
    }

    /// Replace both cardinality labels.
    pub fn set_cardinalities(&mut self, source: Option<String>, target: Option<String>) {
        self.source_cardinality = source;
        self.target_cardinality = target;
    }

    /// Merge the populated fields of `patch` into this relation.
    pub fn apply(&mut self, patch: RelationPatch) {
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(target) = patch.target {
            self.target = target;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(source_cardinality) = patch.source_cardinality {
            self.source_cardinality = Some(source_cardinality);
        }
        if let Some(target_cardinality) = patch.target_cardinality {
            self.target_cardinality = Some(target_cardinality);
        }
    }
}

/// Partial update for a [`Relation`]; `None` fields are left untouched.
///
/// Cardinality labels can be set through a patch but not cleared; clearing
/// happens when a relation is retyped wholesale.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_cardinality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cardinality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_is_direction_insensitive() {
        let a = Id::new("a");
        let b = Id::new("b");
        let c = Id::new("c");
        let relation = Relation::new(Id::new("r1"), a, b, RelationKind::Association, None, None);
        assert!(relation.connects(a, b));
        assert!(relation.connects(b, a));
        assert!(!relation.connects(a, c));
    }

    #[test]
    fn patch_retypes_without_touching_endpoints() {
        let mut relation = Relation::new(
            Id::new("r1"),
            Id::new("a"),
            Id::new("b"),
            RelationKind::Association,
            Some("1".to_string()),
            None,
        );
        relation.apply(RelationPatch {
            kind: Some(RelationKind::Composition),
            target_cardinality: Some("0..*".to_string()),
            ..RelationPatch::default()
        });
        assert_eq!(relation.kind(), RelationKind::Composition);
        assert_eq!(relation.source(), Id::new("a"));
        assert_eq!(relation.source_cardinality(), Some("1"));
        assert_eq!(relation.target_cardinality(), Some("0..*"));
    }

    #[test]
    fn kind_parses_all_names() {
        for name in [
            "association",
            "aggregation",
            "composition",
            "generalization",
            "implementation",
            "dependency",
        ] {
            let kind: RelationKind = name.parse().expect("known kind");
            assert_eq!(kind.to_string(), name);
        }
        assert!("friendship".parse::<RelationKind>().is_err());
    }
}
