//! Editor commands - the closed set of operations that modify diagram state.
//!
//! Commands are intent-based: they describe what the user wants, not how to
//! achieve it. The dispatch layer handles snapshotting for undo, integrity
//! checking, and redo-stack invalidation.
//!
//! Commands are serializable so that edit scripts can be recorded and
//! replayed, and so external front ends can drive the editor over a text
//! boundary.

use serde::{Deserialize, Serialize};

use maquette_core::identifier::Id;
use maquette_core::model::{
    Attribute, ClassPatch, GroupPatch, Method, RelationKind, RelationPatch,
};

/// A command that modifies diagram state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // === Classes ===
    /// Create a new class at a canvas position.
    ///
    /// The id is assigned at insertion time. Field validation (non-empty
    /// names and the like) is a front-end concern; any strings are accepted.
    AddClass {
        name: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        attributes: Vec<Attribute>,
        #[serde(default)]
        methods: Vec<Method>,
    },

    /// Merge the populated patch fields into the class with `id`.
    UpdateClass {
        id: Id,
        #[serde(flatten)]
        patch: ClassPatch,
    },

    /// Delete a class, cascading to its relations and group memberships.
    DeleteClass { id: Id },

    /// Reposition a class on the canvas.
    ///
    /// The one unrecorded command: continuous drags would flood the undo
    /// history with per-frame positions, so moves bypass snapshotting.
    MoveClass { id: Id, x: f64, y: f64 },

    // === Relations ===
    /// Connect two classes, or retype their existing connection.
    ///
    /// At most one relation connects any unordered pair of classes. When a
    /// relation already connects `source` and `target` in either direction,
    /// its kind and cardinalities are overwritten in place instead of adding
    /// a duplicate edge.
    AddRelation {
        source: Id,
        target: Id,
        #[serde(default)]
        kind: RelationKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_cardinality: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_cardinality: Option<String>,
    },

    /// Merge the populated patch fields into the relation with `id`.
    UpdateRelation {
        id: Id,
        #[serde(flatten)]
        patch: RelationPatch,
    },

    /// Delete a relation.
    DeleteRelation { id: Id },

    // === Groups ===
    /// Create a new group over the given member classes.
    AddGroup {
        name: String,
        #[serde(default)]
        members: Vec<Id>,
    },

    /// Merge the populated patch fields into the group with `id`.
    UpdateGroup {
        id: Id,
        #[serde(flatten)]
        patch: GroupPatch,
    },

    /// Delete a group. Member classes are unaffected.
    RemoveGroup { id: Id },

    // === Session ===
    /// Clear the whole diagram.
    ResetDiagram,
}

impl Command {
    /// Whether dispatching this command records an undo snapshot.
    pub fn records_history(&self) -> bool {
        !matches!(self, Command::MoveClass { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_moves_bypass_history() {
        let move_class = Command::MoveClass {
            id: Id::new("c1"),
            x: 1.0,
            y: 2.0,
        };
        assert!(!move_class.records_history());
        assert!(Command::ResetDiagram.records_history());
        assert!(Command::DeleteClass { id: Id::new("c1") }.records_history());
    }

    #[test]
    fn commands_round_trip_through_json() {
        let command = Command::AddRelation {
            source: Id::new("c1"),
            target: Id::new("c2"),
            kind: RelationKind::Composition,
            source_cardinality: Some("1".to_string()),
            target_cardinality: Some("0..*".to_string()),
        };
        let json = serde_json::to_string(&command).expect("serialize");
        let back: Command = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, command);
    }

    #[test]
    fn update_commands_flatten_their_patch() {
        let json = r#"{"type": "update_class", "id": "c1", "name": "Creature"}"#;
        let command: Command = serde_json::from_str(json).expect("deserialize");
        match command {
            Command::UpdateClass { id, patch } => {
                assert_eq!(id, Id::new("c1"));
                assert_eq!(patch.name.as_deref(), Some("Creature"));
                assert!(patch.attributes.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
