//! Named groupings of classes.

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// A named grouping of classes.
///
/// Members reference classes by id. When a member class is deleted from the
/// diagram it is pruned from every group, so member lists never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: Id,
    name: String,
    members: Vec<Id>,
}

impl Group {
    /// Create a new Group.
    pub fn new(id: Id, name: impl Into<String>, members: Vec<Id>) -> Self {
        Self {
            id,
            name: name.into(),
            members,
        }
    }

    /// Get the group identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the member class ids, in insertion order.
    pub fn members(&self) -> &[Id] {
        &self.members
    }

    /// Remove `class` from the member list. Returns true when it was present.
    pub fn remove_member(&mut self, class: Id) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != class);
        self.members.len() != before
    }

    /// Merge the populated fields of `patch` into this group.
    pub fn apply(&mut self, patch: GroupPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
    }
}

/// Partial update for a [`Group`]; `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Id>>,
}
