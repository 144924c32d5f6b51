//! The aggregate diagram state and its referential invariants.

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::identifier::Id;
use crate::model::{Class, Group, Relation};

/// Violation of a diagram referential invariant.
///
/// These indicate a bug in the mutation layer rather than bad user input;
/// callers are expected to fail fast when one surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate entity id {0}")]
    DuplicateId(Id),

    #[error("relation {relation} references missing class {endpoint}")]
    DanglingRelation { relation: Id, endpoint: Id },

    #[error("group {group} references missing class {member}")]
    UnknownMember { group: Id, member: Id },
}

/// The aggregate editor state: classes, relations, and groups.
///
/// The diagram is the unit of history snapshotting. All contained data is
/// owned, so [`Clone`] produces a fully independent deep copy: later
/// mutation of the live diagram can never retroactively alter a stored
/// snapshot.
///
/// Entity order is insertion order throughout and is visible in generated
/// code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    classes: Vec<Class>,
    relations: Vec<Relation>,
    groups: Vec<Group>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the classes, in insertion order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Borrow the relations, in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Borrow the groups, in insertion order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// True when the diagram holds no entities at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.relations.is_empty() && self.groups.is_empty()
    }

    /// Look up a class by id.
    pub fn class(&self, id: Id) -> Option<&Class> {
        self.classes.iter().find(|class| class.id() == id)
    }

    /// Look up a class by id, mutably.
    pub fn class_mut(&mut self, id: Id) -> Option<&mut Class> {
        self.classes.iter_mut().find(|class| class.id() == id)
    }

    /// Look up a relation by id.
    pub fn relation(&self, id: Id) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.id() == id)
    }

    /// Look up a relation by id, mutably.
    pub fn relation_mut(&mut self, id: Id) -> Option<&mut Relation> {
        self.relations.iter_mut().find(|relation| relation.id() == id)
    }

    /// The relation connecting `a` and `b` in either direction, if any.
    pub fn relation_between_mut(&mut self, a: Id, b: Id) -> Option<&mut Relation> {
        self.relations
            .iter_mut()
            .find(|relation| relation.connects(a, b))
    }

    /// Look up a group by id.
    pub fn group(&self, id: Id) -> Option<&Group> {
        self.groups.iter().find(|group| group.id() == id)
    }

    /// Look up a group by id, mutably.
    pub fn group_mut(&mut self, id: Id) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.id() == id)
    }

    /// Append a class.
    pub fn insert_class(&mut self, class: Class) {
        self.classes.push(class);
    }

    /// Remove a class, cascading to every relation touching it and pruning
    /// it from every group's member list. Returns false when the id is
    /// unknown, leaving the diagram untouched.
    pub fn remove_class(&mut self, id: Id) -> bool {
        let Some(index) = self.classes.iter().position(|class| class.id() == id) else {
            return false;
        };
        self.classes.remove(index);

        let relations_before = self.relations.len();
        self.relations.retain(|relation| !relation.touches(id));
        let pruned_relations = relations_before - self.relations.len();

        let mut pruned_members = 0usize;
        for group in &mut self.groups {
            if group.remove_member(id) {
                pruned_members += 1;
            }
        }

        debug!(class:% = id, pruned_relations, pruned_members; "Removed class with cascade");
        true
    }

    /// Append a relation.
    pub fn insert_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Remove a relation by id. Returns false when the id is unknown.
    pub fn remove_relation(&mut self, id: Id) -> bool {
        let before = self.relations.len();
        self.relations.retain(|relation| relation.id() != id);
        self.relations.len() != before
    }

    /// Append a group.
    pub fn insert_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Remove a group by id. Returns false when the id is unknown.
    pub fn remove_group(&mut self, id: Id) -> bool {
        let before = self.groups.len();
        self.groups.retain(|group| group.id() != id);
        self.groups.len() != before
    }

    /// Clear all entities. Returns false when the diagram was already empty.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.classes.clear();
        self.relations.clear();
        self.groups.clear();
        true
    }

    /// Verify the diagram's referential invariants: unique ids per entity
    /// kind, relation endpoints referencing existing classes, and group
    /// members referencing existing classes.
    pub fn check_integrity(&self) -> Result<(), ModelError> {
        let mut class_ids = HashSet::new();
        for class in &self.classes {
            if !class_ids.insert(class.id()) {
                return Err(ModelError::DuplicateId(class.id()));
            }
        }

        let mut relation_ids = HashSet::new();
        for relation in &self.relations {
            if !relation_ids.insert(relation.id()) {
                return Err(ModelError::DuplicateId(relation.id()));
            }
            for endpoint in [relation.source(), relation.target()] {
                if !class_ids.contains(&endpoint) {
                    return Err(ModelError::DanglingRelation {
                        relation: relation.id(),
                        endpoint,
                    });
                }
            }
        }

        let mut group_ids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id()) {
                return Err(ModelError::DuplicateId(group.id()));
            }
            for member in group.members() {
                if !class_ids.contains(member) {
                    return Err(ModelError::UnknownMember {
                        group: group.id(),
                        member: *member,
                    });
                }
            }
        }

        Ok(())
    }
}
