//! Application of [`Command`]s to a [`Diagram`].
//!
//! Each command is an in-place transform of an exclusively owned diagram;
//! [`apply`] reports whether anything changed so the caller can decide
//! whether a history entry is warranted. "Entity not found" is a silent
//! no-op rather than an error: such cases are benign races between the
//! front end and the state (a double-dispatched delete, an update landing
//! after its target was removed).

use log::debug;

use maquette_core::identifier::Id;
use maquette_core::model::{Class, Diagram, Group, Relation};

use crate::command::Command;

/// Apply `command` to `diagram`, returning whether the diagram changed.
pub fn apply(diagram: &mut Diagram, command: Command) -> bool {
    match command {
        Command::AddClass {
            name,
            x,
            y,
            attributes,
            methods,
        } => {
            let id = Id::fresh("c");
            diagram.insert_class(Class::new(id, name, x, y, attributes, methods));
            true
        }

        Command::UpdateClass { id, patch } => match diagram.class_mut(id) {
            Some(class) => {
                class.apply(patch);
                true
            }
            None => false,
        },

        Command::DeleteClass { id } => diagram.remove_class(id),

        Command::MoveClass { id, x, y } => match diagram.class_mut(id) {
            Some(class) => {
                class.set_position(x, y);
                true
            }
            None => false,
        },

        Command::AddRelation {
            source,
            target,
            kind,
            source_cardinality,
            target_cardinality,
        } => {
            if let Some(existing) = diagram.relation_between_mut(source, target) {
                debug!(relation:% = existing.id(); "Retyping existing relation between pair");
                existing.set_kind(kind);
                existing.set_cardinalities(source_cardinality, target_cardinality);
            } else {
                let id = Id::fresh("r");
                diagram.insert_relation(Relation::new(
                    id,
                    source,
                    target,
                    kind,
                    source_cardinality,
                    target_cardinality,
                ));
            }
            true
        }

        Command::UpdateRelation { id, patch } => match diagram.relation_mut(id) {
            Some(relation) => {
                relation.apply(patch);
                true
            }
            None => false,
        },

        Command::DeleteRelation { id } => diagram.remove_relation(id),

        Command::AddGroup { name, members } => {
            let id = Id::fresh("g");
            diagram.insert_group(Group::new(id, name, members));
            true
        }

        Command::UpdateGroup { id, patch } => match diagram.group_mut(id) {
            Some(group) => {
                group.apply(patch);
                true
            }
            None => false,
        },

        Command::RemoveGroup { id } => diagram.remove_group(id),

        Command::ResetDiagram => diagram.clear(),
    }
}
