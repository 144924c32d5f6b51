//! Diagram document loading and replay.
//!
//! A document is a TOML description of a diagram: classes with nested
//! attributes and methods, relations referencing classes by name, and
//! groups. Replaying a document drives every entity through the editor's
//! command dispatch, so batch input follows the exact same transactional
//! path as interactive edits.

use std::{collections::HashMap, fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use maquette::identifier::Id;
use maquette::model::{Attribute, Method, RelationKind};
use maquette::{Command, Editor, MaquetteError};

/// Root of a TOML diagram document.
#[derive(Debug, Default, Deserialize)]
pub struct DiagramDocument {
    #[serde(default)]
    classes: Vec<ClassDoc>,
    #[serde(default)]
    relations: Vec<RelationDoc>,
    #[serde(default)]
    groups: Vec<GroupDoc>,
}

#[derive(Debug, Deserialize)]
struct ClassDoc {
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    methods: Vec<Method>,
}

/// Relations name their endpoints; ids only exist once classes are
/// inserted.
#[derive(Debug, Deserialize)]
struct RelationDoc {
    source: String,
    target: String,
    #[serde(rename = "type", default)]
    kind: RelationKind,
    #[serde(default)]
    source_cardinality: Option<String>,
    #[serde(default)]
    target_cardinality: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroupDoc {
    name: String,
    #[serde(default)]
    members: Vec<String>,
}

/// Load a diagram document from a TOML file.
///
/// # Errors
///
/// Returns `MaquetteError::Io` when the file cannot be read and a
/// `Document` error, carrying the source text and offending span, when it
/// is not valid TOML.
pub fn load(path: impl AsRef<Path>) -> Result<DiagramDocument, MaquetteError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading diagram document");

    let content = fs::read_to_string(path)?;
    let document = toml::from_str(&content).map_err(|err| {
        MaquetteError::new_document_error_with_source(
            err.message().to_string(),
            content.as_str(),
            err.span(),
        )
    })?;

    Ok(document)
}

/// Replay `document` into `editor`, resolving relation endpoints and group
/// members by class name.
///
/// # Errors
///
/// Returns a `Document` error for duplicate class names or references to
/// classes the document never declares.
pub fn apply(document: &DiagramDocument, editor: &mut Editor) -> Result<(), MaquetteError> {
    let mut ids_by_name: HashMap<&str, Id> = HashMap::new();

    for class in &document.classes {
        if ids_by_name.contains_key(class.name.as_str()) {
            return Err(MaquetteError::new_document_error(format!(
                "duplicate class name `{}` in document",
                class.name
            )));
        }
        editor.dispatch(Command::AddClass {
            name: class.name.clone(),
            x: class.x,
            y: class.y,
            attributes: class.attributes.clone(),
            methods: class.methods.clone(),
        })?;
        let id = editor
            .diagram()
            .classes()
            .last()
            .expect("class was just inserted")
            .id();
        ids_by_name.insert(class.name.as_str(), id);
    }

    for relation in &document.relations {
        let source = resolve(&ids_by_name, &relation.source)?;
        let target = resolve(&ids_by_name, &relation.target)?;
        editor.dispatch(Command::AddRelation {
            source,
            target,
            kind: relation.kind,
            source_cardinality: relation.source_cardinality.clone(),
            target_cardinality: relation.target_cardinality.clone(),
        })?;
    }

    for group in &document.groups {
        let members = group
            .members
            .iter()
            .map(|name| resolve(&ids_by_name, name))
            .collect::<Result<Vec<_>, _>>()?;
        editor.dispatch(Command::AddGroup {
            name: group.name.clone(),
            members,
        })?;
    }

    debug!(
        classes = document.classes.len(),
        relations = document.relations.len(),
        groups = document.groups.len();
        "Document replayed"
    );

    Ok(())
}

fn resolve(ids_by_name: &HashMap<&str, Id>, name: &str) -> Result<Id, MaquetteError> {
    ids_by_name.get(name).copied().ok_or_else(|| {
        MaquetteError::new_document_error(format!("reference to unknown class `{name}`"))
    })
}
