//! Source-skeleton generation from the diagram model.
//!
//! # Pipeline Position
//!
//! ```text
//! UI Intent (Command)
//!     ↓ dispatch (snapshot + apply)
//! Diagram (semantic model)
//!     ↓ generate (this module)
//! Source skeleton text
//! ```
//!
//! # Available Backends
//!
//! - [`Language::Java`] — fields, accessor pairs, `extends` declarations
//! - [`Language::Php`] — `$`-properties, accessor pairs, `extends`
//! - [`Language::Python`] — `__init__` fields and `@property` accessors
//!
//! # Error Handling
//!
//! Generation never fails. It is a best-effort rendering of possibly
//! transiently-inconsistent state: an inheritance edge whose parent class
//! cannot be resolved is skipped rather than reported. Output is
//! deterministic — identical input always produces byte-identical text.

mod java;
mod php;
mod python;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::Deserialize;

use maquette_core::model::{Class, Relation, RelationKind};

/// Target languages for skeleton generation.
///
/// The names match external configuration strings (lowercase).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java (default)
    #[default]
    Java,
    Php,
    Python,
}

impl Language {
    /// Parse a language name, falling back to the default target for
    /// unrecognized values. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Self {
        name.to_lowercase().parse().unwrap_or_else(|_| {
            debug!(name; "Unknown target language, falling back to default");
            Language::default()
        })
    }

    /// Conventional file extension for generated output.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Php => "php",
            Language::Python => "py",
        }
    }
}

impl FromStr for Language {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(Self::Java),
            "php" => Ok(Self::Php),
            "python" => Ok(Self::Python),
            _ => Err("Unsupported target language"),
        }
    }
}

impl From<Language> for &'static str {
    fn from(val: Language) -> Self {
        match val {
            Language::Java => "java",
            Language::Php => "php",
            Language::Python => "python",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Generate a source skeleton for every class, in declaration order.
pub fn generate(classes: &[Class], relations: &[Relation], language: Language) -> String {
    match language {
        Language::Java => java::generate(classes, relations),
        Language::Php => php::generate(classes, relations),
        Language::Python => python::generate(classes, relations),
    }
}

/// Resolve the superclass of `class` via its generalization edge.
///
/// The subclass sits at the source end of a generalization, the superclass
/// at the target end. Returns `None` when there is no such edge or the
/// referenced class no longer exists.
fn parent_of<'a>(class: &Class, classes: &'a [Class], relations: &[Relation]) -> Option<&'a Class> {
    let inheritance = relations.iter().find(|relation| {
        relation.kind() == RelationKind::Generalization && relation.source() == class.id()
    })?;
    classes
        .iter()
        .find(|parent| parent.id() == inheritance.target())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
