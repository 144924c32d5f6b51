//! Class entity types: access modifiers, attributes, methods, and the class itself.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// UML access modifier for attributes and methods.
///
/// The names match external configuration strings (lowercase). `default` is
/// accepted as a synonym for package visibility, matching the terminology
/// some front ends use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    /// Default for attributes.
    #[default]
    Private,
    Protected,
    /// Package-private visibility.
    #[serde(alias = "default")]
    Package,
}

impl FromStr for Access {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "protected" => Ok(Self::Protected),
            "package" | "default" => Ok(Self::Package),
            _ => Err("Unsupported access modifier"),
        }
    }
}

impl From<Access> for &'static str {
    fn from(val: Access) -> Self {
        match val {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Package => "package",
        }
    }
}

impl Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A typed attribute (field) of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Declared type, free-form text (e.g. `String`, `int`).
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub access: Access,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, access: Access) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access,
        }
    }
}

/// An operation (method) of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// Declared return type, free-form text (e.g. `void`, `String`).
    #[serde(rename = "returns")]
    pub return_type: String,
    #[serde(default)]
    pub access: Access,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>, access: Access) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            access,
        }
    }
}

/// A class entity positioned on the diagram canvas.
///
/// The id is assigned at insertion time and never changes. Attribute and
/// method order is insertion order; it is visible in generated code but
/// carries no other meaning. Name and member validation (non-empty names
/// and the like) is a front-end concern, not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    id: Id,
    name: String,
    x: f64,
    y: f64,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
}

impl Class {
    /// Create a new Class.
    pub fn new(
        id: Id,
        name: impl Into<String>,
        x: f64,
        y: f64,
        attributes: Vec<Attribute>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            attributes,
            methods,
        }
    }

    /// Get the class identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canvas x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Canvas y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Borrow the attributes, in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Borrow the methods, in declaration order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Move the class on the canvas without touching any other field.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Merge the populated fields of `patch` into this class.
    pub fn apply(&mut self, patch: ClassPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(attributes) = patch.attributes {
            self.attributes = attributes;
        }
        if let Some(methods) = patch.methods {
            self.methods = methods;
        }
    }
}

/// Partial update for a [`Class`]; `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Method>>,
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn sample() -> Class {
        Class::new(
            Id::new("c1"),
            "Animal",
            40.0,
            60.0,
            vec![Attribute::new("name", "String", Access::Private)],
            vec![Method::new("speak", "void", Access::Public)],
        )
    }

    #[test]
    fn set_position_only_moves() {
        let mut class = sample();
        class.set_position(120.5, -3.25);
        assert!(approx_eq!(f64, class.x(), 120.5));
        assert!(approx_eq!(f64, class.y(), -3.25));
        assert_eq!(class.name(), "Animal");
        assert_eq!(class.attributes().len(), 1);
    }

    #[test]
    fn patch_merges_only_populated_fields() {
        let mut class = sample();
        class.apply(ClassPatch {
            name: Some("Creature".to_string()),
            methods: Some(Vec::new()),
            ..ClassPatch::default()
        });
        assert_eq!(class.name(), "Creature");
        assert!(class.methods().is_empty());
        // untouched fields survive
        assert_eq!(class.attributes().len(), 1);
        assert!(approx_eq!(f64, class.x(), 40.0));
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut class = sample();
        let before = class.clone();
        class.apply(ClassPatch::default());
        assert_eq!(class, before);
    }

    #[test]
    fn access_parses_default_synonym() {
        assert_eq!("default".parse::<Access>(), Ok(Access::Package));
        assert_eq!("package".parse::<Access>(), Ok(Access::Package));
        assert!("friend".parse::<Access>().is_err());
    }
}
