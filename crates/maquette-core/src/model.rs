//! Class-diagram model types.
//!
//! This module contains the editor's semantic model: the entities a user
//! places on the canvas and the aggregate state they form.
//!
//! # Editor Position
//!
//! ```text
//! UI Intent (Command)
//!     ↓ dispatch (snapshot + apply)
//! Diagram (these types)
//!     ↓ generate
//! Source skeleton text
//! ```
//!
//! # Organization
//!
//! - [`class`] - Class entities: [`Class`], [`Attribute`], [`Method`], [`Access`]
//! - [`relation`] - Edges between classes: [`Relation`], [`RelationKind`]
//! - [`group`] - Named groupings of classes: [`Group`]
//! - [`diagram`] - The aggregate state and its invariants: [`Diagram`], [`ModelError`]

pub mod class;
pub mod diagram;
pub mod group;
pub mod relation;

pub use class::*;
pub use diagram::*;
pub use group::*;
pub use relation::*;
