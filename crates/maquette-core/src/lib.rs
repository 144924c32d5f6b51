//! Maquette Core Types and Definitions
//!
//! This crate provides the foundational types for the Maquette class-diagram
//! editor. It includes:
//!
//! - **Identifiers**: Efficient string-interned entity identifiers ([`identifier::Id`])
//! - **Model**: The class-diagram model and its invariants ([`model`] module)

pub mod identifier;
pub mod model;
