//! Blueprint Core Types and Definitions
//!
//! This crate provides the diagram model shared by the Blueprint library and
//! CLI. It includes:
//!
//! - **Identifiers**: String-interned node keys ([`identifier::Id`])
//! - **Colors**: CSS color parsing and hex export ([`color::Color`])
//! - **Strokes**: Line styles, arrow and rank directions ([`stroke`] module)
//! - **Diagram**: Nodes, clusters, edges and the scoped builder ([`diagram`] module)

pub mod color;
pub mod diagram;
pub mod identifier;
pub mod stroke;

mod error;

pub use error::DiagramError;
