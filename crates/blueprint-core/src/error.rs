//! Errors raised while declaring a diagram.

use thiserror::Error;

/// Declaration errors.
///
/// These are programming errors in a diagram declaration: the builder rejects
/// them at the point of declaration so a broken catalog never reaches a
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("edge references undeclared node `{0}`")]
    UnknownNode(String),

    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("{0}")]
    InvalidColor(String),
}
