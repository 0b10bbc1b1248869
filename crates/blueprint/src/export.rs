//! Export of diagrams to DOT and to rendered images.
//!
//! [`dot`] builds the Graphviz graph every backend starts from. The image
//! backends live in private submodules and are selected by [`Backend`]:
//! Graphviz receives the full graph, the native engine a lowered copy.

pub mod dot;

mod native;

#[cfg(feature = "graphviz")]
mod graphviz;

use log::{debug, trace};

use blueprint_core::diagram::Diagram;

use crate::{
    BlueprintError,
    config::{Backend, StyleConfig},
};

/// Renders `diagram` with `backend` and returns the encoded image.
///
/// # Errors
///
/// Returns [`BlueprintError::Config`] for invalid style colors or a backend
/// that was not compiled in, and backend-specific errors otherwise.
pub(crate) fn render(
    diagram: &Diagram,
    style: &StyleConfig,
    backend: Backend,
) -> Result<Vec<u8>, BlueprintError> {
    debug!(backend:?; "Rendering diagram");
    match backend {
        Backend::Native => {
            let dot = dot::to_native_dot_string(diagram, style)?;
            trace!(dot = dot.as_str(); "Lowered DOT source");
            native::render(&dot).map(String::into_bytes)
        }
        Backend::Graphviz => render_graphviz(diagram, style),
    }
}

#[cfg(feature = "graphviz")]
fn render_graphviz(diagram: &Diagram, style: &StyleConfig) -> Result<Vec<u8>, BlueprintError> {
    graphviz::render(dot::to_graph(diagram, style)?)
}

#[cfg(not(feature = "graphviz"))]
fn render_graphviz(_diagram: &Diagram, _style: &StyleConfig) -> Result<Vec<u8>, BlueprintError> {
    Err(BlueprintError::Config(
        "the graphviz backend requires the `graphviz` feature".to_string(),
    ))
}
