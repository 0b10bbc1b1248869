//! PNG rendering through the Graphviz `dot` executable.

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::PrinterContext,
};

use crate::BlueprintError;

/// Runs `dot -Tpng` on `graph` and returns the encoded image.
///
/// # Errors
///
/// Returns [`BlueprintError::Export`] if `dot` is not installed or fails.
pub(super) fn render(graph: Graph) -> Result<Vec<u8>, BlueprintError> {
    exec(
        graph,
        &mut PrinterContext::default(),
        vec![CommandArg::Format(Format::Png)],
    )
    .map_err(|err| BlueprintError::Export(Box::new(err)))
}
