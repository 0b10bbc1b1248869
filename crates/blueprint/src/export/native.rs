//! SVG rendering through the pure-Rust `layout-rs` engine.
//!
//! The engine consumes DOT text printed by
//! [`dot::to_native_dot_string`](super::dot::to_native_dot_string). It has no
//! clusters and draws most shapes as circles, so it is only a fallback for
//! machines without Graphviz.

use layout::{
    backends::svg::SVGWriter,
    gv::{DotParser, GraphBuilder},
};

use crate::BlueprintError;

/// Lays out `dot` and returns the SVG document.
///
/// # Errors
///
/// Returns [`BlueprintError::Layout`] if the engine cannot parse the DOT source.
pub(super) fn render(dot: &str) -> Result<String, BlueprintError> {
    let mut parser = DotParser::new(dot);
    let graph = parser.process().map_err(BlueprintError::Layout)?;

    let mut builder = GraphBuilder::new();
    builder.visit_graph(&graph);
    let mut visual = builder.get();

    let mut writer = SVGWriter::new();
    visual.do_it(false, false, false, &mut writer);
    Ok(writer.finalize())
}
