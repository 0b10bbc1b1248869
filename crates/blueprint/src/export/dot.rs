//! Conversion of a [`Diagram`] into a Graphviz DOT graph.
//!
//! The graph is assembled as a `dot-structures` AST and printed with
//! `graphviz-rust`. Clusters become `subgraph cluster_<n>` blocks nested the
//! same way they were declared; edges follow all node and cluster statements
//! in declaration order. The output only depends on the diagram and the
//! style, so rebuilding an unchanged diagram prints identical DOT.
//!
//! [`to_native_dot_string`] prints a lowered variant for the `layout-rs`
//! engine, which understands neither clusters, `dir`, `dotted` nor `bold`.

use std::mem;

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::warn;

use blueprint_core::{
    diagram::{self, ClusterIndex, Diagram},
    stroke::{EdgeDirection, LineStyle},
};

use crate::{BlueprintError, config::StyleConfig};

const GRAPH_PAD: &str = "2.0";
const NODE_SEP: &str = "0.60";
const RANK_SEP: &str = "0.75";
const SPLINES: &str = "ortho";
const NODE_FONT_SIZE_DELTA: u32 = 2;
const CLUSTER_FONT_SIZE_DELTA: u32 = 3;
const NATIVE_BOLD_PEN_WIDTH: &str = "2";

/// Engine the DOT is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Graphviz,
    /// Flat graph, forward arrows, `dashed` as the only line pattern.
    Native,
}

/// Builds the DOT graph for `diagram`.
///
/// # Errors
///
/// Returns [`BlueprintError::Config`] if a style color cannot be parsed.
pub fn to_graph(diagram: &Diagram, style: &StyleConfig) -> Result<Graph, BlueprintError> {
    build(diagram, style, Flavor::Graphviz)
}

/// Builds and prints the DOT source for `diagram`.
///
/// # Errors
///
/// Returns [`BlueprintError::Config`] if a style color cannot be parsed.
pub fn to_dot_string(diagram: &Diagram, style: &StyleConfig) -> Result<String, BlueprintError> {
    let graph = to_graph(diagram, style)?;
    Ok(graph.print(&mut PrinterContext::default()))
}

/// Prints the DOT source lowered for the `layout-rs` engine.
///
/// - clusters are dropped and every node is emitted at the top level;
/// - [`EdgeDirection::Back`] edges have their endpoints swapped, so the
///   arrowhead still lands on the declared source;
/// - dotted edges become dashed and bold edges get a wider pen.
///
/// # Errors
///
/// Returns [`BlueprintError::Config`] if a style color cannot be parsed.
pub fn to_native_dot_string(
    diagram: &Diagram,
    style: &StyleConfig,
) -> Result<String, BlueprintError> {
    let graph = build(diagram, style, Flavor::Native)?;
    Ok(graph.print(&mut PrinterContext::default()))
}

fn build(diagram: &Diagram, style: &StyleConfig, flavor: Flavor) -> Result<Graph, BlueprintError> {
    let mut stmts = defaults(diagram, style).map_err(BlueprintError::Config)?;

    match flavor {
        Flavor::Graphviz => {
            stmts.extend(diagram.nodes_in(None).map(node_stmt));
            for cluster in diagram.child_clusters(None) {
                stmts.push(Stmt::Subgraph(
                    cluster_subgraph(diagram, cluster, style).map_err(BlueprintError::Config)?,
                ));
            }
        }
        Flavor::Native => {
            if !diagram.clusters().is_empty() {
                warn!(
                    title = diagram.title(),
                    clusters = diagram.clusters().len();
                    "The native backend cannot draw clusters, they are left out"
                );
            }
            stmts.extend(diagram.nodes().map(node_stmt));
        }
    }
    stmts.extend(diagram.edges().iter().map(|edge| edge_stmt(edge, flavor)));

    Ok(Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    })
}

fn defaults(diagram: &Diagram, style: &StyleConfig) -> Result<Vec<Stmt>, String> {
    let font_color = style.font_color()?.to_hex();

    let mut graph_attrs = vec![
        attr("label", quoted(diagram.title())),
        attr("rankdir", plain(diagram.direction().to_dot_value())),
        attr("pad", quoted(GRAPH_PAD)),
        attr("splines", plain(SPLINES)),
        attr("nodesep", quoted(NODE_SEP)),
        attr("ranksep", quoted(RANK_SEP)),
        attr("fontname", quoted(style.font_name())),
        attr("fontsize", plain(&style.font_size().to_string())),
        attr("fontcolor", quoted(&font_color)),
    ];
    if let Some(background) = style.background_color()? {
        graph_attrs.push(attr("bgcolor", quoted(&background.to_hex())));
    }

    let node_font_size = style.font_size().saturating_sub(NODE_FONT_SIZE_DELTA);
    let node_attrs = vec![
        attr("style", plain("rounded")),
        attr("fontname", quoted(style.font_name())),
        attr("fontsize", plain(&node_font_size.to_string())),
        attr("fontcolor", quoted(&font_color)),
    ];

    let edge_attrs = vec![attr("color", quoted(&style.edge_color()?.to_hex()))];

    Ok(vec![
        Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)),
        Stmt::GAttribute(GraphAttributes::Node(node_attrs)),
        Stmt::GAttribute(GraphAttributes::Edge(edge_attrs)),
    ])
}

fn cluster_subgraph(
    diagram: &Diagram,
    index: ClusterIndex,
    style: &StyleConfig,
) -> Result<Subgraph, String> {
    let cluster = diagram.cluster_at(index);
    let font_size = style.font_size().saturating_sub(CLUSTER_FONT_SIZE_DELTA);

    let mut stmts = vec![
        Stmt::Attribute(attr("label", quoted(cluster.label()))),
        Stmt::Attribute(attr("style", plain("rounded"))),
        Stmt::Attribute(attr("labeljust", plain("l"))),
        Stmt::Attribute(attr("fontsize", plain(&font_size.to_string()))),
        Stmt::Attribute(attr(
            "pencolor",
            quoted(&style.cluster_border_color()?.to_hex()),
        )),
    ];
    if let Some(background) = style.cluster_color(cluster.depth())? {
        stmts.push(Stmt::Attribute(attr("bgcolor", quoted(&background.to_hex()))));
    }

    stmts.extend(diagram.nodes_in(Some(index)).map(node_stmt));
    for child in diagram.child_clusters(Some(index)) {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, child, style)?));
    }

    Ok(Subgraph {
        id: plain(&format!("cluster_{}", index.get())),
        stmts,
    })
}

fn node_stmt(node: &diagram::Node) -> Stmt {
    let kind = node.kind();
    let mut attributes = vec![
        attr("label", quoted(node.label())),
        attr("shape", plain(kind.shape())),
    ];
    if let Some(icon) = kind.icon() {
        attributes.push(attr("image", quoted(&icon.to_string_lossy())));
        attributes.push(attr("imagescale", plain("true")));
        attributes.push(attr("labelloc", plain("b")));
    }

    Stmt::Node(Node {
        id: node_id(node.id()),
        attributes,
    })
}

fn edge_stmt(edge: &diagram::Edge, flavor: Flavor) -> Stmt {
    let attrs = edge.attributes();
    let mut source = edge.source();
    let mut target = edge.target();
    let mut direction = attrs.arrow_direction();
    if flavor == Flavor::Native && direction == EdgeDirection::Back {
        mem::swap(&mut source, &mut target);
        direction = EdgeDirection::Forward;
    }

    let mut attributes = Vec::new();
    if let Some(label) = attrs.label_text() {
        attributes.push(attr("label", quoted(label)));
    }
    if let Some(color) = attrs.color_value() {
        attributes.push(attr("color", quoted(&color.to_hex())));
    }
    match (flavor, attrs.line_style()) {
        (Flavor::Native, LineStyle::Dotted) => {
            attributes.push(attr("style", plain("dashed")));
        }
        (Flavor::Native, LineStyle::Bold) => {
            attributes.push(attr("penwidth", plain(NATIVE_BOLD_PEN_WIDTH)));
        }
        (_, line_style) => {
            if let Some(value) = line_style.to_dot_value() {
                attributes.push(attr("style", plain(value)));
            }
        }
    }
    if let Some(dir) = direction.to_dot_value() {
        attributes.push(attr("dir", plain(dir)));
    }

    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(Vertex::N(node_id(source)), Vertex::N(node_id(target))),
        attributes,
    })
}

fn node_id(id: blueprint_core::identifier::Id) -> NodeId {
    NodeId(quoted(&id.name()), None)
}

fn attr(key: &str, value: Id) -> Attribute {
    Attribute(plain(key), value)
}

fn plain(value: &str) -> Id {
    Id::Plain(value.to_string())
}

/// Wraps `text` in a DOT string literal; line breaks become `\n` escapes.
fn quoted(text: &str) -> Id {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    Id::Escaped(format!("\"{escaped}\""))
}
