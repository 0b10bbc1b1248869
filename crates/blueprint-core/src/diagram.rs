//! Diagram model: nodes grouped into nested clusters, joined by styled edges.
//!
//! A [`Diagram`] is declared top to bottom and never mutated afterwards:
//!
//! - [`Diagram::cluster`] opens a [`ClusterScope`]; nodes and sub-clusters
//!   declared inside the closure belong to that cluster.
//! - [`Diagram::connect`] adds a directed edge between two nodes that must
//!   already exist.
//!
//! # Example
//!
//! ```
//! use blueprint_core::{
//!     diagram::{Diagram, EdgeAttributes, NodeKind},
//!     stroke::{Direction, LineStyle},
//! };
//!
//! let mut diagram = Diagram::new("Demo", Direction::TopToBottom);
//! diagram
//!     .cluster("Frontend", |frontend| {
//!         frontend.node("app", "App", NodeKind::Server)?;
//!         frontend.node("cache", "Cache", NodeKind::Storage)?;
//!         Ok(())
//!     })
//!     .unwrap();
//! diagram
//!     .connect("app", "cache", EdgeAttributes::new().label("Store").style(LineStyle::Dashed))
//!     .unwrap();
//!
//! assert!(diagram.connect("app", "missing", EdgeAttributes::new()).is_err());
//! assert_eq!(diagram.edges().len(), 1);
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::trace;

use crate::{
    DiagramError,
    color::Color,
    identifier::Id,
    stroke::{Direction, EdgeDirection, LineStyle},
};

/// Position of a cluster in its diagram's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterIndex(usize);

impl ClusterIndex {
    /// Returns the zero-based declaration position.
    pub fn get(self) -> usize {
        self.0
    }
}

/// A named visual grouping of nodes and sub-clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    label: String,
    parent: Option<ClusterIndex>,
    depth: usize,
}

impl Cluster {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ClusterIndex> {
        self.parent
    }

    /// Nesting depth; top-level clusters have depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Visual category of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A single human actor
    Actor,
    /// A group of human actors
    ActorGroup,
    Server,
    Storage,
    Database,
    /// A UML use case
    UseCase,
    /// A node drawn with an external icon; falls back to a plain box when
    /// the icon is unavailable.
    Custom { icon: Option<PathBuf> },
}

impl NodeKind {
    /// Creates a [`NodeKind::Custom`] that uses `icon` only if the file exists.
    pub fn custom_if_present(icon: impl AsRef<Path>) -> Self {
        let icon = icon.as_ref();
        Self::Custom {
            icon: icon.exists().then(|| icon.to_path_buf()),
        }
    }

    /// Returns the DOT shape used to draw this kind.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Actor => "circle",
            Self::ActorGroup => "doublecircle",
            Self::Server => "box",
            Self::Storage => "folder",
            Self::Database => "cylinder",
            Self::UseCase => "ellipse",
            Self::Custom { icon: Some(_) } => "none",
            Self::Custom { icon: None } => "box",
        }
    }

    /// Returns the icon path for custom nodes that have one.
    pub fn icon(&self) -> Option<&Path> {
        match self {
            Self::Custom { icon } => icon.as_deref(),
            _ => None,
        }
    }
}

/// A declared node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
    cluster: Option<ClusterIndex>,
}

impl Node {
    pub fn id(&self) -> Id {
        self.id
    }

    /// Display label; may contain line breaks.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The innermost cluster containing this node, if any.
    pub fn cluster(&self) -> Option<ClusterIndex> {
        self.cluster
    }
}

/// Presentation attributes of an edge, built by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeAttributes {
    label: Option<String>,
    color: Option<Color>,
    style: LineStyle,
    direction: EdgeDirection,
}

impl EdgeAttributes {
    /// Unlabeled, solid, forward edge in the renderer's default color.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color_value(&self) -> Option<Color> {
        self.color
    }

    pub fn line_style(&self) -> LineStyle {
        self.style
    }

    pub fn arrow_direction(&self) -> EdgeDirection {
        self.direction
    }
}

/// A directed edge between two declared nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
    attributes: EdgeAttributes,
}

impl Edge {
    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn attributes(&self) -> &EdgeAttributes {
        &self.attributes
    }
}

/// A complete diagram declaration.
///
/// Nodes keep declaration order and edges may repeat: two actors associated
/// with the same use case yield two edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    title: String,
    direction: Direction,
    clusters: Vec<Cluster>,
    nodes: IndexMap<Id, Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new(title: impl Into<String>, direction: Direction) -> Self {
        Self {
            title: title.into(),
            direction,
            clusters: Vec::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Base name of rendered files: whitespace runs become `_`, lowercased.
    ///
    /// ```
    /// use blueprint_core::{diagram::Diagram, stroke::Direction};
    ///
    /// let diagram = Diagram::new("Fix Citizen - Use Case", Direction::LeftToRight);
    /// assert_eq!(diagram.file_stem(), "fix_citizen_-_use_case");
    /// ```
    pub fn file_stem(&self) -> String {
        self.title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }

    /// Declares a node outside of any cluster.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] if `key` is already declared.
    pub fn node(
        &mut self,
        key: &str,
        label: impl Into<String>,
        kind: NodeKind,
    ) -> Result<Id, DiagramError> {
        self.declare_node(key, label.into(), kind, None)
    }

    /// Declares a top-level cluster and fills it through `build`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `build`.
    pub fn cluster<F>(&mut self, label: impl Into<String>, build: F) -> Result<(), DiagramError>
    where
        F: FnOnce(&mut ClusterScope<'_>) -> Result<(), DiagramError>,
    {
        let cluster = self.open_cluster(label.into(), None);
        build(&mut ClusterScope {
            diagram: self,
            cluster,
        })
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownNode`] if either endpoint has not been
    /// declared yet.
    pub fn connect(
        &mut self,
        source: impl Into<Id>,
        target: impl Into<Id>,
        attributes: EdgeAttributes,
    ) -> Result<(), DiagramError> {
        let source = source.into();
        let target = target.into();

        for endpoint in [source, target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(DiagramError::UnknownNode(endpoint.name()));
            }
        }

        trace!(source:% = source, target:% = target; "Declared edge");
        self.edges.push(Edge {
            source,
            target,
            attributes,
        });
        Ok(())
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn cluster_at(&self, index: ClusterIndex) -> &Cluster {
        &self.clusters[index.0]
    }

    /// Iterates clusters whose parent is `parent` (top-level for `None`).
    pub fn child_clusters(
        &self,
        parent: Option<ClusterIndex>,
    ) -> impl Iterator<Item = ClusterIndex> + '_ {
        self.clusters
            .iter()
            .enumerate()
            .filter(move |(_, cluster)| cluster.parent == parent)
            .map(|(idx, _)| ClusterIndex(idx))
    }

    /// Iterates nodes declared directly in `cluster` (outside clusters for `None`).
    pub fn nodes_in(&self, cluster: Option<ClusterIndex>) -> impl Iterator<Item = &Node> {
        self.nodes
            .values()
            .filter(move |node| node.cluster == cluster)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_by_id(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn open_cluster(&mut self, label: String, parent: Option<ClusterIndex>) -> ClusterIndex {
        let depth = parent.map_or(0, |p| self.clusters[p.0].depth + 1);
        self.clusters.push(Cluster {
            label,
            parent,
            depth,
        });
        ClusterIndex(self.clusters.len() - 1)
    }

    fn declare_node(
        &mut self,
        key: &str,
        label: String,
        kind: NodeKind,
        cluster: Option<ClusterIndex>,
    ) -> Result<Id, DiagramError> {
        let id = Id::new(key);
        if self.nodes.contains_key(&id) {
            return Err(DiagramError::DuplicateNode(key.to_string()));
        }

        trace!(node_key = key, cluster:? = cluster.map(ClusterIndex::get); "Declared node");
        self.nodes.insert(
            id,
            Node {
                id,
                label,
                kind,
                cluster,
            },
        );
        Ok(id)
    }
}

/// Declaration scope for the inside of one cluster.
pub struct ClusterScope<'d> {
    diagram: &'d mut Diagram,
    cluster: ClusterIndex,
}

impl ClusterScope<'_> {
    /// Declares a node inside this cluster.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] if `key` is already declared
    /// anywhere in the diagram.
    pub fn node(
        &mut self,
        key: &str,
        label: impl Into<String>,
        kind: NodeKind,
    ) -> Result<Id, DiagramError> {
        self.diagram
            .declare_node(key, label.into(), kind, Some(self.cluster))
    }

    /// Declares a sub-cluster and fills it through `build`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `build`.
    pub fn cluster<F>(&mut self, label: impl Into<String>, build: F) -> Result<(), DiagramError>
    where
        F: FnOnce(&mut ClusterScope<'_>) -> Result<(), DiagramError>,
    {
        let cluster = self.diagram.open_cluster(label.into(), Some(self.cluster));
        build(&mut ClusterScope {
            diagram: &mut *self.diagram,
            cluster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_diagram() -> Diagram {
        let mut diagram = Diagram::new("Two Nodes", Direction::LeftToRight);
        diagram.node("a", "A", NodeKind::Server).unwrap();
        diagram.node("b", "B", NodeKind::Storage).unwrap();
        diagram
    }

    #[test]
    fn test_connect_declared_nodes() {
        let mut diagram = two_node_diagram();
        diagram
            .connect("a", "b", EdgeAttributes::new().label("flow"))
            .unwrap();

        let edge = &diagram.edges()[0];
        assert_eq!(edge.source(), "a");
        assert_eq!(edge.target(), "b");
        assert_eq!(edge.attributes().label_text(), Some("flow"));
    }

    #[test]
    fn test_connect_unknown_node_is_rejected() {
        let mut diagram = two_node_diagram();

        let err = diagram
            .connect("a", "ghost", EdgeAttributes::new())
            .unwrap_err();
        assert_eq!(err, DiagramError::UnknownNode("ghost".to_string()));

        let err = diagram
            .connect("phantom", "b", EdgeAttributes::new())
            .unwrap_err();
        assert_eq!(err, DiagramError::UnknownNode("phantom".to_string()));
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut diagram = two_node_diagram();
        let err = diagram.node("a", "Another A", NodeKind::Server).unwrap_err();
        assert_eq!(err, DiagramError::DuplicateNode("a".to_string()));
    }

    #[test]
    fn test_duplicate_labels_are_allowed() {
        let mut diagram = Diagram::new("Labels", Direction::TopToBottom);
        diagram.node("first", "Update Status", NodeKind::UseCase).unwrap();
        diagram.node("second", "Update Status", NodeKind::UseCase).unwrap();
        assert_eq!(diagram.nodes().count(), 2);
    }

    #[test]
    fn test_repeated_edges_are_kept() {
        let mut diagram = two_node_diagram();
        diagram.connect("a", "b", EdgeAttributes::new()).unwrap();
        diagram.connect("a", "b", EdgeAttributes::new()).unwrap();
        assert_eq!(diagram.edges().len(), 2);
    }

    #[test]
    fn test_nested_clusters() {
        let mut diagram = Diagram::new("Nested", Direction::TopToBottom);
        diagram
            .cluster("Backend", |backend| {
                backend.cluster("Database", |db| {
                    db.node("postgres", "PostgreSQL", NodeKind::Database)?;
                    Ok(())
                })?;
                backend.node("api", "API", NodeKind::Server)?;
                Ok(())
            })
            .unwrap();
        diagram.node("user", "User", NodeKind::Actor).unwrap();

        assert_eq!(diagram.clusters().len(), 2);
        let roots: Vec<_> = diagram.child_clusters(None).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(diagram.cluster_at(roots[0]).label(), "Backend");
        assert_eq!(diagram.cluster_at(roots[0]).depth(), 0);

        let children: Vec<_> = diagram.child_clusters(Some(roots[0])).collect();
        assert_eq!(children.len(), 1);
        let database = diagram.cluster_at(children[0]);
        assert_eq!(database.label(), "Database");
        assert_eq!(database.depth(), 1);
        assert_eq!(database.parent(), Some(roots[0]));

        let in_db: Vec<_> = diagram.nodes_in(Some(children[0])).map(Node::id).collect();
        assert_eq!(in_db, vec![Id::new("postgres")]);
        let in_backend: Vec<_> = diagram.nodes_in(Some(roots[0])).map(Node::id).collect();
        assert_eq!(in_backend, vec![Id::new("api")]);
        let loose: Vec<_> = diagram.nodes_in(None).map(Node::id).collect();
        assert_eq!(loose, vec![Id::new("user")]);
    }

    #[test]
    fn test_error_in_cluster_propagates() {
        let mut diagram = Diagram::new("Broken", Direction::TopToBottom);
        let result = diagram.cluster("Group", |group| {
            group.node("x", "X", NodeKind::Server)?;
            group.node("x", "X again", NodeKind::Server)?;
            Ok(())
        });
        assert_eq!(result, Err(DiagramError::DuplicateNode("x".to_string())));
    }

    #[test]
    fn test_node_kind_shapes() {
        assert_eq!(NodeKind::UseCase.shape(), "ellipse");
        assert_eq!(NodeKind::Database.shape(), "cylinder");
        assert_eq!(NodeKind::Custom { icon: None }.shape(), "box");

        let with_icon = NodeKind::Custom {
            icon: Some(PathBuf::from("leaflet.png")),
        };
        assert_eq!(with_icon.shape(), "none");
        assert_eq!(with_icon.icon(), Some(Path::new("leaflet.png")));
        assert_eq!(NodeKind::Server.icon(), None);
    }

    #[test]
    fn test_custom_if_present_falls_back() {
        let kind = NodeKind::custom_if_present("definitely/not/here.png");
        assert_eq!(kind, NodeKind::Custom { icon: None });
    }

    #[test]
    fn test_file_stem() {
        let diagram = Diagram::new(
            "Infrastructure Fix Citizen - System Architecture",
            Direction::TopToBottom,
        );
        assert_eq!(
            diagram.file_stem(),
            "infrastructure_fix_citizen_-_system_architecture"
        );
    }
}
