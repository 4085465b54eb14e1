//! Header fields shared by every serializer.

use kauwhata_core::{GeneratedGraph, GeneratorConfig};

/// Graph metadata written alongside the edges.
///
/// # Examples
/// ```
/// use kauwhata_core::{ConfigBuilder, GeneratedGraph};
/// use kauwhata_formats::GraphHeader;
///
/// let config = ConfigBuilder::new().with_vertices(3).build();
/// let graph = GeneratedGraph::default();
/// let header = GraphHeader::new("demo", &config, &graph);
/// assert_eq!(header.name(), "demo");
/// assert_eq!(header.vertices(), 3);
/// assert!(header.is_weighted());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphHeader {
    name: String,
    vertices: usize,
    edge_count: usize,
    min_weight: f64,
    max_weight: f64,
    min_edge: usize,
    max_edge: usize,
    directed: bool,
    multigraph: bool,
    self_loops: bool,
    signed: bool,
    weighted: bool,
}

impl GraphHeader {
    /// Collects header fields from the configuration and generated graph.
    #[must_use]
    pub fn new(name: impl Into<String>, config: &GeneratorConfig, graph: &GeneratedGraph) -> Self {
        let weights = config.weight_range();
        Self {
            name: name.into(),
            vertices: config.vertices(),
            edge_count: graph.edge_count(),
            min_weight: weights.min(),
            max_weight: weights.max(),
            min_edge: config.min_edge(),
            max_edge: config.max_edge(),
            directed: config.is_directed(),
            multigraph: config.is_multigraph(),
            self_loops: config.allows_self_loops(),
            signed: matches!(config.sign(), kauwhata_core::WeightSign::Signed),
            weighted: true,
        }
    }

    /// Marks the graph as unweighted so edge lists omit the weight column.
    #[must_use]
    pub fn unweighted(mut self) -> Self {
        self.weighted = false;
        self
    }

    /// Graph name, normally the output file stem.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Lower weight bound.
    #[must_use]
    pub const fn min_weight(&self) -> f64 {
        self.min_weight
    }

    /// Upper weight bound.
    #[must_use]
    pub const fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Lower bound on edges per vertex.
    #[must_use]
    pub const fn min_edge(&self) -> usize {
        self.min_edge
    }

    /// Upper bound on edges per vertex.
    #[must_use]
    pub const fn max_edge(&self) -> usize {
        self.max_edge
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` for multigraphs.
    #[must_use]
    pub const fn is_multigraph(&self) -> bool {
        self.multigraph
    }

    /// Returns `true` when self-loops were allowed.
    #[must_use]
    pub const fn allows_self_loops(&self) -> bool {
        self.self_loops
    }

    /// Returns `true` when weights may be negative.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Returns `true` unless [`GraphHeader::unweighted`] was applied.
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.weighted
    }
}
