//! Builder for [`GeneratorConfig`] values.
//!
//! Collects typed settings and routes them through [`normalize`] so that a
//! built configuration is always valid.

use crate::config::{
    Direction, GeneratorConfig, Multiplicity, OutputFormat, RawConfig, SelfLoops, WeightSign,
    normalize,
};

/// Configures and constructs [`GeneratorConfig`] instances.
///
/// # Examples
/// ```
/// use kauwhata_core::{ConfigBuilder, Direction, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .with_vertices(20)
///     .with_edge_bounds(2, 4)
///     .with_weight_bounds(0.5, 2.5)
///     .with_direction(Direction::Directed)
///     .with_output_format(OutputFormat::Json)
///     .build();
/// assert_eq!(config.vertices(), 20);
/// assert!(config.is_directed());
/// assert_eq!(config.weight_range().precision(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBuilder {
    raw: RawConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl ConfigBuilder {
    /// Creates a builder populated with neutral defaults: no vertices, no
    /// edges, unit weights, undirected simple graph without self-loops.
    ///
    /// # Examples
    /// ```
    /// use kauwhata_core::{ConfigBuilder, Direction};
    ///
    /// let config = ConfigBuilder::new().build();
    /// assert_eq!(config.vertices(), 0);
    /// assert_eq!(config.direction(), Direction::Undirected);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing raw configuration, such as one read from a
    /// configuration file.
    #[must_use]
    pub const fn from_raw(raw: RawConfig) -> Self {
        Self { raw }
    }

    /// Overrides the vertex count.
    #[must_use]
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.raw.vertices = i64::try_from(vertices).unwrap_or(i64::MAX);
        self
    }

    /// Overrides the per-vertex edge bounds. Inverted bounds are swapped.
    ///
    /// # Examples
    /// ```
    /// use kauwhata_core::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new()
    ///     .with_vertices(10)
    ///     .with_edge_bounds(5, 1)
    ///     .build();
    /// assert_eq!((config.min_edge(), config.max_edge()), (1, 5));
    /// ```
    #[must_use]
    pub fn with_edge_bounds(mut self, min_edge: usize, max_edge: usize) -> Self {
        self.raw.min_edge = i64::try_from(min_edge).unwrap_or(i64::MAX);
        self.raw.max_edge = i64::try_from(max_edge).unwrap_or(i64::MAX);
        self
    }

    /// Overrides the weight bounds. Inverted bounds are swapped.
    #[must_use]
    pub const fn with_weight_bounds(mut self, min_weight: f64, max_weight: f64) -> Self {
        self.raw.min_weight = min_weight;
        self.raw.max_weight = max_weight;
        self
    }

    /// Sets the weight sign policy.
    #[must_use]
    pub const fn with_sign(mut self, sign: WeightSign) -> Self {
        self.raw.signed = sign.code();
        self
    }

    /// Sets the edge orientation.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.raw.directed = direction.code();
        self
    }

    /// Sets the self-loop policy.
    #[must_use]
    pub const fn with_self_loops(mut self, self_loops: SelfLoops) -> Self {
        self.raw.self_loop = self_loops.code();
        self
    }

    /// Sets the multigraph policy.
    #[must_use]
    pub const fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.raw.multigraph = multiplicity.code();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.raw.output_format = format.code();
        self
    }

    /// Returns the raw configuration assembled so far.
    #[must_use]
    pub const fn raw(&self) -> &RawConfig {
        &self.raw
    }

    /// Normalises the collected settings into a [`GeneratorConfig`].
    #[must_use]
    pub fn build(&self) -> GeneratorConfig {
        normalize(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn builder_sets_every_flag() {
        let config = ConfigBuilder::new()
            .with_vertices(5)
            .with_edge_bounds(1, 8)
            .with_sign(WeightSign::Signed)
            .with_direction(Direction::Directed)
            .with_self_loops(SelfLoops::Allowed)
            .with_multiplicity(Multiplicity::Multigraph)
            .with_output_format(OutputFormat::Gexf)
            .build();
        assert_eq!(config.sign(), WeightSign::Signed);
        assert!(config.is_directed());
        assert!(config.allows_self_loops());
        assert!(config.is_multigraph());
        assert_eq!(config.output_format(), OutputFormat::Gexf);
        assert_eq!(config.max_edge(), 8, "multigraphs are not clamped");
    }

    #[rstest]
    fn from_raw_keeps_file_values() {
        let raw = RawConfig {
            vertices: 7,
            max_edge: 2,
            ..RawConfig::default()
        };
        let builder = ConfigBuilder::from_raw(raw.clone());
        assert_eq!(builder.raw(), &raw);
        assert_eq!(builder.build().vertices(), 7);
    }
}
