//! Generator configuration and the normalizer that repairs raw input.
//!
//! [`RawConfig`] mirrors what a user or configuration file supplies: signed
//! counts, arbitrary weight bounds and integer flag codes. [`normalize`]
//! turns it into a [`GeneratorConfig`] that the generator can trust without
//! further checks.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::weight::WeightRange;

/// Weight bound substituted for non-finite input.
const DEFAULT_WEIGHT: f64 = 1.0;

macro_rules! define_flag {
    (
        $(#[$meta:meta])*
        enum $Ty:ident { off: $Off:ident, on: $On:ident }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub enum $Ty {
            /// Flag code `0`, also used for unknown codes.
            #[default]
            $Off,
            /// Flag code `1`.
            $On,
        }

        impl $Ty {
            /// Decodes a raw flag, falling back to the neutral value.
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    1 => Self::$On,
                    _ => Self::$Off,
                }
            }

            /// Returns the raw flag code.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    Self::$Off => 0,
                    Self::$On => 1,
                }
            }
        }
    };
}

define_flag! {
    /// Whether synthesised weights may be negated.
    enum WeightSign { off: Unsigned, on: Signed }
}

define_flag! {
    /// Edge orientation of the generated graph.
    enum Direction { off: Undirected, on: Directed }
}

define_flag! {
    /// Whether an edge may start and end at the same vertex.
    enum SelfLoops { off: Forbidden, on: Allowed }
}

define_flag! {
    /// Whether an origin may pick the same target more than once.
    enum Multiplicity { off: Simple, on: Multigraph }
}

/// Error returned when an output format name is not recognised.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown output format `{name}`")]
pub struct ParseFormatError {
    name: String,
}

macro_rules! define_formats {
    ($( $(#[$meta:meta])* $Variant:ident = $code:literal, $name:literal $(| $alias:literal)* ;)+) => {
        /// File format the generated graph is serialised to.
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub enum OutputFormat {
            $(
                $(#[$meta])*
                $Variant,
            )+
        }

        impl OutputFormat {
            /// Every format in raw code order.
            pub const ALL: &'static [Self] = &[$(Self::$Variant),+];

            /// Decodes a raw format code, falling back to DIMACS.
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    $($code => Self::$Variant,)+
                    _ => Self::Dimacs,
                }
            }

            /// Returns the raw format code (`1..=15`).
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$Variant => $code,)+
                }
            }

            /// Returns the canonical lowercase name used on the command line.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$Variant => $name,)+
                }
            }
        }

        impl FromStr for OutputFormat {
            type Err = ParseFormatError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Ok(Self::$Variant),)+
                    _ => Err(ParseFormatError { name: value.to_owned() }),
                }
            }
        }
    };
}

define_formats! {
    /// DIMACS shortest-path format.
    #[default]
    Dimacs = 1, "dimacs" | "gr";
    /// JSON document with properties, nodes and edges.
    Json = 2, "json";
    /// Comma-separated `source,target,weight` lines.
    Csv = 3, "csv";
    /// YAML rendition of the JSON document.
    Yaml = 4, "yaml" | "yml";
    /// Weighted edge list.
    Wel = 5, "wel";
    /// Answer set programming facts.
    Asp = 6, "asp" | "lp";
    /// Python pickle.
    Pickle = 7, "pickle" | "p";
    /// UCINET DL edge list.
    UcinetDl = 8, "dl" | "ucinet";
    /// Trivial graph format.
    Tgf = 9, "tgf";
    /// Tab-separated `source target weight` lines.
    Tsv = 10, "tsv";
    /// Matrix Market coordinate format.
    MatrixMarket = 11, "mtx" | "matrix-market";
    /// Graph line format (`source target:weight ...`).
    GraphLine = 12, "gl" | "graph-line";
    /// GUESS GDF.
    Gdf = 13, "gdf";
    /// Graph modelling language.
    Gml = 14, "gml";
    /// Graph exchange XML format.
    Gexf = 15, "gexf";
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unvalidated generator settings as supplied by a user.
///
/// Flags use integer codes (`0` off, `1` on) so that configuration files and
/// menus can pass through whatever they received. Missing fields take the
/// [`Default`] values when deserialised.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RawConfig {
    /// Number of vertices; negated when negative.
    pub vertices: i64,
    /// Lower bound on edges per vertex.
    pub min_edge: i64,
    /// Upper bound on edges per vertex.
    pub max_edge: i64,
    /// Lower weight bound.
    pub min_weight: f64,
    /// Upper weight bound.
    pub max_weight: f64,
    /// Signed weights flag code.
    #[cfg_attr(feature = "serde", serde(alias = "sign", deserialize_with = "flag_code"))]
    pub signed: i64,
    /// Directed graph flag code.
    #[cfg_attr(feature = "serde", serde(alias = "direct", deserialize_with = "flag_code"))]
    pub directed: i64,
    /// Self-loop flag code.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "flag_code"))]
    pub self_loop: i64,
    /// Multigraph flag code.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "flag_code"))]
    pub multigraph: i64,
    /// Output format code (`1..=15`).
    pub output_format: i64,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            vertices: 0,
            min_edge: 0,
            max_edge: 0,
            min_weight: DEFAULT_WEIGHT,
            max_weight: DEFAULT_WEIGHT,
            signed: 0,
            directed: 0,
            self_loop: 0,
            multigraph: 0,
            output_format: OutputFormat::Dimacs.code(),
        }
    }
}

/// Accepts a flag written either as an integer code or as a boolean.
#[cfg(feature = "serde")]
fn flag_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Code {
        Int(i64),
        Bool(bool),
    }

    Ok(match <Code as serde::Deserialize>::deserialize(deserializer)? {
        Code::Int(code) => code,
        Code::Bool(flag) => i64::from(flag),
    })
}

/// Validated generator settings.
///
/// Always satisfies `min_edge <= max_edge` and `min_weight <= max_weight`;
/// simple graphs additionally keep `max_edge` within the neighbour cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    vertices: usize,
    min_edge: usize,
    max_edge: usize,
    weights: WeightRange,
    sign: WeightSign,
    direction: Direction,
    self_loops: SelfLoops,
    multiplicity: Multiplicity,
    output_format: OutputFormat,
}

impl GeneratorConfig {
    /// Number of vertices.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
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

    /// Inclusive weight bounds.
    #[must_use]
    pub const fn weight_range(&self) -> WeightRange {
        self.weights
    }

    /// Weight sign policy.
    #[must_use]
    pub const fn sign(&self) -> WeightSign {
        self.sign
    }

    /// Edge orientation.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Self-loop policy.
    #[must_use]
    pub const fn self_loops(&self) -> SelfLoops {
        self.self_loops
    }

    /// Multigraph policy.
    #[must_use]
    pub const fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    /// Requested output format.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        matches!(self.direction, Direction::Directed)
    }

    /// Returns `true` when self-loops are allowed.
    #[must_use]
    pub const fn allows_self_loops(&self) -> bool {
        matches!(self.self_loops, SelfLoops::Allowed)
    }

    /// Returns `true` when repeated targets are allowed.
    #[must_use]
    pub const fn is_multigraph(&self) -> bool {
        matches!(self.multiplicity, Multiplicity::Multigraph)
    }

    /// Largest number of distinct neighbours a vertex can have.
    #[must_use]
    pub const fn neighbour_cap(&self) -> usize {
        neighbour_cap(self.vertices, self.self_loops)
    }
}

impl From<&GeneratorConfig> for RawConfig {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            vertices: count_to_raw(config.vertices),
            min_edge: count_to_raw(config.min_edge),
            max_edge: count_to_raw(config.max_edge),
            min_weight: config.weights.min(),
            max_weight: config.weights.max(),
            signed: config.sign.code(),
            directed: config.direction.code(),
            self_loop: config.self_loops.code(),
            multigraph: config.multiplicity.code(),
            output_format: config.output_format.code(),
        }
    }
}

/// Repairs a raw configuration into a valid [`GeneratorConfig`].
///
/// Negative counts are negated, inverted bounds swapped, unknown flag codes
/// replaced by their neutral value and, for simple graphs, the edge bounds
/// clamped to the number of available neighbours. Never fails.
///
/// # Examples
/// ```
/// use kauwhata_core::{RawConfig, normalize};
///
/// let raw = RawConfig {
///     vertices: -5,
///     min_edge: 9,
///     max_edge: 2,
///     ..RawConfig::default()
/// };
/// let config = normalize(&raw);
/// assert_eq!(config.vertices(), 5);
/// assert_eq!((config.min_edge(), config.max_edge()), (2, 4));
/// ```
#[must_use]
pub fn normalize(raw: &RawConfig) -> GeneratorConfig {
    let vertices = raw_to_count(raw.vertices);
    let mut min_edge = raw_to_count(raw.min_edge);
    let mut max_edge = raw_to_count(raw.max_edge);
    let weights = WeightRange::new(repair_weight(raw.min_weight), repair_weight(raw.max_weight));
    if min_edge > max_edge {
        std::mem::swap(&mut min_edge, &mut max_edge);
    }

    let sign = WeightSign::from_code(raw.signed);
    let direction = Direction::from_code(raw.directed);
    let self_loops = SelfLoops::from_code(raw.self_loop);
    let multiplicity = Multiplicity::from_code(raw.multigraph);
    let output_format = OutputFormat::from_code(raw.output_format);

    if multiplicity == Multiplicity::Simple {
        let cap = neighbour_cap(vertices, self_loops);
        min_edge = min_edge.min(cap);
        max_edge = max_edge.min(cap);
    }

    GeneratorConfig {
        vertices,
        min_edge,
        max_edge,
        weights,
        sign,
        direction,
        self_loops,
        multiplicity,
        output_format,
    }
}

const fn neighbour_cap(vertices: usize, self_loops: SelfLoops) -> usize {
    match self_loops {
        SelfLoops::Allowed => vertices,
        SelfLoops::Forbidden => vertices.saturating_sub(1),
    }
}

fn raw_to_count(value: i64) -> usize {
    let magnitude = value.checked_abs().unwrap_or(i64::MAX);
    usize::try_from(magnitude).unwrap_or(usize::MAX)
}

fn count_to_raw(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn repair_weight(value: f64) -> f64 {
    if value.is_finite() { value } else { DEFAULT_WEIGHT }
}
