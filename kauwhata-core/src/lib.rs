//! Kauwhata core library.
//!
//! Synthesises random graphs whose per-vertex degree stays inside a
//! configured `[min_edge, max_edge]` window. The entry point is
//! [`generate`], which consumes a [`GeneratorConfig`] produced by
//! [`normalize`] and an injected random source.
//!
//! # Examples
//! ```
//! use kauwhata_core::{ConfigBuilder, generate};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let config = ConfigBuilder::new()
//!     .with_vertices(10)
//!     .with_edge_bounds(1, 3)
//!     .build();
//! let mut rng = SmallRng::seed_from_u64(7);
//! let graph = generate(&config, &mut rng)?;
//! assert_eq!(graph.vertex_count(), 10);
//! assert!(graph.degrees().iter().all(|&degree| degree <= 3));
//! # Ok::<(), kauwhata_core::GenerationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod config;
mod degree;
mod error;
mod generate;
mod ledger;
mod result;
mod selector;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::ConfigBuilder,
    config::{
        Direction, GeneratorConfig, Multiplicity, OutputFormat, ParseFormatError, RawConfig,
        SelfLoops, WeightSign, normalize,
    },
    degree::DegreeTracker,
    error::{GenerationError, GenerationErrorCode, Result},
    generate::generate,
    ledger::UsedPairs,
    result::{Branch, Edge, GeneratedGraph},
    weight::{Weight, WeightRange, decimal_places},
};

/// One-based vertex identifier.
pub type VertexId = usize;
