//! Serializers for generated graphs.
//!
//! [`write_graph`] renders a [`GeneratedGraph`] in any supported
//! [`OutputFormat`]. Serializers are pure functions of the header, the graph
//! and the writer; they never open files themselves.

mod document;
mod edge_list;
mod errors;
mod header;
mod markup;

use std::io::Write;

use kauwhata_core::{GeneratedGraph, OutputFormat};
use tracing::instrument;

pub use document::{json_to_pickle, json_to_yaml};
pub use errors::FormatError;
pub use header::GraphHeader;

/// File suffix, without the leading dot, conventionally used for `format`.
///
/// # Examples
/// ```
/// use kauwhata_core::OutputFormat;
/// use kauwhata_formats::extension;
///
/// assert_eq!(extension(OutputFormat::Dimacs), "gr");
/// assert_eq!(extension(OutputFormat::Asp), "lp");
/// ```
#[must_use]
pub const fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Dimacs => "gr",
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Wel => "wel",
        OutputFormat::Asp => "lp",
        OutputFormat::Pickle => "p",
        OutputFormat::UcinetDl => "dl",
        OutputFormat::Tgf => "tgf",
        OutputFormat::Tsv => "tsv",
        OutputFormat::MatrixMarket => "mtx",
        OutputFormat::GraphLine => "gl",
        OutputFormat::Gdf => "gdf",
        OutputFormat::Gml => "gml",
        OutputFormat::Gexf => "gexf",
    }
}

/// Writes `graph` to `writer` in `format`.
///
/// # Errors
/// Returns the I/O or encoding error raised while writing.
///
/// # Examples
/// ```
/// use kauwhata_core::{ConfigBuilder, OutputFormat, generate};
/// use kauwhata_formats::{GraphHeader, write_graph};
/// use rand::rngs::mock::StepRng;
///
/// let config = ConfigBuilder::new().with_vertices(3).with_edge_bounds(2, 2).build();
/// let graph = generate(&config, &mut StepRng::new(0, 0))?;
/// let header = GraphHeader::new("triangle", &config, &graph);
/// let mut out = Vec::new();
/// write_graph(OutputFormat::Csv, &header, &graph, &mut out)?;
/// assert_eq!(String::from_utf8(out)?, "1,2,1\n1,3,1\n2,3,1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "formats.write",
    err,
    skip(header, graph, writer),
    fields(format = %format, edges = graph.edge_count()),
)]
pub fn write_graph<W: Write>(
    format: OutputFormat,
    header: &GraphHeader,
    graph: &GeneratedGraph,
    mut writer: W,
) -> Result<(), FormatError> {
    let out = &mut writer;
    match format {
        OutputFormat::Dimacs => edge_list::write_dimacs(header, graph, out)?,
        OutputFormat::Json => document::write_json(header, graph, out)?,
        OutputFormat::Csv => edge_list::write_delimited(header, graph, b',', out)?,
        OutputFormat::Yaml => document::write_yaml(header, graph, out)?,
        OutputFormat::Wel => edge_list::write_delimited(header, graph, b' ', out)?,
        OutputFormat::Asp => edge_list::write_asp(header, graph, out)?,
        OutputFormat::Pickle => document::write_pickle(header, graph, out)?,
        OutputFormat::UcinetDl => edge_list::write_ucinet_dl(header, graph, out)?,
        OutputFormat::Tgf => edge_list::write_tgf(header, graph, out)?,
        OutputFormat::Tsv => edge_list::write_delimited(header, graph, b'\t', out)?,
        OutputFormat::MatrixMarket => edge_list::write_matrix_market(header, graph, out)?,
        OutputFormat::GraphLine => edge_list::write_graph_line(header, graph, out)?,
        OutputFormat::Gdf => markup::write_gdf(header, graph, out)?,
        OutputFormat::Gml => markup::write_gml(header, graph, out)?,
        OutputFormat::Gexf => markup::write_gexf(header, graph, out)?,
    }
    writer.flush()?;
    Ok(())
}
