//! JSON, YAML and Pickle documents, plus conversion out of JSON.

use std::io::{Read, Write};

use kauwhata_core::{GeneratedGraph, VertexId, Weight};
use serde::Serialize;
use serde_pickle::SerOptions;

use crate::{errors::FormatError, header::GraphHeader};

#[derive(Debug, Serialize)]
struct GraphDocument {
    properties: Properties,
    graph: GraphBody,
}

#[derive(Debug, Serialize)]
struct Properties {
    directed: bool,
    signed: bool,
    multigraph: bool,
    weighted: bool,
    self_loop: bool,
    max_weight: f64,
    min_weight: f64,
}

#[derive(Debug, Serialize)]
struct GraphBody {
    nodes: Vec<Node>,
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Serialize)]
struct Node {
    id: VertexId,
}

#[derive(Debug, Serialize)]
struct EdgeEntry {
    source: VertexId,
    target: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<Weight>,
}

impl GraphDocument {
    fn new(header: &GraphHeader, graph: &GeneratedGraph) -> Self {
        Self {
            properties: Properties {
                directed: header.is_directed(),
                signed: header.is_signed(),
                multigraph: header.is_multigraph(),
                weighted: header.is_weighted(),
                self_loop: header.allows_self_loops(),
                max_weight: header.max_weight(),
                min_weight: header.min_weight(),
            },
            graph: GraphBody {
                nodes: (1..=header.vertices()).map(|id| Node { id }).collect(),
                edges: graph
                    .edges()
                    .map(|edge| EdgeEntry {
                        source: edge.source,
                        target: edge.target,
                        weight: header.is_weighted().then_some(edge.weight),
                    })
                    .collect(),
            },
        }
    }
}

pub(crate) fn write_json<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> Result<(), FormatError> {
    serde_json::to_writer_pretty(&mut *out, &GraphDocument::new(header, graph))?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_yaml<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> Result<(), FormatError> {
    let rendered = serde_yaml::to_string(&GraphDocument::new(header, graph))?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

pub(crate) fn write_pickle<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> Result<(), FormatError> {
    serde_pickle::to_writer(out, &GraphDocument::new(header, graph), SerOptions::new())?;
    Ok(())
}

/// Re-encodes a JSON document as YAML.
///
/// # Errors
/// Returns [`FormatError::Json`] when the input is not valid JSON,
/// [`FormatError::Yaml`] when encoding fails and [`FormatError::Io`] when the
/// output cannot be written.
///
/// # Examples
/// ```
/// use kauwhata_formats::json_to_yaml;
///
/// let mut yaml = Vec::new();
/// json_to_yaml(r#"{"graph": {"nodes": [{"id": 1}]}}"#.as_bytes(), &mut yaml)?;
/// let text = String::from_utf8(yaml).expect("yaml is utf-8");
/// assert!(text.contains("nodes:"));
/// # Ok::<(), kauwhata_formats::FormatError>(())
/// ```
pub fn json_to_yaml<R: Read, W: Write>(reader: R, mut writer: W) -> Result<(), FormatError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    let rendered = serde_yaml::to_string(&value)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Re-encodes a JSON document as a Python pickle.
///
/// # Errors
/// Returns [`FormatError::Json`] when the input is not valid JSON,
/// [`FormatError::Pickle`] when encoding fails and [`FormatError::Io`] when
/// the output cannot be written.
pub fn json_to_pickle<R: Read, W: Write>(reader: R, mut writer: W) -> Result<(), FormatError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    serde_pickle::to_writer(&mut writer, &value, SerOptions::new())?;
    Ok(())
}
