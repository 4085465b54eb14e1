//! Structured text formats: GDF, GML and GEXF.

use std::io::{self, Write};

use kauwhata_core::GeneratedGraph;

use crate::header::GraphHeader;

/// GUESS GDF with a node table and an edge table.
///
/// The edge table has a `weight` column only for weighted graphs.
pub(crate) fn write_gdf<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "nodedef>name VARCHAR,label VARCHAR")?;
    for vertex in 1..=header.vertices() {
        writeln!(out, "{vertex},Node{vertex}")?;
    }
    let weighted = header.is_weighted();
    write!(out, "edgedef>node1 VARCHAR,node2 VARCHAR,directed BOOLEAN")?;
    if weighted {
        write!(out, ",weight DOUBLE")?;
    }
    writeln!(out)?;
    for edge in graph.edges() {
        write!(
            out,
            "{},{},{}",
            edge.source,
            edge.target,
            header.is_directed()
        )?;
        if weighted {
            write!(out, ",{}", edge.weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Graph modelling language.
pub(crate) fn write_gml<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "graph")?;
    writeln!(out, "[")?;
    writeln!(out, "  label \"{}\"", escape_quoted(header.name()))?;
    writeln!(out, "  directed {}", u8::from(header.is_directed()))?;
    writeln!(out, "  multigraph {}", u8::from(header.is_multigraph()))?;
    for vertex in 1..=header.vertices() {
        writeln!(out, "  node")?;
        writeln!(out, "  [")?;
        writeln!(out, "    id {vertex}")?;
        writeln!(out, "    label \"Node {vertex}\"")?;
        writeln!(out, "  ]")?;
    }
    for edge in graph.edges() {
        writeln!(out, "  edge")?;
        writeln!(out, "  [")?;
        writeln!(out, "    source {}", edge.source)?;
        writeln!(out, "    target {}", edge.target)?;
        if header.is_weighted() {
            writeln!(out, "    value {}", edge.weight)?;
        }
        writeln!(out, "  ]")?;
    }
    writeln!(out, "]")
}

/// Graph exchange XML format, version 1.2.
pub(crate) fn write_gexf<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    let edge_type = if header.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">"#
    )?;
    writeln!(out, "    <meta>")?;
    writeln!(out, "        <creator>kauwhata</creator>")?;
    writeln!(
        out,
        "        <description>{}</description>",
        escape_xml(header.name())
    )?;
    writeln!(out, "    </meta>")?;
    writeln!(out, r#"    <graph defaultedgetype="{edge_type}">"#)?;
    writeln!(out, "        <nodes>")?;
    for vertex in 1..=header.vertices() {
        writeln!(
            out,
            r#"            <node id="{vertex}" label="Node {vertex}" />"#
        )?;
    }
    writeln!(out, "        </nodes>")?;
    writeln!(out, "        <edges>")?;
    for (index, edge) in graph.edges().enumerate() {
        write!(
            out,
            r#"            <edge id="{}" source="{}" target="{}""#,
            index + 1,
            edge.source,
            edge.target
        )?;
        if header.is_weighted() {
            write!(out, r#" weight="{}""#, edge.weight)?;
        }
        writeln!(out, " />")?;
    }
    writeln!(out, "        </edges>")?;
    writeln!(out, "    </graph>")?;
    writeln!(out, "</gexf>")
}

fn escape_quoted(value: &str) -> String {
    value.replace('"', "'")
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
