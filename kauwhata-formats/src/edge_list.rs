//! Line-oriented edge list formats.

use std::io::{self, Write};

use kauwhata_core::{Edge, GeneratedGraph};

use crate::{errors::FormatError, header::GraphHeader};

/// Writes one `source,target[,weight]` record per edge, split by `delimiter`.
pub(crate) fn write_delimited<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    delimiter: u8,
    out: &mut W,
) -> Result<(), FormatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    for edge in graph.edges() {
        let endpoints = [edge.source.to_string(), edge.target.to_string()];
        if header.is_weighted() {
            let [source, target] = endpoints;
            writer.write_record([source, target, edge.weight.to_string()])?;
        } else {
            writer.write_record(endpoints)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// DIMACS shortest-path format with a commented summary header.
///
/// Arcs always carry a length, so unweighted graphs keep their unit weights.
pub(crate) fn write_dimacs<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    let (vertices, edges) = (header.vertices(), header.edge_count());
    writeln!(out, "c FILE                  :{}.gr", header.name())?;
    writeln!(out, "c No. of vertices       :{vertices}")?;
    writeln!(out, "c No. of edges          :{edges}")?;
    writeln!(out, "c Max. weight           :{}", header.max_weight())?;
    writeln!(out, "c Min. weight           :{}", header.min_weight())?;
    writeln!(out, "c Min. edge             :{}", header.min_edge())?;
    writeln!(out, "c Max. edge             :{}", header.max_edge())?;
    writeln!(out, "p sp {vertices} {edges}")?;
    for Edge {
        source,
        target,
        weight,
    } in graph.edges()
    {
        writeln!(out, "a {source} {target} {weight}")?;
    }
    Ok(())
}

/// Answer set programming facts: `node(i).` then `edge(u,v,w).`.
pub(crate) fn write_asp<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    for vertex in 1..=header.vertices() {
        writeln!(out, "node({vertex}).")?;
    }
    for edge in graph.edges() {
        if header.is_weighted() {
            writeln!(out, "edge({},{},{}).", edge.source, edge.target, edge.weight)?;
        } else {
            writeln!(out, "edge({},{}).", edge.source, edge.target)?;
        }
    }
    Ok(())
}

/// Trivial graph format: vertex lines, a `#` separator, then edges.
pub(crate) fn write_tgf<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> Result<(), FormatError> {
    for vertex in 1..=header.vertices() {
        writeln!(out, "{vertex}")?;
    }
    writeln!(out, "#")?;
    write_delimited(header, graph, b' ', out)
}

/// UCINET DL in `edgelist1` layout.
pub(crate) fn write_ucinet_dl<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> Result<(), FormatError> {
    writeln!(out, "dl")?;
    writeln!(out, "format=edgelist1")?;
    writeln!(out, "n={}", header.vertices())?;
    writeln!(out, "data:")?;
    write_delimited(header, graph, b' ', out)
}

/// Matrix Market coordinate format.
///
/// Entries are always listed as a general matrix; undirected edges appear
/// once, in the orientation they were generated. Unweighted graphs use the
/// `pattern` field and carry no value column.
pub(crate) fn write_matrix_market<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    let field = if !header.is_weighted() {
        "pattern"
    } else if graph.edges().all(|edge| edge.weight.is_integer()) {
        "integer"
    } else {
        "real"
    };
    let vertices = header.vertices();
    writeln!(out, "%%MatrixMarket matrix coordinate {field} general")?;
    writeln!(out, "{vertices} {vertices} {}", header.edge_count())?;
    for edge in graph.edges() {
        if header.is_weighted() {
            writeln!(out, "{} {} {}", edge.source, edge.target, edge.weight)?;
        } else {
            writeln!(out, "{} {}", edge.source, edge.target)?;
        }
    }
    Ok(())
}

/// Graph line format: one line per origin with `target:weight` entries.
pub(crate) fn write_graph_line<W: Write>(
    header: &GraphHeader,
    graph: &GeneratedGraph,
    out: &mut W,
) -> io::Result<()> {
    for (vertex, branch) in graph.branches().filter(|(_, branch)| !branch.is_empty()) {
        write!(out, "{vertex}")?;
        for (target, weight) in branch.edges() {
            if header.is_weighted() {
                write!(out, " {target}:{weight}")?;
            } else {
                write!(out, " {target}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
