//! Command implementations and argument parsing for the kauwhata CLI.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kauwhata_core::{
    GeneratedGraph, GenerationError, OutputFormat, RawConfig, generate, normalize,
};
use kauwhata_formats::{
    FormatError, GraphHeader, extension, json_to_pickle, json_to_yaml, write_graph,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use crate::report::{convert_bytes, time_convert};
use crate::run_log::{RunLogEntry, append_run_log};

const DEFAULT_GRAPH_NAME: &str = "graph";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kauwhata",
    version,
    about = "Generate random graphs with bounded vertex degrees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random graph and write it to a file.
    Generate(GenerateCommand),
    /// Convert a JSON graph document to YAML or Pickle.
    Convert(ConvertCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Output path without extension; the format's suffix is appended.
    #[arg(long, short)]
    pub output: PathBuf,

    /// JSON file with graph settings; replaces the graph flags.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible graphs; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append a record of the run to this file.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Graph shape settings.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Graph shape flags. Counts may be negative; their magnitude is used.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub vertices: i64,

    /// Lower bound on edges drawn per vertex.
    #[arg(long = "min-edge", default_value_t = 0, allow_negative_numbers = true)]
    pub min_edge: i64,

    /// Upper bound on edges drawn per vertex and on vertex degree.
    #[arg(long = "max-edge", default_value_t = 0, allow_negative_numbers = true)]
    pub max_edge: i64,

    /// Lower weight bound.
    #[arg(long = "min-weight", default_value_t = 1.0, allow_negative_numbers = true)]
    pub min_weight: f64,

    /// Upper weight bound.
    #[arg(long = "max-weight", default_value_t = 1.0, allow_negative_numbers = true)]
    pub max_weight: f64,

    /// Omit weights from the output and draw every weight as 1.
    #[arg(long)]
    pub unweighted: bool,

    /// Negate each weight with probability one half.
    #[arg(long)]
    pub signed: bool,

    /// Produce a directed graph.
    #[arg(long)]
    pub directed: bool,

    /// Allow edges from a vertex to itself.
    #[arg(long = "self-loops")]
    pub self_loops: bool,

    /// Allow repeated edges between the same endpoints.
    #[arg(long)]
    pub multigraph: bool,

    /// Output format name or alias, such as `dimacs`, `csv` or `gexf`.
    #[arg(long, default_value_t = OutputFormat::Dimacs)]
    pub format: OutputFormat,
}

impl GraphArgs {
    /// Raw settings equivalent to these flags.
    #[must_use]
    pub fn to_raw(&self) -> RawConfig {
        RawConfig {
            vertices: self.vertices,
            min_edge: self.min_edge,
            max_edge: self.max_edge,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            signed: i64::from(self.signed),
            directed: i64::from(self.directed),
            self_loop: i64::from(self.self_loops),
            multigraph: i64::from(self.multigraph),
            output_format: self.format.code(),
        }
    }
}

/// Options accepted by the `convert` command.
#[derive(Debug, Args, Clone)]
pub struct ConvertCommand {
    /// JSON document to convert.
    pub input: PathBuf,

    /// Destination path; defaults to the input with the target's extension.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Encoding to convert into.
    #[arg(long = "to", value_enum, default_value_t = ConvertTarget::Yaml)]
    pub target: ConvertTarget,
}

/// Encodings a JSON document can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertTarget {
    /// YAML text.
    Yaml,
    /// Python pickle, protocol 3.
    Pickle,
}

impl ConvertTarget {
    const fn format(self) -> OutputFormat {
        match self {
            Self::Yaml => OutputFormat::Yaml,
            Self::Pickle => OutputFormat::Pickle,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading input or writing output.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The settings file is not a valid JSON settings object.
    #[error("invalid settings file `{path}`: {source}")]
    Config {
        /// Settings file path.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Graph synthesis failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Serialization failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Outcome of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Written graph file.
    pub path: PathBuf,
    /// Vertex count.
    pub vertices: usize,
    /// Edge count.
    pub edges: usize,
    /// Size of the written file in bytes.
    pub file_size: u64,
    /// Generation and serialization time.
    pub elapsed: Duration,
}

/// Outcome of a `convert` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// JSON input.
    pub source: PathBuf,
    /// YAML output.
    pub destination: PathBuf,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A graph file was generated.
    Generated(GenerationSummary),
    /// A document was converted.
    Converted(ConversionSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading settings, generating or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use kauwhata_cli::cli::{Cli, ExecutionSummary, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = format!("--output={}", dir.path().join("triangle").display());
/// let cli = Cli::try_parse_from([
///     "kauwhata",
///     "generate",
///     output.as_str(),
///     "--vertices=3",
///     "--min-edge=2",
///     "--max-edge=2",
///     "--format=csv",
/// ])?;
/// let ExecutionSummary::Generated(summary) = run_cli(cli)? else {
///     unreachable!("generate yields a generation summary");
/// };
/// assert_eq!(summary.edges, 3);
/// assert!(summary.path.ends_with("triangle.csv"));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Convert(command) => {
            Span::current().record("command", field::display("convert"));
            run_convert(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        output = %command.output.display(),
        seed = ?command.seed,
        format = field::Empty,
        edges = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        output,
        config: settings_path,
        seed,
        log_file,
        graph: args,
    } = command;

    let mut raw = match &settings_path {
        Some(path) => load_raw_config(path)?,
        None => args.to_raw(),
    };
    if args.unweighted {
        raw.min_weight = 1.0;
        raw.max_weight = 1.0;
    }
    let config = normalize(&raw);
    let format = config.output_format();

    let span = Span::current();
    span.record("format", field::display(format));

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let started = Instant::now();
    let graph = generate(&config, &mut rng)?;

    let path = output_path(&output, format);
    let mut header = GraphHeader::new(graph_name(&output), &config, &graph);
    if args.unweighted {
        header = header.unweighted();
    }
    write_graph_file(&path, format, &header, &graph)?;
    let elapsed = started.elapsed();
    let file_size = fs::metadata(&path)
        .map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?
        .len();
    span.record("edges", graph.edge_count());

    if let Some(log_path) = &log_file {
        let entry = RunLogEntry::new(
            file_name(&path),
            config.vertices(),
            graph.edge_count(),
            elapsed,
        );
        if let Err(err) = append_run_log(log_path, &entry) {
            warn!(error = %err, "failed to append run log");
        }
    }

    info!(
        path = %path.display(),
        vertices = config.vertices(),
        edges = graph.edge_count(),
        file_size,
        "graph written"
    );
    Ok(ExecutionSummary::Generated(GenerationSummary {
        path,
        vertices: config.vertices(),
        edges: graph.edge_count(),
        file_size,
        elapsed,
    }))
}

#[instrument(
    name = "cli.convert",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        target = %command.target.format(),
        output = field::Empty,
    ),
)]
pub(super) fn run_convert(command: ConvertCommand) -> Result<ExecutionSummary, CliError> {
    let ConvertCommand {
        input,
        output,
        target,
    } = command;
    let destination =
        output.unwrap_or_else(|| input.with_extension(extension(target.format())));
    Span::current().record("output", field::display(destination.display()));

    let reader = BufReader::new(File::open(&input).map_err(|source| CliError::Io {
        path: input.clone(),
        source,
    })?);
    let mut writer = BufWriter::new(create_file(&destination)?);
    match target {
        ConvertTarget::Yaml => json_to_yaml(reader, &mut writer)?,
        ConvertTarget::Pickle => json_to_pickle(reader, &mut writer)?,
    }
    writer.flush().map_err(|source| CliError::Io {
        path: destination.clone(),
        source,
    })?;

    info!(destination = %destination.display(), "document converted");
    Ok(ExecutionSummary::Converted(ConversionSummary {
        source: input,
        destination,
    }))
}

#[instrument(name = "cli.load_config", err, fields(path = %path.display()))]
pub(super) fn load_raw_config(path: &Path) -> Result<RawConfig, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn write_graph_file(
    path: &Path,
    format: OutputFormat,
    header: &GraphHeader,
    graph: &GeneratedGraph,
) -> Result<(), CliError> {
    let writer = BufWriter::new(create_file(path)?);
    write_graph(format, header, graph, writer)?;
    Ok(())
}

fn create_file(path: &Path) -> Result<File, CliError> {
    File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends the format's suffix to `base` without replacing any existing one.
pub(super) fn output_path(base: &Path, format: OutputFormat) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    raw.push(".");
    raw.push(extension(format));
    PathBuf::from(raw)
}

pub(super) fn graph_name(base: &Path) -> String {
    base.file_name()
        .and_then(|value| value.to_str())
        .filter(|value| !value.is_empty())
        .map_or_else(|| DEFAULT_GRAPH_NAME.to_owned(), ToOwned::to_owned)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use std::time::Duration;
/// # use kauwhata_cli::cli::{ExecutionSummary, GenerationSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated(GenerationSummary {
///     path: PathBuf::from("graph.gr"),
///     vertices: 10,
///     edges: 14,
///     file_size: 2_048,
///     elapsed: Duration::from_secs(3),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("file size: 2.0 KB"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(writer, "graph file: {}", generated.path.display())?;
            writeln!(writer, "vertices: {}", generated.vertices)?;
            writeln!(writer, "edges: {}", generated.edges)?;
            writeln!(writer, "file size: {}", convert_bytes(generated.file_size))?;
            writeln!(writer, "elapsed time: {}", time_convert(generated.elapsed))?;
        }
        ExecutionSummary::Converted(converted) => {
            writeln!(
                writer,
                "converted: {} -> {}",
                converted.source.display(),
                converted.destination.display()
            )?;
        }
    }
    Ok(())
}
