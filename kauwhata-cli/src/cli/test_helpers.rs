//! Shared fixtures for the CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kauwhata_core::OutputFormat;
use tempfile::TempDir;

use super::{CliError, GenerateCommand, GraphArgs, run_cli};
use super::{Cli, Command, ExecutionSummary, GenerationSummary};

pub(super) fn temp_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Ten vertices with one to three edges each, written as CSV.
pub(super) fn small_graph_args() -> GraphArgs {
    GraphArgs {
        vertices: 10,
        min_edge: 1,
        max_edge: 3,
        min_weight: 1.0,
        max_weight: 9.0,
        unweighted: false,
        signed: false,
        directed: false,
        self_loops: false,
        multigraph: false,
        format: OutputFormat::Csv,
    }
}

pub(super) fn generate_command(output: &Path, graph: GraphArgs) -> GenerateCommand {
    GenerateCommand {
        output: output.to_path_buf(),
        config: None,
        seed: Some(7),
        log_file: None,
        graph,
    }
}

pub(super) fn run_generate_expecting_success(command: GenerateCommand) -> GenerationSummary {
    match run_cli(Cli {
        command: Command::Generate(command),
    }) {
        Ok(ExecutionSummary::Generated(summary)) => summary,
        Ok(other) => panic!("expected a generation summary, got {other:?}"),
        Err(err) => panic!("generation failed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(command: Command) -> CliError {
    match run_cli(Cli { command }) {
        Ok(summary) => panic!("expected CLI to fail, got {summary:?}"),
        Err(err) => err,
    }
}
