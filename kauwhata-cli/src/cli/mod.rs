//! Command-line interface orchestration for kauwhata.
//!
//! `generate` synthesizes a random graph and writes it in one of the supported
//! output formats. `convert` re-encodes a JSON graph document as YAML or
//! Pickle.

mod commands;

pub use commands::{
    Cli, CliError, Command, ConversionSummary, ConvertCommand, ConvertTarget, ExecutionSummary,
    GenerateCommand, GenerationSummary, GraphArgs, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
