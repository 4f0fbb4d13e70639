//! Command-line interface over the sociograph traversal engine.
//!
//! Every command works on seeded synthetic input: `summary` and `path`
//! generate a social network, `traverse` generates a weighted graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, DEFAULT_SUMMARY_SIZES, GenerationArgs, GraphArgs,
    MATRIX_SAMPLE, NetworkArgs, PathAlgorithm, PathCommand, PathReport, SummaryCommand,
    SummaryReport, TraversalReport, TraverseCommand, TraverseOrder, render_output, run_cli,
};
