//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::product::{Color, Size};

/// Filter a small product catalog with composable predicates.
///
/// Without a subcommand, runs the `demo` scenarios.
#[derive(Debug, Parser)]
#[command(name = "sift-demo")]
#[command(version)]
#[command(about = "Filter a product catalog with composable predicates")]
pub struct Cli {
    /// Read products from a JSON file instead of the built-in sample
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the three demo filters: green, large, green and large
    Demo,

    /// Filter by the given criteria (all must hold)
    Filter(FilterArgs),
}

#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Keep products of this color
    #[arg(long, value_enum)]
    pub color: Option<Color>,

    /// Keep products of this size
    #[arg(long, value_enum)]
    pub size: Option<Size>,

    /// Keep products whose name contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub name_contains: Option<String>,

    /// Use the one-method-per-criterion filter instead of predicates
    #[arg(long)]
    pub naive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One name per line, blank line after each result
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
