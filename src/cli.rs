//! Command-line interface for signsh
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Sign language typing for the terminal
#[derive(Parser, Debug)]
#[command(name = "signsh", version, about = "Sign language typing for the terminal")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: session summary, -vv: per-frame labels)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Confidence floor for accepting a detection (0.0-1.0)
    #[arg(long, global = true, value_name = "SCORE", value_parser = parse_confidence)]
    pub min_confidence: Option<f32>,
}

/// Parse a confidence floor, rejecting values outside [0, 1].
fn parse_confidence(s: &str) -> Result<f32, String> {
    let floor: f32 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if !floor.is_finite() || !(0.0..=1.0).contains(&floor) {
        return Err(format!("must be between 0.0 and 1.0, got {floor}"));
    }
    Ok(floor)
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Debounce a live label stream from stdin into a transcript (default)
    Live,

    /// Majority-vote a recorded clip's label stream from stdin
    Clip,

    /// Report the letter for a single frame line from stdin
    Frame,

    /// List the fingerspelling alphabet with handshape descriptions
    Letters,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
