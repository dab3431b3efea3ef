//! CLI argument parser.
//!
//! Without flags the binary generates every sound into the output
//! directory; `--status` inspects the directory instead. `--sound`
//! narrows either mode to the named sounds.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// bell-sounds: synthesize notification sounds as WAV files
#[derive(Parser, Debug)]
#[command(name = "bell-sounds")]
#[command(about = "Synthesize notification sounds as 16-bit mono WAV files")]
#[command(version)]
pub struct Cli {
    /// Directory to write sounds to (default: src/sounds, or $BELL_SOUNDS_DIR)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Limit to the named sound (repeatable): completion, notification, error, tool-complete
    #[arg(long = "sound", value_name = "NAME")]
    pub sounds: Vec<String>,

    /// Report the sound files in the output directory instead of generating them
    #[arg(short, long)]
    pub status: bool,

    /// Print the status report as JSON (with --status)
    #[arg(long, requires = "status")]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
