//! bell-sounds: writes the notification sounds to disk.
//!
//! Generates completion, notification, error and tool-complete WAV files,
//! or reports on an existing sounds directory with `--status`.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use bell_sounds::cli::Cli;
use bell_sounds::config::GeneratorConfig;
use bell_sounds::error::{Result, SoundError};
use bell_sounds::generation::{generate_sounds, sound_status_for, SoundStatus};
use bell_sounds::SoundKind;

fn main() {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GeneratorConfig::from_env()
        .with_output_dir(cli.output_dir.clone());
    config.check()?;
    let output_dir = config.effective_output_dir();
    let kinds = SoundKind::parse_selection(cli.sounds.as_slice())?;

    if cli.status {
        run_status(&kinds, &output_dir, cli.json)
    } else {
        run_generate(&kinds, &output_dir)
    }
}

/// Generates the selected sounds into `output_dir`.
fn run_generate(kinds: &[SoundKind], output_dir: &Path) -> Result<()> {
    let written = generate_sounds(kinds, output_dir)?;
    tracing::debug!(count = written.len(), dir = %output_dir.display(), "generation finished");

    println!("Sound files generated successfully!");
    Ok(())
}

/// Prints the state of each selected sound file in `output_dir`.
fn run_status(kinds: &[SoundKind], output_dir: &Path, json: bool) -> Result<()> {
    let status = sound_status_for(kinds, output_dir)?;

    if json {
        let text = serde_json::to_string_pretty(&status)
            .map_err(SoundError::report_failed)?;
        println!("{}", text);
        return Ok(());
    }

    println!("Sounds in {}", output_dir.display());
    for entry in &status {
        println!("  {}", describe(entry));
    }
    Ok(())
}

fn describe(entry: &SoundStatus) -> String {
    match entry.info {
        Some(info) => format!(
            "{:<13} {:<18} {} ch, {}-bit, {} Hz, {} frames ({:.2}s)",
            entry.kind.as_str(),
            entry.file_name,
            info.channels,
            info.bits_per_sample,
            info.sample_rate,
            info.frames,
            info.duration_sec
        ),
        None => format!("{:<13} {:<18} missing", entry.kind.as_str(), entry.file_name),
    }
}
