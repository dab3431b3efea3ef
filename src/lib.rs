//! bell-sounds: synthesizes short notification sounds as WAV files.
//!
//! Four sounds are produced from fixed recipes: a completion chord, a
//! notification tone, a descending error sweep and a tool-complete tone.
//! Each is rendered fully in memory and written as mono 16-bit PCM at
//! 44100 Hz.
//!
//! # Modules
//!
//! - [`synth`]: Envelope and tone/chord/sweep generators
//! - [`audio`]: WAV encoding and read-back
//! - [`sounds`]: The sound catalog (SoundKind, Recipe)
//! - [`generation`]: Writing the catalog to disk, status reports
//! - [`config`]: Runtime configuration (GeneratorConfig)
//! - [`error`]: Error types and codes (SoundError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use bell_sounds::{generation::generate_all, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_env();
//! let written = generate_all(&config.effective_output_dir())?;
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod sounds;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, Result, SoundError};
pub use sounds::{Recipe, SoundKind};
