//! Sound generation module.
//!
//! Provides the driver that writes the sound catalog to disk and the
//! status report over an existing output directory.

pub mod pipeline;
pub mod status;

// Re-export commonly used items
pub use pipeline::{
    ensure_output_dir, generate_all, generate_sound, generate_sounds, GeneratedSound,
};
pub use status::{sound_status, sound_status_for, SoundStatus};
