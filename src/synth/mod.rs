//! Waveform synthesis.
//!
//! Pure functions that turn tone, chord and sweep parameters into
//! floating-point sample buffers at [`SAMPLE_RATE`].

pub mod envelope;
pub mod waveform;

// Re-export commonly used items
pub use envelope::DecayEnvelope;
pub use waveform::{chord, sample_count, sweep, time_points, tone, Sweep, SAMPLE_RATE};
