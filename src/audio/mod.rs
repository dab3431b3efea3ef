//! Audio output module.
//!
//! Provides 16-bit PCM WAV writing and read-back for generated sounds.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    quantize, read_wav_info, samples_to_duration, wav_spec, write_wav, WavInfo, BITS_PER_SAMPLE,
    CHANNELS,
};
