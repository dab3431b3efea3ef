//! WAV file writer for generated sounds.
//!
//! Encodes floating-point samples as mono 16-bit PCM using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use serde::Serialize;

use crate::error::{Result, SoundError};
use crate::synth::SAMPLE_RATE;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (16-bit signed PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Scale applied to a unit amplitude before truncation.
const FULL_SCALE: f64 = i16::MAX as f64;

/// The fixed container format every sound is written in.
pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Converts an amplitude to a 16-bit sample.
///
/// Amplitudes are clamped to `[-1.0, 1.0]` and scaled by 32767; the
/// fractional part is truncated toward zero. NaN maps to silence.
pub fn quantize(sample: f64) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * FULL_SCALE) as i16
}

/// Writes samples to a WAV file, creating or overwriting `path`.
///
/// The parent directory must already exist.
///
/// # Example
///
/// ```ignore
/// use bell_sounds::audio::write_wav;
///
/// let samples = vec![0.0, 0.5, -0.5, 0.0];
/// write_wav(&samples, Path::new("/tmp/test.wav"))?;
/// ```
pub fn write_wav(samples: &[f64], path: &Path) -> Result<()> {
    let display = path.display();
    let mut writer = WavWriter::create(path, wav_spec())
        .map_err(|e| SoundError::wav_write_failed(&display, e))?;

    for sample in samples {
        writer
            .write_sample(quantize(*sample))
            .map_err(|e| SoundError::wav_write_failed(&display, e))?;
    }

    writer
        .finalize()
        .map_err(|e| SoundError::wav_write_failed(&display, e))
}

/// Container metadata read back from a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WavInfo {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    /// Samples per channel.
    pub frames: u32,
    pub duration_sec: f32,
}

/// Reads the header of the WAV file at `path`.
pub fn read_wav_info(path: &Path) -> Result<WavInfo> {
    let reader =
        WavReader::open(path).map_err(|e| SoundError::wav_read_failed(path.display(), e))?;
    let spec = reader.spec();
    let frames = reader.duration();

    Ok(WavInfo {
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        sample_rate: spec.sample_rate,
        frames,
        duration_sec: samples_to_duration(frames as usize, spec.sample_rate),
    })
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
