//! Tone, chord and sweep generators.
//!
//! Every generator samples the same time grid: `round(SAMPLE_RATE * duration)`
//! points spread evenly from `0` to `duration`, both ends included.
//! Degenerate inputs (non-positive or non-finite duration) give an empty buffer.

use std::f64::consts::PI;

use super::envelope::DecayEnvelope;

/// Sample rate shared by every generator and by the WAV writer.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples generated for `duration` seconds.
pub fn sample_count(duration: f64) -> usize {
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    (SAMPLE_RATE as f64 * duration).round() as usize
}

/// Sample times in seconds for a buffer of `duration` seconds.
pub fn time_points(duration: f64) -> Vec<f64> {
    let n = sample_count(duration);
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = duration / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// A single decaying sinusoid.
///
/// # Example
///
/// ```
/// use bell_sounds::synth::tone;
///
/// let samples = tone(800.0, 0.3, 0.4);
/// assert_eq!(samples.len(), 13230);
/// assert_eq!(samples[0], 0.0);
/// ```
pub fn tone(frequency: f64, duration: f64, volume: f64) -> Vec<f64> {
    let envelope = DecayEnvelope::tone();
    time_points(duration)
        .into_iter()
        .map(|t| volume * envelope.gain_at(t) * (2.0 * PI * frequency * t).sin())
        .collect()
}

/// Decaying sinusoids summed and averaged over `frequencies`.
///
/// An empty frequency set yields silence of the requested length.
pub fn chord(frequencies: &[f64], duration: f64, volume: f64) -> Vec<f64> {
    let t = time_points(duration);
    if frequencies.is_empty() {
        return vec![0.0; t.len()];
    }

    let envelope = DecayEnvelope::chord();
    let voices = frequencies.len() as f64;
    t.into_iter()
        .map(|t| {
            let gain = envelope.gain_at(t);
            let sum: f64 = frequencies
                .iter()
                .map(|f| gain * (2.0 * PI * f * t).sin())
                .sum();
            volume * sum / voices
        })
        .collect()
}

/// Parameters of the descending error sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start_frequency: f64,
    pub end_frequency: f64,
    pub duration: f64,
    pub volume: f64,
}

impl Sweep {
    /// Instantaneous frequency at `t`, linear from start to end.
    pub fn frequency_at(&self, t: f64) -> f64 {
        self.start_frequency + (self.end_frequency - self.start_frequency) * t / self.duration
    }

    /// Renders the sweep.
    ///
    /// The phase is `2π · f(t) · t` rather than the integral of `f`, so the
    /// pitch heard is not exactly `f(t)`. Existing sound files depend on it.
    pub fn render(&self) -> Vec<f64> {
        let envelope = DecayEnvelope::sweep();
        time_points(self.duration)
            .into_iter()
            .map(|t| {
                self.volume * envelope.gain_at(t) * (2.0 * PI * self.frequency_at(t) * t).sin()
            })
            .collect()
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            start_frequency: 800.0,
            end_frequency: 200.0,
            duration: 0.3,
            volume: 0.4,
        }
    }
}

/// The error sweep, 800 Hz down to 200 Hz at volume 0.4.
pub fn sweep(duration: f64) -> Vec<f64> {
    Sweep {
        duration,
        ..Sweep::default()
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_MAJOR: [f64; 3] = [523.25, 659.25, 783.99];

    #[test]
    fn sample_count_rounds() {
        assert_eq!(sample_count(0.3), 13230);
        assert_eq!(sample_count(0.8), 35280);
        assert_eq!(sample_count(0.2), 8820);
        assert_eq!(sample_count(1.0), 44100);
    }

    #[test]
    fn degenerate_durations_are_empty() {
        assert_eq!(sample_count(0.0), 0);
        assert_eq!(sample_count(-1.0), 0);
        assert_eq!(sample_count(f64::NAN), 0);
        assert!(tone(440.0, -0.5, 0.5).is_empty());
        assert!(chord(&C_MAJOR, 0.0, 0.5).is_empty());
        assert!(sweep(-0.3).is_empty());
    }

    #[test]
    fn time_points_span_duration() {
        let t = time_points(0.3);
        assert_eq!(t.len(), 13230);
        assert_eq!(t[0], 0.0);
        assert!((t[t.len() - 1] - 0.3).abs() < 1e-12);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn single_point_grid() {
        // 1 / 44100 s rounds to exactly one sample
        assert_eq!(time_points(1.0 / SAMPLE_RATE as f64), vec![0.0]);
    }

    #[test]
    fn tone_shape() {
        let samples = tone(800.0, 0.3, 0.4);
        assert_eq!(samples.len(), 13230);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.4));
    }

    #[test]
    fn tone_follows_envelope() {
        let volume = 0.5;
        let samples = tone(600.0, 0.2, volume);
        let t = time_points(0.2);
        let envelope = DecayEnvelope::tone();
        for (s, t) in samples.iter().zip(&t) {
            assert!(s.abs() <= volume * envelope.gain_at(*t) + 1e-12);
        }
    }

    #[test]
    fn chord_shape() {
        let samples = chord(&C_MAJOR, 0.8, 0.5);
        assert_eq!(samples.len(), 35280);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5 + 1e-12));
    }

    #[test]
    fn chord_of_one_matches_slower_tone() {
        let single = chord(&[440.0], 0.1, 0.5);
        let t = time_points(0.1);
        let envelope = DecayEnvelope::chord();
        for (s, t) in single.iter().zip(&t) {
            let expected = 0.5 * envelope.gain_at(*t) * (2.0 * PI * 440.0 * t).sin();
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_chord_is_silent() {
        let samples = chord(&[], 0.1, 0.5);
        assert_eq!(samples.len(), sample_count(0.1));
        assert!(samples.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn sweep_frequency_is_linear() {
        let s = Sweep::default();
        assert_eq!(s.frequency_at(0.0), 800.0);
        assert!((s.frequency_at(0.15) - 500.0).abs() < 1e-9);
        assert!((s.frequency_at(0.3) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn sweep_shape() {
        let samples = sweep(0.3);
        assert_eq!(samples.len(), 13230);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.4));
        assert_eq!(samples, Sweep::default().render());
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(tone(800.0, 0.3, 0.4), tone(800.0, 0.3, 0.4));
        assert_eq!(chord(&C_MAJOR, 0.8, 0.5), chord(&C_MAJOR, 0.8, 0.5));
    }
}
