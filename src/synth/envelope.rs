//! Exponential decay envelope.

/// Decay rate for single tones.
pub const TONE_DECAY: f64 = 3.0;

/// Decay rate for chords, slower so the chord rings out.
pub const CHORD_DECAY: f64 = 2.0;

/// Decay rate for the error sweep.
pub const SWEEP_DECAY: f64 = 4.0;

/// Per-sample gain `exp(-rate * t)`.
///
/// Starts at 1.0 for `t = 0` and never increases for a non-negative rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEnvelope {
    /// Decay constant in 1/seconds.
    pub rate: f64,
}

impl DecayEnvelope {
    pub const fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub const fn tone() -> Self {
        Self::new(TONE_DECAY)
    }

    pub const fn chord() -> Self {
        Self::new(CHORD_DECAY)
    }

    pub const fn sweep() -> Self {
        Self::new(SWEEP_DECAY)
    }

    /// Gain at `t` seconds after onset.
    #[inline]
    pub fn gain_at(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }
}
