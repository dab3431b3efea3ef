//! The notification sound catalog.
//!
//! Each [`SoundKind`] owns a fixed [`Recipe`] and the file name it is
//! written under.

use serde::Serialize;

use crate::error::{Result, SoundError};
use crate::synth::{chord, tone, Sweep};

/// C-E-G, the C major triad in the fifth octave.
pub const C_MAJOR_TRIAD: [f64; 3] = [523.25, 659.25, 783.99];

/// The notification sounds, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundKind {
    /// Task completion chord.
    Completion,
    /// General notification tone.
    Notification,
    /// Descending error sweep.
    Error,
    /// Short tone after a tool finishes.
    ToolComplete,
}

/// How a sound is synthesized.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Tone {
        frequency: f64,
        duration: f64,
        volume: f64,
    },
    Chord {
        frequencies: Vec<f64>,
        duration: f64,
        volume: f64,
    },
    Sweep(Sweep),
}

impl Recipe {
    /// Renders the recipe into amplitude samples.
    pub fn render(&self) -> Vec<f64> {
        match self {
            Recipe::Tone {
                frequency,
                duration,
                volume,
            } => tone(*frequency, *duration, *volume),
            Recipe::Chord {
                frequencies,
                duration,
                volume,
            } => chord(frequencies, *duration, *volume),
            Recipe::Sweep(sweep) => sweep.render(),
        }
    }
}

impl SoundKind {
    pub const ALL: [SoundKind; 4] = [
        SoundKind::Completion,
        SoundKind::Notification,
        SoundKind::Error,
        SoundKind::ToolComplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundKind::Completion => "completion",
            SoundKind::Notification => "notification",
            SoundKind::Error => "error",
            SoundKind::ToolComplete => "tool-complete",
        }
    }

    /// Parses a sound name, ignoring case, surrounding whitespace and
    /// the separator style (`toolComplete`, `tool-complete`, `tool_complete`).
    pub fn parse(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "completion" => Ok(SoundKind::Completion),
            "notification" => Ok(SoundKind::Notification),
            "error" => Ok(SoundKind::Error),
            "toolcomplete" => Ok(SoundKind::ToolComplete),
            _ => Err(SoundError::unknown_sound(s)),
        }
    }

    /// Parses a list of sound names into catalog order, dropping repeats.
    ///
    /// An empty list selects every sound.
    pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
        if names.is_empty() {
            return Ok(Self::ALL.to_vec());
        }

        let requested = names
            .iter()
            .map(|name| Self::parse(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::ALL
            .into_iter()
            .filter(|kind| requested.contains(kind))
            .collect())
    }

    /// File name under the sounds directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundKind::Completion => "completion.wav",
            SoundKind::Notification => "notification.wav",
            SoundKind::Error => "error.wav",
            SoundKind::ToolComplete => "tool-complete.wav",
        }
    }

    pub fn recipe(&self) -> Recipe {
        match self {
            SoundKind::Completion => Recipe::Chord {
                frequencies: C_MAJOR_TRIAD.to_vec(),
                duration: 0.8,
                volume: 0.5,
            },
            SoundKind::Notification => Recipe::Tone {
                frequency: 800.0,
                duration: 0.3,
                volume: 0.4,
            },
            SoundKind::Error => Recipe::Sweep(Sweep::default()),
            SoundKind::ToolComplete => Recipe::Tone {
                frequency: 600.0,
                duration: 0.2,
                volume: 0.3,
            },
        }
    }

    pub fn render(&self) -> Vec<f64> {
        self.recipe().render()
    }
}

impl std::fmt::Display for SoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SoundKind {
    type Err = SoundError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
