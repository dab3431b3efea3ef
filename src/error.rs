//! Error types for bell-sounds.
//!
//! Defines the error codes and the error type used by the generator,
//! the WAV writer and the command-line driver.

use std::fmt;

/// Error codes identifying the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output directory could not be created or accessed.
    /// Trigger: Missing permissions, path exists as a regular file.
    OutputDirUnavailable,

    /// Writing a WAV file failed.
    /// Trigger: Missing directory, disk full, permission denied.
    WavWriteFailed,

    /// Reading back a WAV file failed.
    /// Trigger: Truncated or foreign file at the expected path.
    WavReadFailed,

    /// A sound type name did not match any known sound.
    UnknownSound,

    /// Runtime configuration is invalid.
    InvalidConfig,

    /// The status report could not be rendered.
    /// Trigger: Output path that is not valid UTF-8 with --json.
    ReportFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirUnavailable => "OUTPUT_DIR_UNAVAILABLE",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavReadFailed => "WAV_READ_FAILED",
            ErrorCode::UnknownSound => "UNKNOWN_SOUND",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::ReportFailed => "REPORT_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirUnavailable => "Output directory could not be created",
            ErrorCode::WavWriteFailed => "Failed to write WAV file",
            ErrorCode::WavReadFailed => "Failed to read WAV file",
            ErrorCode::UnknownSound => "Sound type is not known",
            ErrorCode::InvalidConfig => "Configuration is invalid",
            ErrorCode::ReportFailed => "Failed to render status report",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirUnavailable => {
                "Check that the parent directory is writable and that no regular file \
                 occupies the output path, or pick another directory with --output-dir"
            }
            ErrorCode::WavWriteFailed => {
                "Check free disk space and write permissions on the output directory"
            }
            ErrorCode::WavReadFailed => {
                "Regenerate the sounds by running bell-sounds without --status"
            }
            ErrorCode::UnknownSound => {
                "Use one of: completion, notification, error, tool-complete"
            }
            ErrorCode::InvalidConfig => {
                "Unset BELL_SOUNDS_DIR or point it at a non-empty path"
            }
            ErrorCode::ReportFailed => {
                "Use an output directory with a UTF-8 path, or drop --json"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for sound generation.
#[derive(Debug)]
pub struct SoundError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SoundError {
    /// Creates a new SoundError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SoundError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_UNAVAILABLE error.
    pub fn output_dir_unavailable(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputDirUnavailable,
            format!("Cannot create output directory {}: {}", path, source),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(path: impl fmt::Display, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write {}: {}", path, source),
            source,
        )
    }

    /// Creates a WAV_READ_FAILED error.
    pub fn wav_read_failed(path: impl fmt::Display, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavReadFailed,
            format!("Failed to read {}: {}", path, source),
            source,
        )
    }

    /// Creates an UNKNOWN_SOUND error.
    pub fn unknown_sound(name: &str) -> Self {
        Self::new(
            ErrorCode::UnknownSound,
            format!("Invalid sound type: {}", name),
        )
    }

    /// Creates a REPORT_FAILED error.
    pub fn report_failed(source: serde_json::Error) -> Self {
        Self::with_source(
            ErrorCode::ReportFailed,
            format!("Failed to serialize status report: {}", source),
            source,
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SoundError.
pub type Result<T> = std::result::Result<T, SoundError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(
            ErrorCode::OutputDirUnavailable.as_str(),
            "OUTPUT_DIR_UNAVAILABLE"
        );
        assert_eq!(ErrorCode::WavWriteFailed.as_str(), "WAV_WRITE_FAILED");
        assert_eq!(ErrorCode::WavReadFailed.as_str(), "WAV_READ_FAILED");
        assert_eq!(ErrorCode::UnknownSound.as_str(), "UNKNOWN_SOUND");
        assert_eq!(ErrorCode::InvalidConfig.as_str(), "INVALID_CONFIG");
        assert_eq!(ErrorCode::ReportFailed.as_str(), "REPORT_FAILED");
    }

    #[test]
    fn error_code_hints_not_empty() {
        for code in [
            ErrorCode::OutputDirUnavailable,
            ErrorCode::WavWriteFailed,
            ErrorCode::WavReadFailed,
            ErrorCode::UnknownSound,
            ErrorCode::InvalidConfig,
            ErrorCode::ReportFailed,
        ] {
            assert!(!code.recovery_hint().is_empty());
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn sound_error_display() {
        let err = SoundError::unknown_sound("chime");
        let text = err.to_string();
        assert!(text.contains("UNKNOWN_SOUND"));
        assert!(text.contains("chime"));
        assert!(text.contains("Recovery:"));
    }

    #[test]
    fn io_source_is_exposed() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SoundError::output_dir_unavailable("out", io);
        assert_eq!(err.code, ErrorCode::OutputDirUnavailable);
        assert!(err.source().is_some());
    }

    #[test]
    fn report_failed_keeps_json_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = SoundError::report_failed(json_err);
        assert_eq!(err.code, ErrorCode::ReportFailed);
        assert!(err.to_string().contains("REPORT_FAILED"));
        assert!(err.source().is_some());
    }
}
