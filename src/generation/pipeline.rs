//! Generation pipeline.
//!
//! Renders every sound in the catalog and writes it into the output
//! directory, one file at a time.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::audio::write_wav;
use crate::error::{Result, SoundError};
use crate::sounds::SoundKind;

/// A sound that was written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSound {
    pub kind: SoundKind,
    pub path: PathBuf,
    pub frames: usize,
}

/// Creates `dir` (and its parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    tracing::debug!(dir = %dir.display(), "ensuring output directory");
    std::fs::create_dir_all(dir)
        .map_err(|e| SoundError::output_dir_unavailable(dir.display(), e))
}

/// Renders one sound and writes it to `dir`.
pub fn generate_sound(kind: SoundKind, dir: &Path) -> Result<GeneratedSound> {
    let samples = kind.render();
    let path = dir.join(kind.file_name());
    write_wav(&samples, &path)?;

    tracing::info!(
        sound = %kind,
        path = %path.display(),
        frames = samples.len(),
        "wrote sound"
    );

    Ok(GeneratedSound {
        kind,
        path,
        frames: samples.len(),
    })
}

/// Generates all four sounds into `dir`.
///
/// Stops at the first failure; files written before it are left in place.
///
/// # Example
///
/// ```ignore
/// use bell_sounds::generation::generate_all;
///
/// let written = generate_all(Path::new("src/sounds"))?;
/// assert_eq!(written.len(), 4);
/// ```
pub fn generate_all(dir: &Path) -> Result<Vec<GeneratedSound>> {
    generate_sounds(&SoundKind::ALL, dir)
}

/// Generates `kinds` into `dir`, in the order given.
pub fn generate_sounds(kinds: &[SoundKind], dir: &Path) -> Result<Vec<GeneratedSound>> {
    ensure_output_dir(dir)?;

    kinds
        .iter()
        .map(|kind| generate_sound(*kind, dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::read_wav_info;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn generate_all_writes_four_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("sounds");

        let written = generate_all(&out).unwrap();
        assert_eq!(written.len(), 4);

        let kinds: Vec<_> = written.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SoundKind::ALL.to_vec());

        for sound in &written {
            let info = read_wav_info(&sound.path).unwrap();
            assert_eq!(info.frames as usize, sound.frames);
        }
    }

    #[test]
    fn generate_sound_frame_counts() {
        let dir = tempdir().unwrap();

        let sound = generate_sound(SoundKind::Completion, dir.path()).unwrap();
        assert_eq!(sound.frames, 35280);
        assert_eq!(sound.path, dir.path().join("completion.wav"));
    }

    #[test]
    fn generate_sounds_writes_only_selection() {
        let dir = tempdir().unwrap();

        let written = generate_sounds(&[SoundKind::Error], dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(dir.path().join("error.wav").is_file());
        assert!(!dir.path().join("completion.wav").exists());
    }

    #[test]
    fn output_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("sounds");
        std::fs::write(&blocker, b"").unwrap();

        let err = generate_all(&blocker).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutputDirUnavailable);
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sounds");

        ensure_output_dir(&out).unwrap();
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }
}
