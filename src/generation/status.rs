//! Inspection of an existing sounds directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::audio::{read_wav_info, WavInfo};
use crate::error::Result;
use crate::sounds::SoundKind;

/// State of one sound file on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundStatus {
    pub kind: SoundKind,
    pub file_name: &'static str,
    pub path: PathBuf,
    pub exists: bool,
    /// Header metadata, present when the file exists.
    pub info: Option<WavInfo>,
}

/// Reports each catalog sound in `dir`.
///
/// Missing files are reported, not treated as errors. A file that exists
/// but is not a readable WAV fails the whole report.
pub fn sound_status(dir: &Path) -> Result<Vec<SoundStatus>> {
    sound_status_for(&SoundKind::ALL, dir)
}

/// Reports only `kinds` in `dir`.
pub fn sound_status_for(kinds: &[SoundKind], dir: &Path) -> Result<Vec<SoundStatus>> {
    kinds
        .iter()
        .map(|kind| -> Result<SoundStatus> {
            let path = dir.join(kind.file_name());
            let exists = path.is_file();
            let info = if exists {
                Some(read_wav_info(&path)?)
            } else {
                None
            };

            Ok(SoundStatus {
                kind: *kind,
                file_name: kind.file_name(),
                path,
                exists,
                info,
            })
        })
        .collect()
}
