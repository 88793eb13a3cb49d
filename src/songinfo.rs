/// The songinfo module reads the per-directory song.ini metadata file. Only
/// the `name` and `artist` keys under the `[song]` section matter here; a
/// missing key is an expected error that skips the directory.
use crate::errors::{ChartfixExpectedError, Result};
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    pub name: String,
    pub artist: String,
}

impl SongInfo {
    pub fn read(path: &Path) -> Result<SongInfo> {
        if !path.exists() {
            return Err(ChartfixExpectedError::MissingFile { path: path.to_path_buf() }.into());
        }
        // Ini lowercases sections and keys on load, so `[Song]` and `[song]`
        // both resolve.
        let mut ini = Ini::new();
        ini.load(path).map_err(|e| {
            ChartfixExpectedError::Generic(format!("failed to read {}: {e}", path.display()))
        })?;
        let name = read_field(&ini, path, "name")?;
        let artist = read_field(&ini, path, "artist")?;
        Ok(SongInfo { name, artist })
    }

    /// The title the chart's first track is expected to carry.
    pub fn target_title(&self) -> String {
        format!("{} - {}", self.artist, self.name)
    }
}

fn read_field(ini: &Ini, path: &Path, key: &str) -> Result<String> {
    match ini.get("song", key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ChartfixExpectedError::MissingMetadata {
            path: path.to_path_buf(),
            field: key.to_string(),
        }
        .into()),
    }
}
