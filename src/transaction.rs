/// The transaction module commits a repaired chart to disk through a
/// backup-then-overwrite sequence: the original is renamed to a
/// non-colliding backup path before any byte of the new content is written,
/// so a crash mid-commit never loses the original file.
use crate::chart;
use crate::errors::{ChartfixError, Result};
use midly::Smf;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the original file name to form the backup name.
pub const BACKUP_SUFFIX: &str = ".old";

/// The first non-existing backup path for a file: `notes.mid.old`, then
/// `notes.mid.old1`, `notes.mid.old2`, and so on, unbounded upward. An
/// existing backup is never a candidate.
pub fn next_backup_path(original: &Path) -> PathBuf {
    let mut base = OsString::from(original.as_os_str());
    base.push(BACKUP_SUFFIX);
    let mut candidate = PathBuf::from(&base);
    let mut counter: u64 = 1;
    while candidate.exists() {
        let mut numbered = base.clone();
        numbered.push(counter.to_string());
        candidate = PathBuf::from(numbered);
        counter += 1;
    }
    candidate
}

/// Commit a mutated chart to the path the original was loaded from. Called
/// only for a dirty plan, after the edits have been applied in memory.
///
/// If the backup rename fails, the original file is untouched and the
/// attempt is abandoned. If the write fails after the rename succeeded, the
/// backup is the only surviving copy and the original path is missing; that
/// residual state is reported through the distinct `StrandedWrite` error.
pub fn commit(smf: &Smf, original: &Path) -> Result<PathBuf> {
    let backup = next_backup_path(original);
    fs::rename(original, &backup)?;
    chart::save(smf, original).map_err(|source| ChartfixError::StrandedWrite {
        original: original.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    Ok(backup)
}
