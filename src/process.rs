/// The process module orchestrates a repair run: one directory at a time,
/// read the metadata, plan against the chart, and commit only when the plan
/// is dirty. Every per-directory failure is isolated so one bad directory
/// never halts a multi-directory run.
use crate::chart::{self, CHART_FILENAME, METADATA_FILENAME};
use crate::errors::{ChartfixError, Result};
use crate::reconcile::EditPlan;
use crate::songinfo::SongInfo;
use crate::{reconcile, transaction};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What happened to one directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The chart was rewritten; the original survives at `backup`.
    Repaired { backup: PathBuf },
    /// The chart was already valid and was not touched.
    Clean,
    /// A required input was missing; nothing was touched.
    Skipped(String),
}

/// Repair one song directory, expected to contain `notes.mid` and
/// `song.ini`.
pub fn process_directory(dir: &Path) -> Result<Outcome> {
    let midi_path = dir.join(CHART_FILENAME);
    let ini_path = dir.join(METADATA_FILENAME);
    if !midi_path.exists() || !ini_path.exists() {
        return Ok(Outcome::Skipped(format!(
            "missing {CHART_FILENAME} or {METADATA_FILENAME} in {}",
            dir.display()
        )));
    }

    let info = SongInfo::read(&ini_path)?;
    let target_title = info.target_title();

    let bytes = fs::read(&midi_path)?;
    let mut smf = chart::parse(&bytes, &midi_path)?;

    let plan = reconcile::plan(&smf, &target_title);
    report_plan(&plan, &target_title);

    if !plan.any_track_modified() {
        info!("no changes needed; {} is already valid", midi_path.display());
        return Ok(Outcome::Clean);
    }

    reconcile::apply(&mut smf, &plan, &target_title);
    let backup = transaction::commit(&smf, &midi_path)?;
    info!(
        "renamed old chart to {} and saved the repaired chart as {}",
        backup.display(),
        midi_path.display()
    );
    Ok(Outcome::Repaired { backup })
}

/// Process every directory named in a list file, one path per line. Bad
/// lines and failing directories are reported and the run continues.
pub fn process_list(list_file: &Path) -> Result<()> {
    let contents = fs::read_to_string(list_file)?;
    for line in contents.lines() {
        let dir = clean_directory_arg(line);
        if dir.as_os_str().is_empty() {
            continue;
        }
        if !dir.is_dir() {
            warn!("directory does not exist: {}", dir.display());
            continue;
        }
        run_directory(&dir);
    }
    Ok(())
}

/// Process one directory, reporting the outcome instead of propagating it.
pub fn run_directory(dir: &Path) {
    info!("processing {}", dir.display());
    match process_directory(dir) {
        Ok(Outcome::Repaired { backup }) => {
            info!("repaired {}; original kept at {}", dir.display(), backup.display());
        }
        Ok(Outcome::Clean) => {}
        Ok(Outcome::Skipped(reason)) => warn!("{reason}"),
        Err(ChartfixError::Expected(e)) => warn!("skipping {}: {e}", dir.display()),
        // The backup survived but the original path is now missing; this
        // must stand out from an ordinary failure.
        Err(err @ ChartfixError::StrandedWrite { .. }) => error!("{err}"),
        Err(err) => error!("failed to process {}: {err}", dir.display()),
    }
}

/// Normalize a directory argument the way list files are written by hand:
/// surrounding whitespace and double quotes stripped, trailing slashes and
/// backslashes dropped.
pub fn clean_directory_arg(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches('"');
    PathBuf::from(trimmed.trim_end_matches(&['/', '\\'][..]))
}

fn report_plan(plan: &EditPlan, target_title: &str) {
    match &plan.old_title {
        Some(old) if plan.title_track_renamed => {
            info!("title track renamed: '{old}' -> '{target_title}'");
        }
        Some(old) if old == target_title => {
            debug!("title track '{old}' already matches the expected title");
        }
        Some(old) => {
            info!("title track '{old}' is a custom title; leaving it alone");
        }
        None if plan.title_track_renamed => {
            info!("title track was blank; set to '{target_title}'");
        }
        None => {}
    }
    for (i, report) in plan.tracks.iter().enumerate() {
        if report.has_no_titles {
            warn!("track {} has no titles at all", i + 1);
        }
        if report.has_only_invalid_single_title {
            warn!(
                "track {} has a single unrecognized title '{}'; not removing it",
                i + 1,
                report.titles_found[0]
            );
        }
        if report.has_invalid_among_multiple {
            warn!(
                "track {} carries unrecognized titles among {:?}; removing the rejects",
                i + 1,
                report.titles_found
            );
        }
    }
}
