/// The reconcile module is the decision core: it classifies every track's
/// name events against the vocabulary and the computed target title, and
/// produces an edit plan. It performs no I/O and emits no diagnostics of its
/// own; callers synthesize all reporting from the returned structures.
use crate::chart;
use crate::vocabulary::is_valid_title;
use midly::Smf;

/// Placeholder name stamped on the first track by the upstream authoring
/// tool; treated as equivalent to "unset".
pub const SENTINEL_TRACK_NAME: &str = "midi_export";

/// Classification of one track's name events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackReport {
    /// Every name found in the track, in event order.
    pub titles_found: Vec<String>,
    /// Event indices scheduled for removal, ascending. Never contains the
    /// sole remaining name event of a track, even if that name is invalid.
    pub removals: Vec<usize>,
    pub has_no_titles: bool,
    pub has_only_invalid_single_title: bool,
    pub has_invalid_among_multiple: bool,
}

/// The full edit plan for one chart.
#[derive(Debug, Clone, Default)]
pub struct EditPlan {
    pub title_track_renamed: bool,
    /// The title track's name before reconciliation, when it had one.
    pub old_title: Option<String>,
    pub tracks: Vec<TrackReport>,
}

impl EditPlan {
    pub fn any_track_modified(&self) -> bool {
        self.title_track_renamed || self.tracks.iter().any(|t| !t.removals.is_empty())
    }
}

/// Classify one track's titles. A name is acceptable if it is in the
/// vocabulary or equals the target title (a just-written title can never be
/// invalidated by a vocabulary change).
///
/// With multiple titles, every unacceptable one is scheduled for removal;
/// multiple titles are assumed to be historical corruption. A single title
/// is never removed, even if unacceptable: losing a track's only name is
/// worse than keeping a wrong one. That asymmetry is deliberate.
pub fn classify_titles(titles: &[(usize, String)], target_title: &str) -> TrackReport {
    let acceptable = |name: &str| is_valid_title(name) || name == target_title;
    let mut report = TrackReport {
        titles_found: titles.iter().map(|(_, name)| name.clone()).collect(),
        ..Default::default()
    };
    match titles.len() {
        0 => report.has_no_titles = true,
        1 => {
            if !acceptable(&titles[0].1) {
                report.has_only_invalid_single_title = true;
            }
        }
        _ => {
            for (index, name) in titles {
                if !acceptable(name) {
                    report.removals.push(*index);
                }
            }
            report.has_invalid_among_multiple = !report.removals.is_empty();
        }
    }
    report
}

/// Compute the edit plan for a whole chart.
///
/// Track 0 is special-cased first: it is renamed to the target title iff its
/// current name is blank or the authoring tool's sentinel. A matching or
/// operator-chosen name is left intact. Classification then runs over all
/// tracks, with track 0 classified against its post-rename titles, matching
/// the rename-then-scan order the repair has always used.
pub fn plan(smf: &Smf, target_title: &str) -> EditPlan {
    let mut plan = EditPlan::default();
    if smf.tracks.is_empty() {
        return plan;
    }

    let old_name = chart::track_name(&smf.tracks[0]).unwrap_or_default();
    plan.title_track_renamed = old_name.is_empty() || old_name == SENTINEL_TRACK_NAME;
    plan.old_title = (!old_name.is_empty()).then_some(old_name);

    for (i, track) in smf.tracks.iter().enumerate() {
        let mut titles = chart::track_titles(track);
        if i == 0 && plan.title_track_renamed {
            match titles.first_mut() {
                Some((_, name)) => *name = target_title.to_string(),
                // The rename will insert a name event where none exists; it
                // counts as the track's single (acceptable) title.
                None => titles.push((0, target_title.to_string())),
            }
        }
        plan.tracks.push(classify_titles(&titles, target_title));
    }
    plan
}

/// Apply a plan to the in-memory chart: rename the title track, then apply
/// each track's removals in descending index order so earlier indices stay
/// valid.
pub fn apply<'a>(smf: &mut Smf<'a>, plan: &EditPlan, target_title: &'a str) {
    if plan.title_track_renamed {
        if let Some(track) = smf.tracks.first_mut() {
            chart::set_track_name(track, target_title);
        }
    }
    for (track, report) in smf.tracks.iter_mut().zip(&plan.tracks) {
        for &index in report.removals.iter().rev() {
            chart::remove_event(track, index);
        }
    }
}
