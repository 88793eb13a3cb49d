/// The chart module is the boundary over the binary MIDI format. It wraps
/// midly's parse/serialize routines and exposes the track-name accessors the
/// reconciliation logic needs: reading a track's name (its first name event,
/// per MIDI convention), renaming it, and removing a name event without
/// disturbing the timing of the events after it.
use crate::errors::{ChartfixExpectedError, Result};
use midly::num::u28;
use midly::{MetaMessage, Smf, TrackEvent, TrackEventKind};
use std::path::Path;

/// Fixed base name of the chart file within a song directory.
pub const CHART_FILENAME: &str = "notes.mid";
/// Fixed base name of the metadata file within a song directory.
pub const METADATA_FILENAME: &str = "song.ini";

/// Decode a chart from raw bytes. A malformed chart is an expected error;
/// the directory it came from is skipped, not repaired.
pub fn parse<'a>(bytes: &'a [u8], path: &Path) -> Result<Smf<'a>> {
    Smf::parse(bytes).map_err(|e| {
        ChartfixExpectedError::InvalidChart {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Every track-name event in a track, in event order, as (event index, name).
/// Names are decoded lossily; chart authoring tools are not strict about
/// encodings.
pub fn track_titles(track: &[TrackEvent]) -> Vec<(usize, String)> {
    track
        .iter()
        .enumerate()
        .filter_map(|(i, ev)| match ev.kind {
            TrackEventKind::Meta(MetaMessage::TrackName(raw)) => {
                Some((i, String::from_utf8_lossy(raw).into_owned()))
            }
            _ => None,
        })
        .collect()
}

/// A track's name is the name of its first track-name event, if any.
pub fn track_name(track: &[TrackEvent]) -> Option<String> {
    track.iter().find_map(|ev| match ev.kind {
        TrackEventKind::Meta(MetaMessage::TrackName(raw)) => {
            Some(String::from_utf8_lossy(raw).into_owned())
        }
        _ => None,
    })
}

/// Rename a track by rewriting its first track-name event in place, or by
/// inserting a fresh delta-0 name event at the head when the track has none.
pub fn set_track_name<'a>(track: &mut Vec<TrackEvent<'a>>, name: &'a str) {
    let kind = TrackEventKind::Meta(MetaMessage::TrackName(name.as_bytes()));
    match track
        .iter_mut()
        .find(|ev| matches!(ev.kind, TrackEventKind::Meta(MetaMessage::TrackName(_))))
    {
        Some(ev) => ev.kind = kind,
        None => track.insert(0, TrackEvent { delta: u28::new(0), kind }),
    }
}

/// Remove one event, folding its delta time into the successor so every
/// later event keeps its absolute position.
pub fn remove_event(track: &mut Vec<TrackEvent>, index: usize) {
    let removed = track.remove(index);
    if let Some(next) = track.get_mut(index) {
        let folded = removed.delta.as_int().saturating_add(next.delta.as_int());
        // Clamp to the 28-bit delta range.
        next.delta = u28::new(folded.min((1 << 28) - 1));
    }
}

/// Serialize a chart to disk.
pub fn save(smf: &Smf, path: &Path) -> std::io::Result<()> {
    smf.save(path)
}
