use midly::num::{u15, u28};
use midly::{Format, Header, MetaMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init() -> TempDir {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
    TempDir::new().expect("failed to create temp dir")
}

pub fn name_event(name: &str) -> TrackEvent<'_> {
    TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(name.as_bytes())),
    }
}

pub fn end_of_track() -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    }
}

/// A track holding the given name events, in order, terminated properly.
pub fn track_of_names<'a>(names: &[&'a str]) -> Vec<TrackEvent<'a>> {
    let mut events: Vec<TrackEvent<'a>> = names.iter().map(|n| name_event(n)).collect();
    events.push(end_of_track());
    events
}

pub fn smf_with_tracks(tracks: Vec<Vec<TrackEvent>>) -> Smf {
    Smf {
        header: Header::new(Format::Parallel, Timing::Metrical(u15::new(480))),
        tracks,
    }
}

pub fn write_chart(path: &Path, smf: &Smf) {
    smf.save(path).expect("failed to write test chart");
}

pub fn write_song_ini(path: &Path, name: &str, artist: &str) {
    fs::write(path, format!("[song]\nname = {name}\nartist = {artist}\n"))
        .expect("failed to write test song.ini");
}
