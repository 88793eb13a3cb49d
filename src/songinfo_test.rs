use crate::errors::{ChartfixError, ChartfixExpectedError};
use crate::songinfo::SongInfo;
use crate::testing;
use std::fs;

#[test]
fn test_reads_name_and_artist() {
    let temp = testing::init();
    let path = temp.path().join("song.ini");
    testing::write_song_ini(&path, "Song", "Artist");

    let info = SongInfo::read(&path).unwrap();
    assert_eq!(info.name, "Song");
    assert_eq!(info.artist, "Artist");
    assert_eq!(info.target_title(), "Artist - Song");
}

#[test]
fn test_section_and_key_lookup_is_case_insensitive() {
    let temp = testing::init();
    let path = temp.path().join("song.ini");
    fs::write(&path, "[Song]\nName = Song\nArtist = Artist\n").unwrap();

    let info = SongInfo::read(&path).unwrap();
    assert_eq!(info.target_title(), "Artist - Song");
}

#[test]
fn test_missing_artist_is_an_expected_error() {
    let temp = testing::init();
    let path = temp.path().join("song.ini");
    fs::write(&path, "[song]\nname = Song\n").unwrap();

    let err = SongInfo::read(&path).unwrap_err();
    assert!(matches!(
        err,
        ChartfixError::Expected(ChartfixExpectedError::MissingMetadata { ref field, .. })
            if field == "artist"
    ));
}

#[test]
fn test_empty_name_counts_as_missing() {
    let temp = testing::init();
    let path = temp.path().join("song.ini");
    fs::write(&path, "[song]\nname =\nartist = Artist\n").unwrap();

    let err = SongInfo::read(&path).unwrap_err();
    assert!(matches!(
        err,
        ChartfixError::Expected(ChartfixExpectedError::MissingMetadata { ref field, .. })
            if field == "name"
    ));
}

#[test]
fn test_absent_file_is_an_expected_error() {
    let temp = testing::init();
    assert!(matches!(
        SongInfo::read(&temp.path().join("song.ini")).unwrap_err(),
        ChartfixError::Expected(ChartfixExpectedError::MissingFile { .. })
    ));
}

#[test]
fn test_missing_song_section_is_an_expected_error() {
    let temp = testing::init();
    let path = temp.path().join("song.ini");
    fs::write(&path, "[other]\nname = Song\nartist = Artist\n").unwrap();

    assert!(matches!(
        SongInfo::read(&path).unwrap_err(),
        ChartfixError::Expected(ChartfixExpectedError::MissingMetadata { .. })
    ));
}
