/// The vocabulary module holds the closed set of recognized track-name base
/// strings and the compiled matcher that decides membership. The matcher is
/// built once per process and reused for every name event in every chart.
use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized track-name base strings: instrument/part labels and structural
/// markers, without any numeric suffix.
pub const VALID_TITLES: &[&str] = &[
    "PART DRUMS",
    "PART BASS",
    "PART GUITAR",
    "PART VOCALS",
    "EVENTS",
    "VENUE",
    "BEAT",
    "PART REAL_GUITAR_22",
    "PART REAL_GUITAR",
    "PART REAL_BASS",
    "PART KEYS",
    "PART REAL_KEYS_X",
    "PART REAL_KEYS_H",
    "PART REAL_KEYS_E",
    "PART REAL_KEYS_M",
    "PART KEYS_ANIM_RH",
    "PART KEYS_ANIM_LH",
    "HARM",
];

static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let escaped: Vec<String> = VALID_TITLES.iter().map(|t| regex::escape(t)).collect();
    // The suffix group admits both "PART DRUMS_2" and "PART DRUMS2"; the
    // bare-digit shape is pinned as observed behavior, not tightened.
    Regex::new(&format!(r"^(?:{})(_?\d*)?$", escaped.join("|"))).unwrap()
});

/// Whether a candidate string is a recognized track name, allowing an
/// optional numeric suffix on any vocabulary base. Total over all inputs.
pub fn is_valid_title(candidate: &str) -> bool {
    TITLE_REGEX.is_match(candidate)
}
