//! Locale boundary adapter: BCP 47 tag to context direction
//!
//! Hosts usually know a locale, not a direction. This is the thin
//! translation at that boundary; the decision engine itself never sees
//! locale identifiers. An explicit script subtag decides first, then the
//! primary-language subtag is checked against the RTL set. Unparseable
//! tags are rejected rather than coerced: a silently wrong direction
//! shows up later as corrupted UI, not as a crash.

use bidifmt_core::{
    error::{BidiError, Result},
    types::Direction,
};
use language_tags::LanguageTag;

/// Scripts written right-to-left (ISO 15924)
const RTL_SCRIPTS: &[&str] = &[
    "Adlm", "Arab", "Hebr", "Mand", "Nkoo", "Rohg", "Samr", "Syrc", "Thaa", "Yezi",
];

/// Primary-language subtags whose default script is right-to-left
///
/// Includes the deprecated `iw`/`ji` aliases for Hebrew and Yiddish,
/// which still show up in the wild.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "glk", "he", "iw", "ji", "ks", "lrc", "mzn", "nqo", "pnb",
    "ps", "sd", "ug", "ur", "yi",
];

/// Base direction of the locale identified by `tag`
pub fn direction_for_locale(tag: &str) -> Result<Direction> {
    let parsed = LanguageTag::parse(tag)
        .map_err(|err| BidiError::InvalidLocale(format!("{tag}: {err}")))?;

    if let Some(script) = parsed.script() {
        let rtl = RTL_SCRIPTS
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(script));
        log::debug!("locale {tag}: script {script} resolves {}", if rtl { "rtl" } else { "ltr" });
        return Ok(if rtl {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        });
    }

    let language = parsed.primary_language().to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&language.as_str()) {
        Ok(Direction::RightToLeft)
    } else {
        Ok(Direction::LeftToRight)
    }
}
