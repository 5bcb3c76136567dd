//! Context-free classification of a string's directionality
//!
//! Three pure questions about a piece of text: which direction does it
//! enter with, which does it exit with, and what is its overall
//! direction? The first two are exact scans for strongly-directional
//! characters; the third is delegated to a [`DirectionEstimator`].
//!
//! Strong direction per character comes from the Unicode bidi class:
//! L is LTR, R and AL are RTL, everything else (digits included) is
//! neutral here.

use bidifmt_core::{traits::DirectionEstimator, types::Direction};
use unicode_bidi::{bidi_class, BidiClass};

/// Intrinsic direction of a single character, `None` for neutrals
pub fn strong_direction(ch: char) -> Option<Direction> {
    match bidi_class(ch) {
        BidiClass::L => Some(Direction::LeftToRight),
        BidiClass::R | BidiClass::AL => Some(Direction::RightToLeft),
        _ => None,
    }
}

/// Direction of the first strongly-directional character
///
/// `None` when the text has no strong character at all (empty string,
/// digits, punctuation).
pub fn entry_direction(text: &str) -> Option<Direction> {
    text.chars().find_map(strong_direction)
}

/// Direction of the last strongly-directional character
pub fn exit_direction(text: &str) -> Option<Direction> {
    text.chars().rev().find_map(strong_direction)
}

/// Overall direction of `text` as judged by `estimator`
///
/// Always concrete: estimators are total over all input.
pub fn overall_direction(text: &str, estimator: &dyn DirectionEstimator) -> Direction {
    let direction = estimator.estimate(text);
    log::trace!(
        "overall direction of {:?} via {}: {}",
        text,
        estimator.name(),
        direction
    );
    direction
}
