// this_file: crates/bidifmt/src/lib.rs

//! Bidi-safe formatting of text runs inside mixed-direction content
//!
//! Splicing a string of unknown directionality into a paragraph with a
//! known base direction can garble the layout of everything around it:
//! a trailing Hebrew word drags following punctuation to the wrong side,
//! a leading Latin word breaks the alignment of an RTL sentence. This
//! crate makes the insertion safe without asking the caller to understand
//! the Unicode Bidirectional Algorithm.
//!
//! The work happens in two layers:
//!
//! 1. **Resolver** - classify a string's entry, exit, and (via a
//!    pluggable estimator) overall direction.
//! 2. **Formatter** - decide whether the string needs a directional
//!    embedding and whether zero-width reset marks must shield its edges,
//!    then emit either plain text with control characters
//!    ([`BidiFormatter::unicode_wrap`]) or HTML markup
//!    ([`BidiFormatter::span_wrap`]).
//!
//! # Example
//!
//! ```
//! use bidifmt::{BidiFormatter, Direction};
//!
//! // An LTR paragraph receiving a Hebrew username.
//! let fmt = BidiFormatter::new(Direction::LeftToRight);
//! assert_eq!(
//!     fmt.unicode_wrap("\u{05e0}\u{05e1}"),
//!     "\u{200E}\u{202B}\u{05e0}\u{05e1}\u{202C}\u{200E}",
//! );
//!
//! // Latin text in the same context passes through untouched.
//! assert_eq!(fmt.unicode_wrap("abba"), "abba");
//! ```
//!
//! A formatter is an immutable configuration value; build it once and
//! share it freely across threads.

pub mod escape;
pub mod formatter;
pub mod heuristics;
pub mod locale;
pub mod resolver;

pub use bidifmt_core::{error, traits, types};
pub use bidifmt_core::{BidiError, Direction, DirectionEstimator, Result};
pub use formatter::{BidiFormatter, BidiFormatterBuilder};

/// Common imports for typical usage
pub mod prelude {
    pub use bidifmt_core::{
        error::{BidiError, Result},
        traits::{AlwaysLtr, AlwaysRtl, DirectionEstimator},
        types::Direction,
    };

    pub use crate::formatter::{BidiFormatter, BidiFormatterBuilder};
    pub use crate::heuristics::FirstStrong;
}

#[cfg(test)]
mod proptests;
