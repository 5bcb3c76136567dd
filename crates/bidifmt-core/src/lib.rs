//! Bidifmt Core: the vocabulary of bidirectional text formatting
//!
//! This crate holds the small set of types everything else builds on:
//! the two base directions, the Unicode control characters that steer
//! them, the estimator capability that guesses a string's overall
//! direction, and the error type for the boundary layer.
//!
//! The formatting engine itself lives in the `bidifmt` crate; backends
//! and tools only need the contracts defined here.

pub mod error;
pub mod traits;

pub use error::{BidiError, Result};
pub use traits::{AlwaysLtr, AlwaysRtl, DirectionEstimator};
pub use types::Direction;

/// The data structures shared across the formatting pipeline
pub mod types {
    use std::fmt;
    use std::str::FromStr;

    use crate::error::BidiError;

    /// Left-to-right mark (U+200E), resets neutrals to LTR
    pub const LRM: char = '\u{200E}';
    /// Right-to-left mark (U+200F), resets neutrals to RTL
    pub const RLM: char = '\u{200F}';
    /// Left-to-right embedding opener (U+202A)
    pub const LRE: char = '\u{202A}';
    /// Right-to-left embedding opener (U+202B)
    pub const RLE: char = '\u{202B}';
    /// Pop directional formatting (U+202C), closes an embedding
    pub const PDF: char = '\u{202C}';

    /// Which way the text flows
    ///
    /// There is no "unknown" variant: absence of direction (a string with
    /// no strongly-directional character) is modeled as `Option::None`
    /// wherever it can occur.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Direction {
        LeftToRight,
        RightToLeft,
    }

    impl Direction {
        /// True for [`Direction::RightToLeft`]
        pub const fn is_rtl(self) -> bool {
            matches!(self, Direction::RightToLeft)
        }

        /// The other base direction
        pub const fn opposite(self) -> Self {
            match self {
                Direction::LeftToRight => Direction::RightToLeft,
                Direction::RightToLeft => Direction::LeftToRight,
            }
        }

        /// The value an HTML `dir` attribute would carry
        pub const fn attr_value(self) -> &'static str {
            match self {
                Direction::LeftToRight => "ltr",
                Direction::RightToLeft => "rtl",
            }
        }

        /// The zero-width reset mark for this direction (LRM or RLM)
        pub const fn mark(self) -> &'static str {
            match self {
                Direction::LeftToRight => "\u{200E}",
                Direction::RightToLeft => "\u{200F}",
            }
        }

        /// The embedding opener for this direction (LRE or RLE)
        pub const fn embedding_open(self) -> char {
            match self {
                Direction::LeftToRight => LRE,
                Direction::RightToLeft => RLE,
            }
        }
    }

    impl fmt::Display for Direction {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.attr_value())
        }
    }

    impl FromStr for Direction {
        type Err = BidiError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s.eq_ignore_ascii_case("ltr") {
                Ok(Direction::LeftToRight)
            } else if s.eq_ignore_ascii_case("rtl") {
                Ok(Direction::RightToLeft)
            } else {
                Err(BidiError::InvalidDirection(s.to_string()))
            }
        }
    }
}
