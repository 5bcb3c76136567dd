//! Directionality estimators shipped with the crate
//!
//! The formatter consumes any [`DirectionEstimator`]; these are the
//! stock policies. `AlwaysLtr`/`AlwaysRtl` force an interpretation,
//! [`FirstStrong`] implements the common "first strong character wins"
//! rule used as the default when a caller supplies nothing.

pub use bidifmt_core::traits::{AlwaysLtr, AlwaysRtl};

use bidifmt_core::{traits::DirectionEstimator, types::Direction};

use crate::resolver;

/// First strong character wins; `fallback` when the text has none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstStrong {
    fallback: Direction,
}

impl FirstStrong {
    pub const fn new(fallback: Direction) -> Self {
        Self { fallback }
    }

    pub const fn fallback(&self) -> Direction {
        self.fallback
    }
}

impl Default for FirstStrong {
    /// First-strong with an LTR fallback, the conventional default
    fn default() -> Self {
        Self::new(Direction::LeftToRight)
    }
}

impl DirectionEstimator for FirstStrong {
    fn name(&self) -> &'static str {
        "first-strong"
    }

    fn estimate(&self, text: &str) -> Direction {
        resolver::entry_direction(text).unwrap_or(self.fallback)
    }
}
