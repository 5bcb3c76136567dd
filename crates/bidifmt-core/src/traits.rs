//! The estimator contract that keeps direction guessing pluggable
//!
//! Deciding the overall direction of an arbitrary string is a heuristic
//! problem, and different hosts want different answers. The formatter
//! never hardcodes one: it consumes anything implementing
//! [`DirectionEstimator`], so a caller can force an interpretation, plug
//! in a locale-aware guesser, or keep the shipped first-strong default.
//!
//! Estimators must be total (return a concrete direction even for empty
//! or neutral text) and stateless, so a formatter holding one stays safe
//! to share across threads.

use crate::types::Direction;

/// A pure guess at the overall direction of a piece of text
pub trait DirectionEstimator: Send + Sync {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str {
        "custom"
    }

    /// Estimate the overall direction of `text`
    ///
    /// Must return a concrete direction for every input, including the
    /// empty string; the fallback policy is the estimator's business.
    fn estimate(&self, text: &str) -> Direction;
}

impl<F> DirectionEstimator for F
where
    F: Fn(&str) -> Direction + Send + Sync,
{
    fn estimate(&self, text: &str) -> Direction {
        self(text)
    }
}

/// Ignores the text and always answers LTR
///
/// Useful for callers who want to force an interpretation, and for tests
/// that need a deterministic estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysLtr;

impl DirectionEstimator for AlwaysLtr {
    fn name(&self) -> &'static str {
        "always-ltr"
    }

    fn estimate(&self, _text: &str) -> Direction {
        Direction::LeftToRight
    }
}

/// Ignores the text and always answers RTL
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRtl;

impl DirectionEstimator for AlwaysRtl {
    fn name(&self) -> &'static str {
        "always-rtl"
    }

    fn estimate(&self, _text: &str) -> Direction {
        Direction::RightToLeft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_estimators_ignore_content() {
        assert_eq!(AlwaysLtr.estimate("\u{05e0}\u{05e1}"), Direction::LeftToRight);
        assert_eq!(AlwaysRtl.estimate("abba"), Direction::RightToLeft);
        assert_eq!(AlwaysLtr.estimate(""), Direction::LeftToRight);
    }

    #[test]
    fn closures_are_estimators() {
        let fixed = |_: &str| Direction::RightToLeft;
        let boxed: Box<dyn DirectionEstimator> = Box::new(fixed);
        assert_eq!(boxed.estimate("anything"), Direction::RightToLeft);
        assert_eq!(boxed.name(), "custom");
    }
}
