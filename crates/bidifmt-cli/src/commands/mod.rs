//! Command implementations and shared plumbing

pub mod batch;
pub mod inspect;
pub mod wrap;

use std::io::Read;

use bidifmt::heuristics::{AlwaysLtr, AlwaysRtl, FirstStrong};
use bidifmt::{locale, Direction, DirectionEstimator, Result};

use crate::cli::Estimate;

/// Resolve the context direction from either `--direction` or `--locale`
pub(crate) fn context_direction(direction: &str, locale_tag: Option<&str>) -> Result<Direction> {
    match locale_tag {
        Some(tag) => locale::direction_for_locale(tag),
        None => direction.parse(),
    }
}

pub(crate) fn estimator_for(estimate: Estimate) -> Box<dyn DirectionEstimator> {
    match estimate {
        Estimate::FirstStrong => Box::new(FirstStrong::default()),
        Estimate::Ltr => Box::new(AlwaysLtr),
        Estimate::Rtl => Box::new(AlwaysRtl),
    }
}

/// Positional text argument, or stdin when omitted
///
/// A single trailing newline from piped input is dropped so that
/// `echo text | bidifmt wrap` does not shield a phantom final line.
pub(crate) fn read_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            if buffer.ends_with('\n') {
                buffer.pop();
                if buffer.ends_with('\r') {
                    buffer.pop();
                }
            }
            Ok(buffer)
        }
    }
}
