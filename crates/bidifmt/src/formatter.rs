//! The formatting decision engine
//!
//! A [`BidiFormatter`] is an immutable configuration value: a context
//! direction plus the `stereo_reset` flag. Every operation is a pure
//! function of that configuration and its arguments, so one formatter
//! can serve any number of threads.
//!
//! The wrap decision runs over four independent observations of the
//! input - context direction, overall-direction match, entry-edge match,
//! exit-edge match - crossed with two flags:
//!
//! - `stereo_reset` guards the **start** of the output against unknown
//!   preceding content (an embedding opener is itself a weak character
//!   and can be perturbed by what comes before it).
//! - `isolate` (per call) guards **following** content against the
//!   output's trailing directionality.
//!
//! When the overall direction opposes the context, the output is wrapped
//! in an embedding and both edges are opposing by construction, so both
//! guards fire subject to their flag. Otherwise each guard fires only if
//! the text's actual entry/exit character opposes the context.

use bidifmt_core::{
    error::Result,
    traits::DirectionEstimator,
    types::{Direction, PDF},
};

use crate::escape::escape_html;
use crate::heuristics::FirstStrong;
use crate::locale;
use crate::resolver;

/// Builder for [`BidiFormatter`]
#[derive(Debug, Clone)]
pub struct BidiFormatterBuilder {
    context: Direction,
    stereo_reset: bool,
}

impl BidiFormatterBuilder {
    pub fn new(context: Direction) -> Self {
        Self {
            context,
            stereo_reset: true,
        }
    }

    /// Whether a leading reset mark may be emitted (default: true)
    pub fn stereo_reset(mut self, enabled: bool) -> Self {
        self.stereo_reset = enabled;
        self
    }

    pub fn build(self) -> BidiFormatter {
        BidiFormatter {
            context: self.context,
            stereo_reset: self.stereo_reset,
            default_estimator: FirstStrong::default(),
        }
    }
}

/// Formats text runs for safe display inside a known-direction context
#[derive(Debug, Clone)]
pub struct BidiFormatter {
    context: Direction,
    stereo_reset: bool,
    default_estimator: FirstStrong,
}

impl BidiFormatter {
    /// Formatter with default configuration for the given context
    pub fn new(context: Direction) -> Self {
        Self::builder(context).build()
    }

    pub fn builder(context: Direction) -> BidiFormatterBuilder {
        BidiFormatterBuilder::new(context)
    }

    /// Formatter whose context direction derives from a BCP 47 locale tag
    pub fn for_locale(tag: &str) -> Result<Self> {
        Ok(Self::new(locale::direction_for_locale(tag)?))
    }

    /// The ambient paragraph direction this formatter targets
    pub fn context(&self) -> Direction {
        self.context
    }

    pub fn is_rtl_context(&self) -> bool {
        self.context.is_rtl()
    }

    pub fn stereo_reset(&self) -> bool {
        self.stereo_reset
    }

    /// The reset mark matching the context direction (LRM or RLM)
    pub fn mark(&self) -> &'static str {
        self.context.mark()
    }

    /// The visual side where text flow begins for this context
    pub fn start_edge(&self) -> &'static str {
        if self.context.is_rtl() {
            "right"
        } else {
            "left"
        }
    }

    /// The visual side where text flow ends for this context
    pub fn end_edge(&self) -> &'static str {
        if self.context.is_rtl() {
            "left"
        } else {
            "right"
        }
    }

    /// Whether the text's overall direction is RTL, per the default
    /// estimator; the context direction plays no part
    pub fn is_rtl(&self, text: &str) -> bool {
        self.is_rtl_with(text, &self.default_estimator)
    }

    pub fn is_rtl_with(&self, text: &str, estimator: &dyn DirectionEstimator) -> bool {
        resolver::overall_direction(text, estimator).is_rtl()
    }

    /// `"ltr"` or `"rtl"`, the textual form of the overall direction
    pub fn dir_attr_value(&self, text: &str) -> &'static str {
        self.dir_attr_value_with(text, &self.default_estimator)
    }

    pub fn dir_attr_value_with(
        &self,
        text: &str,
        estimator: &dyn DirectionEstimator,
    ) -> &'static str {
        resolver::overall_direction(text, estimator).attr_value()
    }

    /// `dir="ltr"` / `dir="rtl"` when the text disagrees with the
    /// context, empty otherwise
    ///
    /// Only emitting the attribute on disagreement keeps markup free of
    /// redundant direction declarations.
    pub fn dir_attr(&self, text: &str) -> &'static str {
        self.dir_attr_with(text, &self.default_estimator)
    }

    pub fn dir_attr_with(&self, text: &str, estimator: &dyn DirectionEstimator) -> &'static str {
        let overall = resolver::overall_direction(text, estimator);
        if overall == self.context {
            ""
        } else {
            match overall {
                Direction::LeftToRight => "dir=\"ltr\"",
                Direction::RightToLeft => "dir=\"rtl\"",
            }
        }
    }

    /// Reset mark to place before `text`, or empty
    ///
    /// Fires when the estimated overall direction opposes the context, or
    /// when the entry edge carries a strong character opposing it.
    pub fn mark_before(&self, text: &str) -> &'static str {
        self.mark_before_with(text, &self.default_estimator)
    }

    pub fn mark_before_with(
        &self,
        text: &str,
        estimator: &dyn DirectionEstimator,
    ) -> &'static str {
        let overall = resolver::overall_direction(text, estimator);
        self.edge_mark(overall, resolver::entry_direction(text))
    }

    /// Reset mark to place after `text`, or empty
    pub fn mark_after(&self, text: &str) -> &'static str {
        self.mark_after_with(text, &self.default_estimator)
    }

    pub fn mark_after_with(&self, text: &str, estimator: &dyn DirectionEstimator) -> &'static str {
        let overall = resolver::overall_direction(text, estimator);
        self.edge_mark(overall, resolver::exit_direction(text))
    }

    fn edge_mark(&self, overall: Direction, edge: Option<Direction>) -> &'static str {
        if overall != self.context || edge.is_some_and(|dir| dir != self.context) {
            self.context.mark()
        } else {
            ""
        }
    }

    /// Wrap `text` with Unicode control characters; default estimator,
    /// trailing isolation on
    pub fn unicode_wrap(&self, text: &str) -> String {
        self.unicode_wrap_with(text, &self.default_estimator, true)
    }

    /// Wrap `text` with Unicode control characters
    ///
    /// When the estimated overall direction opposes the context the text
    /// is enclosed in an LRE/RLE … PDF embedding; reset marks are added
    /// per the `stereo_reset` configuration and the `isolate` argument.
    pub fn unicode_wrap_with(
        &self,
        text: &str,
        estimator: &dyn DirectionEstimator,
        isolate: bool,
    ) -> String {
        let overall = resolver::overall_direction(text, estimator);
        let needs_wrap = overall != self.context;
        log::debug!(
            "unicode_wrap: context={} overall={} wrap={}",
            self.context,
            overall,
            needs_wrap
        );

        let mut out = String::with_capacity(text.len() + 8);
        if self.wants_leading_mark(text, needs_wrap) {
            out.push_str(self.mark());
        }
        if needs_wrap {
            out.push(overall.embedding_open());
            out.push_str(text);
            out.push(PDF);
        } else {
            out.push_str(text);
        }
        if self.wants_trailing_mark(text, needs_wrap, isolate) {
            out.push_str(self.mark());
        }
        out
    }

    /// Wrap `text` as HTML markup; default estimator, isolation on
    pub fn span_wrap(&self, text: &str) -> String {
        self.span_wrap_with(text, &self.default_estimator, true)
    }

    /// Wrap `text` as HTML markup
    ///
    /// The input is HTML-escaped on every path. When the overall
    /// direction opposes the context the escaped text is enclosed in
    /// `<span dir="…">…</span>`; reset marks are added exactly as for
    /// [`BidiFormatter::unicode_wrap_with`].
    pub fn span_wrap_with(
        &self,
        text: &str,
        estimator: &dyn DirectionEstimator,
        isolate: bool,
    ) -> String {
        let overall = resolver::overall_direction(text, estimator);
        let needs_wrap = overall != self.context;
        log::debug!(
            "span_wrap: context={} overall={} wrap={}",
            self.context,
            overall,
            needs_wrap
        );
        let escaped = escape_html(text);

        let mut out = String::with_capacity(escaped.len() + 24);
        if self.wants_leading_mark(text, needs_wrap) {
            out.push_str(self.mark());
        }
        if needs_wrap {
            out.push_str("<span dir=\"");
            out.push_str(overall.attr_value());
            out.push_str("\">");
            out.push_str(&escaped);
            out.push_str("</span>");
        } else {
            out.push_str(&escaped);
        }
        if self.wants_trailing_mark(text, needs_wrap, isolate) {
            out.push_str(self.mark());
        }
        out
    }

    // A wrapped body opposes the context on both edges by construction;
    // an unwrapped one is judged by its actual edge characters. Entry and
    // exit come from the raw text either way.
    fn wants_leading_mark(&self, text: &str, needs_wrap: bool) -> bool {
        self.stereo_reset
            && (needs_wrap
                || resolver::entry_direction(text).is_some_and(|dir| dir != self.context))
    }

    fn wants_trailing_mark(&self, text: &str, needs_wrap: bool, isolate: bool) -> bool {
        isolate
            && (needs_wrap
                || resolver::exit_direction(text).is_some_and(|dir| dir != self.context))
    }
}
