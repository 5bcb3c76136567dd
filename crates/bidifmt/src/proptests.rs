use proptest::prelude::*;

use bidifmt_core::types::Direction;

use crate::escape::escape_html;
use crate::formatter::BidiFormatter;
use crate::heuristics::{AlwaysLtr, AlwaysRtl, FirstStrong};
use crate::resolver;

const LRM: char = '\u{200E}';
const RLM: char = '\u{200F}';
const RLE: char = '\u{202B}';
const PDF: char = '\u{202C}';

// Strategy note: strings are drawn from Latin, Hebrew, digits, and
// punctuation so the inputs never contain bidi control characters of
// their own; any mark in the output was put there by the formatter.

// Property: neutral or matching text in a matching context passes
// through unchanged, regardless of flags
proptest! {
    #[test]
    fn prop_matching_text_passes_through(s in "[a-zA-Z0-9 .,:;!?]{0,40}") {
        let fmt = BidiFormatter::new(Direction::LeftToRight);
        prop_assert_eq!(fmt.unicode_wrap_with(&s, &AlwaysLtr, true), s.clone());

        let no_reset = BidiFormatter::builder(Direction::LeftToRight)
            .stereo_reset(false)
            .build();
        prop_assert_eq!(no_reset.unicode_wrap_with(&s, &AlwaysLtr, false), s);
    }
}

// Property: isolate=false always suppresses the trailing mark
proptest! {
    #[test]
    fn prop_no_isolation_never_appends_mark(s in "[a-zA-Z0-9 .,א-ת]{0,40}") {
        for context in [Direction::LeftToRight, Direction::RightToLeft] {
            let fmt = BidiFormatter::new(context);
            let out = fmt.unicode_wrap_with(&s, &FirstStrong::default(), false);
            prop_assert!(!out.ends_with(LRM) && !out.ends_with(RLM));

            let out = fmt.span_wrap_with(&s, &FirstStrong::default(), false);
            prop_assert!(!out.ends_with(LRM) && !out.ends_with(RLM));
        }
    }
}

// Property: stereo_reset=false always suppresses the leading mark
proptest! {
    #[test]
    fn prop_no_stereo_reset_never_prepends_mark(s in "[a-zA-Z0-9 .,א-ת]{0,40}") {
        for context in [Direction::LeftToRight, Direction::RightToLeft] {
            let fmt = BidiFormatter::builder(context).stereo_reset(false).build();
            let out = fmt.unicode_wrap_with(&s, &FirstStrong::default(), true);
            prop_assert!(!out.starts_with(LRM) && !out.starts_with(RLM));

            let out = fmt.span_wrap_with(&s, &FirstStrong::default(), true);
            prop_assert!(!out.starts_with(LRM) && !out.starts_with(RLM));
        }
    }
}

// Property: wrapping uniform RTL text in an LTR context produces exactly
// mark + embedding + text + pop + mark, so stripping the controls
// restores the original
proptest! {
    #[test]
    fn prop_embedding_round_trip(s in "[א-ת]{1,20}") {
        let fmt = BidiFormatter::new(Direction::LeftToRight);
        let out = fmt.unicode_wrap_with(&s, &AlwaysRtl, true);
        prop_assert_eq!(&out, &format!("{LRM}{RLE}{s}{PDF}{LRM}"));

        let stripped: String = out
            .chars()
            .filter(|ch| !matches!(*ch, LRM | RLM | RLE | PDF | '\u{202A}'))
            .collect();
        prop_assert_eq!(stripped, s);
    }
}

// Property: wrapping is deterministic
proptest! {
    #[test]
    fn prop_wrap_deterministic(s in "[a-zA-Z0-9 .,א-ת&<>]{0,40}") {
        for context in [Direction::LeftToRight, Direction::RightToLeft] {
            let fmt = BidiFormatter::new(context);
            prop_assert_eq!(fmt.unicode_wrap(&s), fmt.unicode_wrap(&s));
            prop_assert_eq!(fmt.span_wrap(&s), fmt.span_wrap(&s));
        }
    }
}

// Property: dir_attr is empty exactly when the overall direction matches
// the context
proptest! {
    #[test]
    fn prop_dir_attr_empty_iff_matching(s in "[a-zA-Z0-9 .,א-ת]{0,40}") {
        let estimator = FirstStrong::default();
        for context in [Direction::LeftToRight, Direction::RightToLeft] {
            let fmt = BidiFormatter::new(context);
            let attr = fmt.dir_attr_with(&s, &estimator);
            let matches = resolver::overall_direction(&s, &estimator) == context;
            prop_assert_eq!(attr.is_empty(), matches);
        }
    }
}

// Property: escaped output never contains raw markup characters
proptest! {
    #[test]
    fn prop_escape_removes_markup_chars(s in "[a-z&<> ]{0,40}") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }
}

// Property: entry/exit agree with a manual strong-character scan
proptest! {
    #[test]
    fn prop_edges_match_manual_scan(s in "[a-z0-9 .א-ת]{0,40}") {
        let manual_entry = s.chars().filter_map(resolver::strong_direction).next();
        let manual_exit = s.chars().filter_map(resolver::strong_direction).last();
        prop_assert_eq!(resolver::entry_direction(&s), manual_entry);
        prop_assert_eq!(resolver::exit_direction(&s), manual_exit);
    }
}
