//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bidifmt - bidi-safe text wrapping from the command line
#[derive(Parser, Debug)]
#[command(name = "bidifmt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wrap text for safe display inside a known-direction context
    #[command(alias = "w")]
    Wrap(WrapArgs),

    /// Show how a string classifies against a context direction
    #[command(alias = "i")]
    Inspect(InspectArgs),

    /// Process multiple wrap jobs from a JSONL stream
    Batch(BatchArgs),
}

/// Arguments for the wrap command
#[derive(Parser, Debug)]
pub struct WrapArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Context direction: ltr, rtl
    #[arg(short = 'd', long = "direction", default_value = "ltr", conflicts_with = "locale")]
    pub direction: String,

    /// Derive the context direction from a BCP 47 locale tag
    #[arg(short = 'l', long = "locale")]
    pub locale: Option<String>,

    /// Output encoding: unicode control characters or HTML markup
    #[arg(short = 'O', long = "format", default_value = "unicode")]
    pub format: WrapFormat,

    /// Overall-direction estimator
    #[arg(long = "estimate", default_value = "first-strong")]
    pub estimate: Estimate,

    /// Do not append a trailing reset mark
    #[arg(long = "no-isolate")]
    pub no_isolate: bool,

    /// Do not prepend a leading reset mark
    #[arg(long = "no-stereo-reset")]
    pub no_stereo_reset: bool,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Input text (reads from stdin if omitted)
    pub text: Option<String>,

    /// Context direction: ltr, rtl
    #[arg(short = 'd', long = "direction", default_value = "ltr", conflicts_with = "locale")]
    pub direction: String,

    /// Derive the context direction from a BCP 47 locale tag
    #[arg(short = 'l', long = "locale")]
    pub locale: Option<String>,

    /// Overall-direction estimator
    #[arg(long = "estimate", default_value = "first-strong")]
    pub estimate: Estimate,

    /// Emit a single JSON object instead of human-readable lines
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one job per line, stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Silent mode (suppress the run summary)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Supported wrap encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum WrapFormat {
    /// Plain text with embedded control characters
    Unicode,
    /// HTML markup (input is escaped)
    Span,
}

impl WrapFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unicode => "unicode",
            Self::Span => "span",
        }
    }
}

/// Overall-direction estimation policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Estimate {
    /// First strongly-directional character wins, LTR fallback
    FirstStrong,
    /// Force LTR interpretation
    Ltr,
    /// Force RTL interpretation
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrap_with_flags() {
        let cli = Cli::try_parse_from([
            "bidifmt",
            "wrap",
            "-d",
            "rtl",
            "-O",
            "span",
            "--estimate",
            "ltr",
            "--no-isolate",
            "hello",
        ])
        .unwrap();
        match cli.command {
            Commands::Wrap(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert_eq!(args.direction, "rtl");
                assert_eq!(args.format, WrapFormat::Span);
                assert_eq!(args.estimate, Estimate::Ltr);
                assert!(args.no_isolate);
                assert!(!args.no_stereo_reset);
            }
            other => panic!("expected wrap, got {other:?}"),
        }
    }

    #[test]
    fn wrap_alias_and_defaults() {
        let cli = Cli::try_parse_from(["bidifmt", "w", "text"]).unwrap();
        match cli.command {
            Commands::Wrap(args) => {
                assert_eq!(args.direction, "ltr");
                assert_eq!(args.format, WrapFormat::Unicode);
                assert_eq!(args.estimate, Estimate::FirstStrong);
            }
            other => panic!("expected wrap, got {other:?}"),
        }
    }

    #[test]
    fn direction_and_locale_conflict() {
        assert!(
            Cli::try_parse_from(["bidifmt", "wrap", "-d", "rtl", "-l", "he", "x"]).is_err()
        );
    }

    #[test]
    fn parses_inspect_json() {
        let cli = Cli::try_parse_from(["bidifmt", "i", "--json", "-l", "ar", "x"]).unwrap();
        match cli.command {
            Commands::Inspect(args) => {
                assert!(args.json);
                assert_eq!(args.locale.as_deref(), Some("ar"));
            }
            other => panic!("expected inspect, got {other:?}"),
        }
    }

    #[test]
    fn parses_batch() {
        let cli = Cli::try_parse_from(["bidifmt", "batch", "-i", "jobs.jsonl", "-q"]).unwrap();
        match cli.command {
            Commands::Batch(args) => {
                assert!(args.quiet);
                assert!(args.input.is_some());
            }
            other => panic!("expected batch, got {other:?}"),
        }
    }
}
