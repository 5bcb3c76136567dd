//! Wrap command implementation
//!
//! Reads one piece of text, wraps it for the requested context, and
//! writes the result to stdout or a file.

use std::fs;

use bidifmt::{BidiFormatter, Result};

use crate::cli::{WrapArgs, WrapFormat};
use crate::commands::{context_direction, estimator_for, read_text};

pub fn run(args: &WrapArgs) -> Result<()> {
    let context = context_direction(&args.direction, args.locale.as_deref())?;
    let formatter = BidiFormatter::builder(context)
        .stereo_reset(!args.no_stereo_reset)
        .build();
    let estimator = estimator_for(args.estimate);
    let text = read_text(args.text.as_deref())?;

    let isolate = !args.no_isolate;
    let wrapped = match args.format {
        WrapFormat::Unicode => formatter.unicode_wrap_with(&text, estimator.as_ref(), isolate),
        WrapFormat::Span => formatter.span_wrap_with(&text, estimator.as_ref(), isolate),
    };

    log::debug!(
        "wrap: {} chars, {} context, {} output",
        text.chars().count(),
        context,
        args.format.as_str()
    );

    match &args.output_file {
        Some(path) => {
            fs::write(path, &wrapped)?;
            if !args.quiet {
                eprintln!("Wrote {} bytes to {}", wrapped.len(), path.display());
            }
        }
        None => println!("{wrapped}"),
    }
    Ok(())
}
