//! Inspect command implementation
//!
//! Reports how a string classifies against a context direction: entry,
//! exit, and estimated overall direction, the `dir` attribute that would
//! be emitted, and which reset marks the formatter would add.

use bidifmt::{resolver, BidiFormatter, Direction, Result};
use serde_json::json;

use crate::cli::InspectArgs;
use crate::commands::{context_direction, estimator_for, read_text};

fn edge_label(edge: Option<Direction>) -> &'static str {
    match edge {
        Some(dir) => dir.attr_value(),
        None => "none",
    }
}

fn mark_label(mark: &str) -> &'static str {
    match mark {
        "\u{200E}" => "LRM",
        "\u{200F}" => "RLM",
        _ => "none",
    }
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let context = context_direction(&args.direction, args.locale.as_deref())?;
    let formatter = BidiFormatter::new(context);
    let estimator = estimator_for(args.estimate);
    let text = read_text(args.text.as_deref())?;

    let entry = resolver::entry_direction(&text);
    let exit = resolver::exit_direction(&text);
    let overall = resolver::overall_direction(&text, estimator.as_ref());
    let dir_attr = formatter.dir_attr_with(&text, estimator.as_ref());
    let mark_before = formatter.mark_before_with(&text, estimator.as_ref());
    let mark_after = formatter.mark_after_with(&text, estimator.as_ref());

    if args.json {
        let report = json!({
            "context": context.attr_value(),
            "overall": overall.attr_value(),
            "entry": entry.map(Direction::attr_value),
            "exit": exit.map(Direction::attr_value),
            "dir_attr": dir_attr,
            "mark_before": mark_label(mark_before),
            "mark_after": mark_label(mark_after),
        });
        println!("{report}");
        return Ok(());
    }

    println!("context:     {context}");
    println!("overall:     {overall} (via {})", estimator.name());
    println!("entry:       {}", edge_label(entry));
    println!("exit:        {}", edge_label(exit));
    println!(
        "dir attr:    {}",
        if dir_attr.is_empty() { "(none)" } else { dir_attr }
    );
    println!("mark before: {}", mark_label(mark_before));
    println!("mark after:  {}", mark_label(mark_after));
    Ok(())
}
