//! Batch command implementation
//!
//! Processes wrap jobs from a JSONL stream: one job object per input
//! line, one result object per output line. A malformed line produces an
//! error result but never aborts the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use bidifmt::heuristics::FirstStrong;
use bidifmt::{resolver, BidiError, BidiFormatter, Result};
use serde::{Deserialize, Serialize};

use crate::cli::BatchArgs;
use crate::commands::context_direction;

/// One wrap request, one line of input
#[derive(Debug, Deserialize)]
struct BatchJob {
    /// Text to wrap
    text: String,
    /// Context direction, "ltr" or "rtl" (default "ltr")
    #[serde(default)]
    context: Option<String>,
    /// BCP 47 locale tag; overrides `context` when present
    #[serde(default)]
    locale: Option<String>,
    /// Output encoding, "unicode" or "span" (default "unicode")
    #[serde(default)]
    format: Option<String>,
    /// Append the trailing reset mark (default true)
    #[serde(default)]
    isolate: Option<bool>,
    /// Allow the leading reset mark (default true)
    #[serde(default)]
    stereo_reset: Option<bool>,
}

/// One result, one line of output
#[derive(Debug, Serialize)]
struct BatchResult {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wrapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchResult {
    fn failure(error: String) -> Self {
        Self {
            status: "error",
            output: None,
            direction: None,
            wrapped: None,
            error: Some(error),
        }
    }
}

fn process_line(line: &str) -> Result<BatchResult> {
    let job: BatchJob = serde_json::from_str(line)
        .map_err(|err| BidiError::Batch(format!("invalid job: {err}")))?;

    let context = context_direction(
        job.context.as_deref().unwrap_or("ltr"),
        job.locale.as_deref(),
    )?;
    let formatter = BidiFormatter::builder(context)
        .stereo_reset(job.stereo_reset.unwrap_or(true))
        .build();
    let estimator = FirstStrong::default();
    let isolate = job.isolate.unwrap_or(true);

    let output = match job.format.as_deref().unwrap_or("unicode") {
        "unicode" => formatter.unicode_wrap_with(&job.text, &estimator, isolate),
        "span" => formatter.span_wrap_with(&job.text, &estimator, isolate),
        other => {
            return Err(BidiError::Batch(format!(
                "unknown format {other:?} (expected \"unicode\" or \"span\")"
            )))
        }
    };
    let overall = resolver::overall_direction(&job.text, &estimator);

    Ok(BatchResult {
        status: "ok",
        output: Some(output),
        direction: Some(overall.attr_value()),
        wrapped: Some(overall != context),
        error: None,
    })
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut job_count = 0usize;
    let mut error_count = 0usize;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;

        let result = match process_line(&line) {
            Ok(result) => result,
            Err(err) => {
                error_count += 1;
                log::warn!("job on line {} failed: {err}", line_num + 1);
                BatchResult::failure(err.to_string())
            }
        };
        println!(
            "{}",
            serde_json::to_string(&result)
                .map_err(|err| BidiError::Batch(err.to_string()))?
        );
    }

    if !args.quiet {
        eprintln!(
            "Processed {} jobs, {} succeeded, {} failed",
            job_count,
            job_count - error_count,
            error_count
        );
    }
    Ok(())
}
