//! Output formatting functions.

pub mod json;
pub mod pretty;

use dynamore_core::{ReadOutcome, Verb};

use crate::cli::OutputFormat;

/// Format the outcome of `verb` for output.
pub fn format_output(verb: Verb, outcome: &ReadOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(outcome),
        OutputFormat::Pretty => pretty::format_outcome(verb, outcome),
    }
}
