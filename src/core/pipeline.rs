//! Purpose: Orchestrate validate → convert → compare → report.
//! Exports: `convert_and_report`, `ConversionOutcome`.
//! Role: The crate's single entry point for transport-layer callers.
//! Invariants: Invalid input short-circuits before the converter runs.
//! Invariants: Parse failures become `Failure` outcomes with a cause;
//! a comparison mismatch is a `Success` whose report says "not equal".
//! Invariants: No retries — every step is pure and deterministic, so a
//! retry would fail identically.

use tracing::debug;

use crate::core::compare::{self, ComparisonOutcome};
use crate::core::error::{Error, ErrorKind};
use crate::core::json;
use crate::core::report;
use crate::core::validate::{check_json_content, check_xml_content};
use crate::core::xml;

#[derive(Debug)]
pub enum ConversionOutcome {
    Success {
        converted_json: String,
        provided_json: String,
        report: String,
    },
    Failure {
        message: String,
        cause: Option<Error>,
    },
}

impl ConversionOutcome {
    /// Folds the outcome into the text a transport caller would send.
    pub fn response_text(&self) -> String {
        match self {
            ConversionOutcome::Success { report, .. } => report.clone(),
            ConversionOutcome::Failure { message, cause } => {
                let mut text = format!("## ❌ Conversion Failed\n\nError: {message}\n");
                if let Some(cause) = cause {
                    text.push_str(&format!("\nCause: {cause}\n"));
                }
                text
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }
}

pub fn convert_and_report(xml_text: &str, json_text: &str) -> ConversionOutcome {
    let xml_check = check_xml_content(xml_text);
    if !xml_check.is_valid() {
        debug!(reason = xml_check.message(), "rejected XML input");
        return ConversionOutcome::Failure {
            message: format!("Invalid input: {}", xml_check.message()),
            cause: None,
        };
    }
    let json_check = check_json_content(json_text);
    if !json_check.is_valid() {
        debug!(reason = json_check.message(), "rejected JSON input");
        return ConversionOutcome::Failure {
            message: format!("Invalid input: {}", json_check.message()),
            cause: None,
        };
    }

    let converted = match xml::convert(xml_text) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "XML conversion failed");
            return ConversionOutcome::Failure {
                message: format!("Processing error: {err}"),
                cause: Some(err),
            };
        }
    };

    // Parsing the provided JSON doubles as the validity check; re-serializing
    // canonicalizes its formatting.
    let provided = match json::parse_value(json_text) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "provided JSON failed to parse");
            let cause = Error::new(ErrorKind::JsonParse)
                .with_message("provided JSON is not valid")
                .with_position(format!("{}:{}", err.line(), err.column()))
                .with_source(err);
            return ConversionOutcome::Failure {
                message: format!("Processing error: {cause}"),
                cause: Some(cause),
            };
        }
    };

    let converted_json = json::canonical_string(&converted);
    let provided_json = json::canonical_string(&provided);
    debug!(
        converted_len = converted_json.len(),
        provided_len = provided_json.len(),
        "conversion complete"
    );

    // Provided JSON is the expected side, converted is the actual side, so
    // extra converted fields are tolerated but missing ones are not.
    let outcome = compare::compare(&provided_json, &converted_json);
    debug!(matched = matches!(outcome, ComparisonOutcome::Match), "comparison complete");

    let report = report::render(&outcome, &converted, &provided);
    ConversionOutcome::Success {
        converted_json,
        provided_json,
        report,
    }
}
