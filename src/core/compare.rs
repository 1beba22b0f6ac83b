//! Purpose: Structurally compare two JSON payloads with lenient semantics.
//! Exports: `compare`, `ComparisonOutcome`.
//! Role: Leaf comparator; the pipeline folds the outcome into the report.
//! Invariants: Leniency is one-directional — extra keys on the *actual*
//! side are tolerated, missing expected keys are differences.
//! Invariants: Arrays compare as multisets (order-insensitive, no extra
//! or missing elements tolerated).
//! Invariants: Parse failures become the `Error` variant naming the failing
//! side; nothing escapes this boundary as a panic or `Err`.

use serde::Serialize;
use serde_json::Value;

use crate::core::json;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ComparisonOutcome {
    Match,
    Difference(String),
    Error(String),
}

pub fn compare(expected_text: &str, actual_text: &str) -> ComparisonOutcome {
    let expected = match json::parse_value(expected_text) {
        Ok(value) => value,
        Err(err) => {
            return ComparisonOutcome::Error(format!("expected JSON failed to parse: {err}"));
        }
    };
    let actual = match json::parse_value(actual_text) {
        Ok(value) => value,
        Err(err) => {
            return ComparisonOutcome::Error(format!("actual JSON failed to parse: {err}"));
        }
    };

    let mut differences = Vec::new();
    diff_values(&expected, &actual, "", &mut differences);
    if differences.is_empty() {
        ComparisonOutcome::Match
    } else {
        ComparisonOutcome::Difference(differences.join("\n"))
    }
}

fn diff_values(expected: &Value, actual: &Value, path: &str, out: &mut Vec<String>) {
    match (expected, actual) {
        (Value::Object(expected_map), Value::Object(actual_map)) => {
            for (key, expected_value) in expected_map {
                let child = join_path(path, key);
                match actual_map.get(key) {
                    Some(actual_value) => diff_values(expected_value, actual_value, &child, out),
                    None => out.push(format!(
                        "field \"{child}\": expected {}, but was missing",
                        render(expected_value)
                    )),
                }
            }
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            let mut claimed = vec![false; actual_items.len()];
            for (index, expected_item) in expected_items.iter().enumerate() {
                let mut slot = None;
                for (candidate, actual_item) in actual_items.iter().enumerate() {
                    if !claimed[candidate] && values_equal(expected_item, actual_item) {
                        slot = Some(candidate);
                        break;
                    }
                }
                match slot {
                    Some(candidate) => claimed[candidate] = true,
                    None => out.push(format!(
                        "array \"{path}\": no match for expected element at index {index}: {}",
                        render(expected_item)
                    )),
                }
            }
            let unclaimed = claimed.iter().filter(|used| !**used).count();
            if unclaimed > 0 {
                out.push(format!(
                    "array \"{path}\": found {unclaimed} element(s) with no expected counterpart"
                ));
            }
        }
        _ => {
            if !scalars_equal(expected, actual) {
                out.push(format!(
                    "field \"{path}\": expected {}, found {}",
                    render(expected),
                    render(actual)
                ));
            }
        }
    }
}

// Equality under the same leniency rules, used for multiset matching.
fn values_equal(expected: &Value, actual: &Value) -> bool {
    let mut scratch = Vec::new();
    diff_values(expected, actual, "", &mut scratch);
    scratch.is_empty()
}

fn scalars_equal(expected: &Value, actual: &Value) -> bool {
    if expected == actual {
        return true;
    }
    // Derived JSON renders all leaf text as strings, so `"30"` and `30`
    // must reconcile when types differ.
    match (literal_form(expected), literal_form(actual)) {
        (Some(expected_text), Some(actual_text)) => expected_text == actual_text,
        _ => false,
    }
}

fn literal_form(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn render(value: &Value) -> String {
    json::canonical_string(value)
}
