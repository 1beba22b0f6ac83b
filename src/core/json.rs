//! Purpose: Provide the internal JSON decode/encode entrypoints.
//! Exports: `parse_value`, `canonical_string`, `pretty_string`.
//! Role: Codec boundary that centralizes serde_json usage details.
//! Invariants: Canonical output is compact and preserves key order as
//! encountered (the crate enables serde_json's `preserve_order` feature).
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde_json::Value;

pub(crate) fn parse_value(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn canonical_string(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

pub(crate) fn pretty_string(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| canonical_string(value))
}
