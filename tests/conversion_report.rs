//! Purpose: End-to-end coverage for the conversion-and-comparison pipeline.
//! Exports: Integration tests only.
//! Role: Verify the report contract a transport caller relies on.
//! Invariants: Scenarios mirror the documented person/company payloads.
//! Invariants: Assertions target report text and outcome shape, not
//! internal representations.

use crossform::api::{convert_and_report, ConversionOutcome, PREVIEW_MAX_LEN};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn success_report(outcome: ConversionOutcome) -> String {
    match outcome {
        ConversionOutcome::Success { report, .. } => report,
        other => panic!("expected Success, got {other:?}"),
    }
}

#[test]
fn matching_person_produces_match_report() {
    init_tracing();
    let report = success_report(convert_and_report(
        "<person><name>John</name><age>30</age></person>",
        r#"{"name":"John","age":"30"}"#,
    ));
    assert!(report.starts_with("# XML to JSON Conversion and Comparison Report"));
    assert!(report.contains("Comparison Result: MATCH"));
    assert!(report.contains("## Converted JSON Preview"));
    assert!(report.contains("## Provided JSON Preview"));
}

#[test]
fn differing_person_report_names_both_mismatched_fields() {
    init_tracing();
    let report = success_report(convert_and_report(
        "<person><name>John</name><age>30</age></person>",
        r#"{"name":"Jane","age":"25"}"#,
    ));
    assert!(report.contains("DIFFERENCES FOUND"));
    assert!(report.contains("field \"name\": expected \"Jane\", found \"John\""));
    assert!(report.contains("field \"age\": expected \"25\", found \"30\""));
}

#[test]
fn company_with_employee_array_matches() {
    init_tracing();
    let xml = "<company><employees>\
               <employee><name>John</name><department>IT</department></employee>\
               <employee><name>Jane</name><department>HR</department></employee>\
               </employees></company>";
    let json = r#"{"employees":{"employee":[
        {"name":"John","department":"IT"},
        {"name":"Jane","department":"HR"}
    ]}}"#;
    let report = success_report(convert_and_report(xml, json));
    assert!(report.contains("Comparison Result: MATCH"));
}

#[test]
fn employee_array_comparison_ignores_order() {
    init_tracing();
    let xml = "<company><employees>\
               <employee><name>John</name><department>IT</department></employee>\
               <employee><name>Jane</name><department>HR</department></employee>\
               </employees></company>";
    let json = r#"{"employees":{"employee":[
        {"name":"Jane","department":"HR"},
        {"name":"John","department":"IT"}
    ]}}"#;
    let report = success_report(convert_and_report(xml, json));
    assert!(report.contains("Comparison Result: MATCH"));
}

#[test]
fn empty_xml_is_rejected_without_invoking_conversion() {
    init_tracing();
    match convert_and_report("", r#"{"name":"John"}"#) {
        ConversionOutcome::Failure { message, cause } => {
            assert_eq!(message, "Invalid input: XML content cannot be empty");
            assert!(cause.is_none());
        }
        other => panic!("expected Failure, got {other:?}"),
    }
}

#[test]
fn non_xml_payload_is_rejected_with_a_validation_message() {
    init_tracing();
    match convert_and_report("hello world", r#"{"a":1}"#) {
        ConversionOutcome::Failure { message, .. } => {
            assert_eq!(message, "Invalid input: content does not appear to be XML");
        }
        other => panic!("expected Failure, got {other:?}"),
    }
}

#[test]
fn long_payload_previews_are_truncated_with_marker() {
    init_tracing();
    let mut xml = String::from("<items>");
    let mut fields = Vec::new();
    for index in 0..200 {
        xml.push_str(&format!("<item>value number {index}</item>"));
        fields.push(format!("\"value number {index}\""));
    }
    xml.push_str("</items>");
    let json = format!("{{\"item\":[{}]}}", fields.join(","));

    let report = success_report(convert_and_report(&xml, &json));
    assert!(report.contains("... (truncated for display)"));
    // Each fenced preview body stays within the limit plus the marker.
    for section in report.split("```json\n").skip(1) {
        let body = section.split("\n```").next().unwrap_or("");
        assert!(body.chars().count() <= PREVIEW_MAX_LEN + "\n... (truncated for display)".chars().count());
    }
}

#[test]
fn success_carries_canonical_compact_payloads() {
    init_tracing();
    match convert_and_report(
        "<person><name>John</name></person>",
        "{ \"name\" : \"John\" }",
    ) {
        ConversionOutcome::Success {
            converted_json,
            provided_json,
            ..
        } => {
            assert_eq!(converted_json, r#"{"name":"John"}"#);
            assert_eq!(provided_json, r#"{"name":"John"}"#);
        }
        other => panic!("expected Success, got {other:?}"),
    }
}
