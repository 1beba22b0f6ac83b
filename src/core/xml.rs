//! Purpose: Convert well-formed XML text into a generic JSON tree.
//! Exports: `convert`.
//! Role: Leaf converter; the pipeline feeds its output to the comparator.
//! Invariants: The root element is unwrapped — the returned value is the
//! root's *contents* as an object, not `{ "<root>": ... }`.
//! Invariants: Sibling elements sharing a tag name become one array field,
//! children in document order; a unique tag name becomes a plain field.
//! Invariants: Text-only elements become verbatim strings (no coercion);
//! empty elements become `{}`; whitespace-only interstitial text is ignored.
//! Notes: Attributes map to plain string fields listed before child fields,
//! namespace prefixes stripped. Non-whitespace direct text of an element
//! that also has attributes or child elements is dropped.

use roxmltree::Document;
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};

pub fn convert(xml_text: &str) -> Result<Value, Error> {
    let doc = Document::parse(xml_text).map_err(|err| {
        let position = err.pos();
        Error::new(ErrorKind::XmlParse)
            .with_message(format!("malformed XML: {err}"))
            .with_position(format!("{}:{}", position.row, position.col))
            .with_source(err)
    })?;
    Ok(element_to_value(doc.root_element()))
}

fn element_to_value(node: roxmltree::Node) -> Value {
    let mut fields = Map::new();
    for attr in node.attributes() {
        fields.insert(attr.name().to_string(), Value::String(attr.value().to_string()));
    }

    // Group child elements by local tag name, preserving first-appearance order.
    let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
    for child in node.children().filter(|child| child.is_element()) {
        let name = child.tag_name().name().to_string();
        let converted = element_to_value(child);
        match grouped.iter_mut().find(|(tag, _)| *tag == name) {
            Some((_, members)) => members.push(converted),
            None => grouped.push((name, vec![converted])),
        }
    }

    if grouped.is_empty() && fields.is_empty() {
        let text: String = node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect();
        if text.trim().is_empty() {
            return Value::Object(Map::new());
        }
        return Value::String(text);
    }

    for (name, mut members) in grouped {
        let value = if members.len() == 1 {
            members.remove(0)
        } else {
            Value::Array(members)
        };
        fields.insert(name, value);
    }
    Value::Object(fields)
}
