// Cheap content checks run before any parser sees the input.
// These catch obviously wrong payloads with friendlier messages than a
// parser error; well-formedness is still the parsers' job.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContentCheck {
    Valid,
    Invalid(String),
}

impl ContentCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, ContentCheck::Valid)
    }

    pub fn message(&self) -> &str {
        match self {
            ContentCheck::Valid => "valid",
            ContentCheck::Invalid(message) => message,
        }
    }
}

pub fn check_xml_content(text: &str) -> ContentCheck {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ContentCheck::Invalid("XML content cannot be empty".to_string());
    }
    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        ContentCheck::Valid
    } else if trimmed.starts_with('<') {
        ContentCheck::Invalid("XML appears to be incomplete".to_string())
    } else {
        ContentCheck::Invalid("content does not appear to be XML".to_string())
    }
}

pub fn check_json_content(text: &str) -> ContentCheck {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ContentCheck::Invalid("JSON content cannot be empty".to_string());
    }
    match trimmed.chars().next() {
        Some('{') | Some('[') => ContentCheck::Valid,
        _ => ContentCheck::Invalid("content does not appear to be JSON".to_string()),
    }
}
