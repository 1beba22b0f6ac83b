//! Purpose: Stable facade over the core conversion/comparison pipeline.
//! Exports: the pipeline entry point, outcome types, both leaf components,
//! input checks, errors, and the preview length limit.
//! Role: The import surface transport-layer callers should depend on.
//! Invariants: Anything not re-exported here is internal and may change.

pub use crate::core::compare::{compare, ComparisonOutcome};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::pipeline::{convert_and_report, ConversionOutcome};
pub use crate::core::report::{truncate_for_display, PREVIEW_MAX_LEN};
pub use crate::core::validate::{check_json_content, check_xml_content, ContentCheck};
pub use crate::core::xml::convert as convert_xml;
