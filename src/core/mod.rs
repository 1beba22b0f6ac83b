// Core modules implementing conversion, comparison, reporting, and error modeling.
pub mod compare;
pub mod error;
pub mod json;
pub mod pipeline;
pub mod report;
pub mod validate;
pub mod xml;
