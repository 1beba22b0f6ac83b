//! Purpose: Library crate converting XML documents to canonical JSON and
//! comparing the result against expected JSON with a readable diff report.
//! Exports: `core` (conversion, comparison, reporting, errors) and `api`
//! (the stable facade intended for transport-layer callers).
//! Role: Pure in-memory pipeline; callers own transport, timeouts, and I/O.
//! Invariants: Every entry point is a pure function of its string inputs.
//! Invariants: Parse failures surface as outcome data, never as panics.
pub mod api;
pub mod core;
