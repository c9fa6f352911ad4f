//! Failure descriptions produced by the attribute-range matcher.

use thiserror::Error;

use crate::span::{Span, SpanList};
use crate::text::AttrValue;

/// Why an attribute query over a [`RichText`](crate::RichText) was not
/// satisfied.
///
/// The `Display` output is the diagnostic shown to the test author, so each
/// variant names the key and, where relevant, the expected versus actual
/// range or value.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AttributeMismatch {
    /// No run carries the requested key anywhere in the text.
    #[error("attribute '{key}' not found in the text")]
    KeyAbsent {
        /// Key that was queried.
        key: String,
    },
    /// Runs with the key exist, but none spans the expected range exactly.
    #[error("attribute '{key}' not found at {expected}; run(s) with that key cover {found}")]
    RangeMismatch {
        /// Key that was queried.
        key: String,
        /// Exact range the caller expected.
        expected: Span,
        /// Spans actually covered by runs with the key.
        found: SpanList,
    },
    /// A run matched on key and range but carried a different value.
    #[error("attribute '{key}' at {span} has value {actual}, expected {}", accepted_values(.expected, .alternate))]
    ValueMismatch {
        /// Key that was queried.
        key: String,
        /// Span of the run whose value is reported.
        span: Span,
        /// Value the caller expected.
        expected: AttrValue,
        /// Alternate value also accepted, when one was supplied.
        alternate: Option<AttrValue>,
        /// Value actually found on the run.
        actual: AttrValue,
    },
    /// A run with the key was found where none was expected.
    #[error("attribute '{key}' expected to be absent{}; found run(s) at {found}", absence_scope(.range))]
    UnexpectedAttribute {
        /// Key that was queried.
        key: String,
        /// Range the key was expected to avoid, or `None` for anywhere.
        range: Option<Span>,
        /// Offending span(s).
        found: SpanList,
    },
}

fn accepted_values(expected: &AttrValue, alternate: &Option<AttrValue>) -> String {
    alternate.as_ref().map_or_else(
        || expected.to_string(),
        |alt| format!("{expected} or {alt}"),
    )
}

fn absence_scope(range: &Option<Span>) -> String {
    range
        .as_ref()
        .map_or_else(String::new, |span| format!(" in {span}"))
}
