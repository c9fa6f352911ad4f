//! Attribute-range matching over rich text values.
//!
//! Each operation is a pure function returning `Ok(())` when the predicate
//! holds and an [`AttributeMismatch`] otherwise. The error's `Display` output
//! is the human-readable failure description, which lets the matcher be
//! exercised without any test-failure reporting machinery; the `assert_*`
//! macros layer that on top.
//!
//! A query range of `None` means "anywhere in the text". When a range is
//! given, the containment operations require an exact span match (start and
//! length both), while [`not_contains_attribute`] rejects any run that merely
//! intersects the range.

use crate::span::{Span, SpanList};
use crate::text::{AttrValue, AttributeRun, RichText};

mod error;

pub use error::AttributeMismatch;

/// Asserts that `text` carries a run with `key`, at exactly `range` when one
/// is given.
///
/// # Errors
///
/// [`AttributeMismatch::KeyAbsent`] when no run has the key at all, or
/// [`AttributeMismatch::RangeMismatch`] when runs exist but none spans
/// `range` exactly.
///
/// # Examples
///
/// ```
/// use rich_assert::matcher::contains_attribute;
/// use rich_assert::{RichText, Span};
///
/// # fn main() -> Result<(), rich_assert::RichTextError> {
/// let text = RichText::new("Hello World").with_attr("bold", true, Span::new(0, 5))?;
/// assert!(contains_attribute(&text, "bold", None).is_ok());
/// assert!(contains_attribute(&text, "bold", Some(Span::new(0, 6))).is_err());
/// # Ok(())
/// # }
/// ```
pub fn contains_attribute(
    text: &RichText,
    key: &str,
    range: Option<Span>,
) -> Result<(), AttributeMismatch> {
    let found: SpanList = text.runs_for(key).map(AttributeRun::span).collect();
    if found.is_empty() {
        return Err(AttributeMismatch::KeyAbsent {
            key: key.to_owned(),
        });
    }
    match range {
        None => Ok(()),
        Some(expected) if found.contains(&expected) => Ok(()),
        Some(expected) => Err(AttributeMismatch::RangeMismatch {
            key: key.to_owned(),
            expected,
            found,
        }),
    }
}

/// Asserts that `text` carries a run with `key` and a structurally equal
/// `value`, at exactly `range` when one is given.
///
/// # Errors
///
/// As [`contains_attribute`], plus [`AttributeMismatch::ValueMismatch`] when
/// a run matches on key and range but carries a different value. The value
/// mismatch reports the run that satisfied the range constraint, so the
/// description names the closest miss rather than an unrelated run.
pub fn contains_attribute_value(
    text: &RichText,
    key: &str,
    value: &AttrValue,
    range: Option<Span>,
) -> Result<(), AttributeMismatch> {
    contains_attribute_values(text, key, value, None, range)
}

/// Asserts that `text` carries a run with `key` whose value equals either
/// `value` or `alternate`, at exactly `range` when one is given.
///
/// The alternate exists for properties that legitimately resolve to one of
/// two equivalent representations, such as a platform default versus an
/// explicit value. With `alternate` of `None` the behaviour is identical to
/// [`contains_attribute_value`].
///
/// # Errors
///
/// As [`contains_attribute_value`]; a value mismatch lists both accepted
/// values when an alternate was supplied.
pub fn contains_attribute_values(
    text: &RichText,
    key: &str,
    value: &AttrValue,
    alternate: Option<&AttrValue>,
    range: Option<Span>,
) -> Result<(), AttributeMismatch> {
    let runs: Vec<&AttributeRun> = text.runs_for(key).collect();
    if runs.is_empty() {
        return Err(AttributeMismatch::KeyAbsent {
            key: key.to_owned(),
        });
    }
    let candidates: Vec<&AttributeRun> = match range {
        Some(expected) => {
            let exact: Vec<&AttributeRun> = runs
                .iter()
                .copied()
                .filter(|run| run.span() == expected)
                .collect();
            if exact.is_empty() {
                return Err(AttributeMismatch::RangeMismatch {
                    key: key.to_owned(),
                    expected,
                    found: runs.iter().map(|run| run.span()).collect(),
                });
            }
            exact
        }
        None => runs,
    };
    if candidates
        .iter()
        .any(|run| value_matches(run.value(), value, alternate))
    {
        return Ok(());
    }
    match candidates.as_slice() {
        // candidates is never empty here; the arm keeps the match exhaustive.
        [] => Err(AttributeMismatch::KeyAbsent {
            key: key.to_owned(),
        }),
        [first, ..] => Err(AttributeMismatch::ValueMismatch {
            key: key.to_owned(),
            span: first.span(),
            expected: value.clone(),
            alternate: alternate.cloned(),
            actual: first.value().clone(),
        }),
    }
}

/// Asserts that no run with `key` intersects `range`, or that no run with
/// `key` exists anywhere when `range` is `None`.
///
/// Unlike the containment operations this checks for overlap, not an exact
/// span match: a run covering any character of `range` is a violation.
///
/// # Errors
///
/// [`AttributeMismatch::UnexpectedAttribute`] listing the offending span(s).
pub fn not_contains_attribute(
    text: &RichText,
    key: &str,
    range: Option<Span>,
) -> Result<(), AttributeMismatch> {
    let found: SpanList = text
        .runs_for(key)
        .map(AttributeRun::span)
        .filter(|span| range.is_none_or(|query| span.intersects(query)))
        .collect();
    if found.is_empty() {
        Ok(())
    } else {
        Err(AttributeMismatch::UnexpectedAttribute {
            key: key.to_owned(),
            range,
            found,
        })
    }
}

fn value_matches(actual: &AttrValue, expected: &AttrValue, alternate: Option<&AttrValue>) -> bool {
    actual == expected || alternate.is_some_and(|alt| actual == alt)
}
