//! Rich text values: a string paired with positional attribute runs.
//!
//! A [`RichText`] is built once by the test and never mutated afterwards. Run
//! bounds are validated when the run is attached, so the matcher can assume
//! every span lies within the text.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// Attribute value compared by structural equality.
///
/// The variants cover the value shapes assertions need to compare; equality is
/// the derived `PartialEq`, so there is no identity-based shortcut.
///
/// # Examples
///
/// ```
/// use rich_assert::AttrValue;
///
/// assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
/// assert_eq!(AttrValue::from("serif").to_string(), "\"serif\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Boolean flag, e.g. `bold = true`.
    Bool(bool),
    /// Integer quantity, e.g. an underline style code.
    Int(i64),
    /// Floating-point quantity, e.g. a kerning adjustment.
    Float(f64),
    /// Textual value, e.g. a font family name.
    Str(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

/// One (key, value, span) triple describing a formatting property over a
/// sub-range of text.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    key: String,
    value: AttrValue,
    span: Span,
}

impl AttributeRun {
    /// Attribute key, e.g. `"bold"`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value carried by the run.
    #[must_use]
    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    /// Character range the run covers.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Errors raised while building a [`RichText`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RichTextError {
    /// The attribute run extends beyond the end of the text.
    #[error("attribute '{key}' run {span} exceeds text length {len}")]
    RunOutOfBounds {
        /// Key of the offending run.
        key: String,
        /// Span that failed validation.
        span: Span,
        /// Character length of the text.
        len: usize,
    },
}

/// Text plus associated positional formatting metadata.
///
/// # Examples
///
/// ```
/// use rich_assert::{RichText, Span};
///
/// # fn main() -> Result<(), rich_assert::RichTextError> {
/// let text = RichText::new("Hello World")
///     .with_attr("bold", true, Span::new(0, 5))?
///     .with_attr("italic", true, Span::new(6, 5))?;
/// assert_eq!(text.len(), 11);
/// assert_eq!(text.runs().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl RichText {
    /// Wrap a plain string with no attribute runs.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Attach an attribute run covering `span`.
    ///
    /// Runs for a key need not be contiguous and several runs may share a
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`RichTextError::RunOutOfBounds`] when `span` extends past the
    /// end of the text.
    pub fn with_attr(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
        span: Span,
    ) -> Result<Self, RichTextError> {
        let key = key.into();
        let len = self.len();
        if span.end() > len {
            return Err(RichTextError::RunOutOfBounds { key, span, len });
        }
        self.runs.push(AttributeRun {
            key,
            value: value.into(),
            span,
        });
        Ok(self)
    }

    /// Underlying plain text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of the text (Unicode scalar values).
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` when the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All attribute runs, in attachment order.
    #[must_use]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Attribute runs whose key equals `key`, in attachment order.
    pub fn runs_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a AttributeRun> + 'a {
        self.runs.iter().filter(move |run| run.key == key)
    }
}
