//! Character spans over rich text and helpers for rendering them in failure
//! descriptions.

use std::fmt;

use crate::config;

/// Half-open character range `[start, start + len)` within a piece of text.
///
/// Positions count Unicode scalar values, matching
/// [`RichText::len`](crate::RichText::len).
///
/// # Examples
///
/// ```
/// use rich_assert::Span;
///
/// let span = Span::new(0, 5);
/// assert_eq!(span.end(), 5);
/// assert_eq!(span.to_string(), "[0, 5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// Construct a span covering `len` characters beginning at `start`.
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// First character position covered by the span.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Number of characters covered by the span.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Position one past the last covered character.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Returns `true` when the span covers no characters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns `true` when the two spans share at least one character.
    ///
    /// Empty spans never intersect anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_assert::Span;
    ///
    /// assert!(Span::new(0, 5).intersects(Span::new(3, 4)));
    /// assert!(!Span::new(0, 5).intersects(Span::new(5, 2)));
    /// ```
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Ordered collection of spans reported in failure descriptions.
///
/// `Display` joins the spans with ", ", truncating the listing at
/// [`config::max_reported_spans`] and noting how many were elided. An empty
/// list renders as `none`.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    derive_more::Deref,
    derive_more::From,
    derive_more::IntoIterator,
)]
pub struct SpanList(Vec<Span>);

impl FromIterator<Span> for SpanList {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SpanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        let limit = config::max_reported_spans();
        for (index, span) in self.0.iter().take(limit).enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{span}")?;
        }
        let elided = self.0.len().saturating_sub(limit);
        if elided > 0 {
            write!(f, " and {elided} more")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::{Span, SpanList};
    use crate::config;

    #[test]
    fn end_is_start_plus_len() {
        assert_eq!(Span::new(3, 4).end(), 7);
    }

    #[test]
    fn adjacent_spans_do_not_intersect() {
        assert!(!Span::new(0, 3).intersects(Span::new(3, 3)));
        assert!(!Span::new(3, 3).intersects(Span::new(0, 3)));
    }

    #[test]
    fn overlapping_spans_intersect() {
        assert!(Span::new(0, 5).intersects(Span::new(4, 1)));
        assert!(Span::new(4, 1).intersects(Span::new(0, 5)));
    }

    #[test]
    fn empty_span_intersects_nothing() {
        assert!(!Span::new(2, 0).intersects(Span::new(0, 5)));
        assert!(!Span::new(0, 5).intersects(Span::new(2, 0)));
    }

    #[test]
    fn empty_list_renders_as_none() {
        assert_eq!(SpanList::default().to_string(), "none");
    }

    #[test]
    #[serial]
    fn list_joins_spans_with_commas() {
        config::clear_max_reported_spans_override();
        let list: SpanList = vec![Span::new(0, 5), Span::new(7, 2)].into();
        assert_eq!(list.to_string(), "[0, 5), [7, 9)");
    }

    #[test]
    #[serial]
    fn long_list_is_truncated_at_the_configured_cap() {
        config::set_max_reported_spans(2);
        let list: SpanList =
            vec![Span::new(0, 1), Span::new(2, 1), Span::new(4, 1), Span::new(6, 1)].into();
        assert_eq!(list.to_string(), "[0, 1), [2, 3) and 2 more");
        config::clear_max_reported_spans_override();
    }
}
