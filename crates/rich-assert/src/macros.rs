//! Assertion macros exported by `rich-assert`.
//!
//! The macros live in a dedicated module to keep `lib.rs` focused on type
//! exports; `#[macro_export]` makes them available at the crate root. Each
//! accepts an optional trailing span argument in place of the "anywhere"
//! query, evaluates its arguments and the matcher inside
//! [`catch_panic`](crate::catch_panic) so an unexpected panic surfaces as a
//! diagnosable assertion failure, and lets a reserved
//! [`Interruption`](crate::Interruption) unwind untouched.

/// Assert that a [`RichText`](crate::RichText) contains an attribute.
///
/// With two arguments the attribute may appear anywhere; a third argument
/// names the exact [`Span`](crate::Span) the attribute must cover.
///
/// # Panics
///
/// Panics with the matcher's failure description when the attribute is
/// absent or covers a different range.
///
/// # Examples
///
/// ```
/// use rich_assert::{assert_contains_attribute, RichText, Span};
///
/// # fn main() -> Result<(), rich_assert::RichTextError> {
/// let text = RichText::new("Hello World").with_attr("bold", true, Span::new(0, 5))?;
/// assert_contains_attribute!(text, "bold");
/// assert_contains_attribute!(text, "bold", Span::new(0, 5));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! assert_contains_attribute {
    ($text:expr, $key:expr $(,)?) => {
        $crate::__assert_attribute!(assert_contains_attribute, $text, $key, ::core::option::Option::None)
    };
    ($text:expr, $key:expr, $span:expr $(,)?) => {
        $crate::__assert_attribute!(assert_contains_attribute, $text, $key, ::core::option::Option::Some($span))
    };
}

/// Assert that a [`RichText`](crate::RichText) contains an attribute with a
/// particular value.
///
/// The value may be anything convertible into
/// [`AttrValue`](crate::AttrValue). With three arguments the attribute may
/// appear anywhere; a fourth argument names the exact
/// [`Span`](crate::Span).
///
/// # Panics
///
/// Panics with the matcher's failure description, distinguishing an absent
/// key, a range mismatch, and a value mismatch.
///
/// # Examples
///
/// ```
/// use rich_assert::{assert_contains_attribute_value, RichText, Span};
///
/// # fn main() -> Result<(), rich_assert::RichTextError> {
/// let text = RichText::new("Hello World").with_attr("bold", true, Span::new(0, 5))?;
/// assert_contains_attribute_value!(text, "bold", true, Span::new(0, 5));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! assert_contains_attribute_value {
    ($text:expr, $key:expr, $value:expr $(,)?) => {
        $crate::__assert_attribute_value!(assert_contains_attribute_value, $text, $key, $value, ::core::option::Option::None)
    };
    ($text:expr, $key:expr, $value:expr, $span:expr $(,)?) => {
        $crate::__assert_attribute_value!(assert_contains_attribute_value, $text, $key, $value, ::core::option::Option::Some($span))
    };
}

/// Assert that a [`RichText`](crate::RichText) contains an attribute whose
/// value equals either of two accepted values.
///
/// This supports properties that legitimately resolve to one of two
/// equivalent representations, e.g. a platform default versus an explicit
/// value. With four arguments the attribute may appear anywhere; a fifth
/// names the exact [`Span`](crate::Span).
///
/// # Panics
///
/// Panics with the matcher's failure description; a value mismatch lists
/// both accepted values.
#[macro_export]
macro_rules! assert_contains_attribute_values {
    ($text:expr, $key:expr, $value:expr, $alternate:expr $(,)?) => {
        $crate::__assert_attribute_values!(assert_contains_attribute_values, $text, $key, $value, $alternate, ::core::option::Option::None)
    };
    ($text:expr, $key:expr, $value:expr, $alternate:expr, $span:expr $(,)?) => {
        $crate::__assert_attribute_values!(assert_contains_attribute_values, $text, $key, $value, $alternate, ::core::option::Option::Some($span))
    };
}

/// Assert that a [`RichText`](crate::RichText) does not contain an
/// attribute.
///
/// With two arguments no run with the key may exist anywhere; a third
/// argument names a [`Span`](crate::Span) that no run with the key may
/// intersect. Overlap is enough to fail, unlike the exact-range rule of the
/// containment macros.
///
/// # Panics
///
/// Panics with the matcher's failure description, listing the offending
/// span(s).
///
/// # Examples
///
/// ```
/// use rich_assert::{assert_not_contains_attribute, RichText, Span};
///
/// # fn main() -> Result<(), rich_assert::RichTextError> {
/// let text = RichText::new("Hello World").with_attr("bold", true, Span::new(0, 5))?;
/// assert_not_contains_attribute!(text, "italic");
/// assert_not_contains_attribute!(text, "bold", Span::new(6, 5));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! assert_not_contains_attribute {
    ($text:expr, $key:expr $(,)?) => {
        $crate::__assert_not_attribute!(assert_not_contains_attribute, $text, $key, ::core::option::Option::None)
    };
    ($text:expr, $key:expr, $span:expr $(,)?) => {
        $crate::__assert_not_attribute!(assert_not_contains_attribute, $text, $key, ::core::option::Option::Some($span))
    };
}

/// Assert that `search` occurs in `text` and remove its first occurrence.
///
/// `text` is a `&mut String`; the occurrence is removed in place so repeated
/// assertions can consume expected fragments one by one.
///
/// # Panics
///
/// Panics when `search` does not occur in `text`.
///
/// # Examples
///
/// ```
/// use rich_assert::assert_find_and_replace;
///
/// let mut rendered = "bold from 0 to 5".to_owned();
/// assert_find_and_replace!("bold ", &mut rendered);
/// assert_eq!(rendered, "from 0 to 5");
/// ```
#[macro_export]
macro_rules! assert_find_and_replace {
    ($search:expr, $text:expr $(,)?) => {{
        let __rich_assert_search: &str = ::core::convert::AsRef::as_ref(&$search);
        let __rich_assert_text: &mut ::std::string::String = $text;
        if !$crate::case::find_and_replace(__rich_assert_search, __rich_assert_text) {
            $crate::support::fail(
                "assert_find_and_replace!",
                &::std::format!(
                    "expected to find \"{}\" in \"{}\"",
                    __rich_assert_search,
                    __rich_assert_text
                ),
            );
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_attribute {
    ($name:ident, $text:expr, $key:expr, $range:expr) => {
        $crate::support::surface(
            ::core::concat!(::core::stringify!($name), "!"),
            $crate::catch_panic(|| {
                $crate::matcher::contains_attribute(
                    ::core::borrow::Borrow::borrow(&$text),
                    ::core::convert::AsRef::as_ref(&$key),
                    $range,
                )
            }),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_attribute_value {
    ($name:ident, $text:expr, $key:expr, $value:expr, $range:expr) => {
        $crate::support::surface(
            ::core::concat!(::core::stringify!($name), "!"),
            $crate::catch_panic(|| {
                let __rich_assert_value: $crate::AttrValue = ::core::convert::Into::into($value);
                $crate::matcher::contains_attribute_value(
                    ::core::borrow::Borrow::borrow(&$text),
                    ::core::convert::AsRef::as_ref(&$key),
                    &__rich_assert_value,
                    $range,
                )
            }),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_attribute_values {
    ($name:ident, $text:expr, $key:expr, $value:expr, $alternate:expr, $range:expr) => {
        $crate::support::surface(
            ::core::concat!(::core::stringify!($name), "!"),
            $crate::catch_panic(|| {
                let __rich_assert_value: $crate::AttrValue = ::core::convert::Into::into($value);
                let __rich_assert_alternate: $crate::AttrValue =
                    ::core::convert::Into::into($alternate);
                $crate::matcher::contains_attribute_values(
                    ::core::borrow::Borrow::borrow(&$text),
                    ::core::convert::AsRef::as_ref(&$key),
                    &__rich_assert_value,
                    ::core::option::Option::Some(&__rich_assert_alternate),
                    $range,
                )
            }),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_not_attribute {
    ($name:ident, $text:expr, $key:expr, $range:expr) => {
        $crate::support::surface(
            ::core::concat!(::core::stringify!($name), "!"),
            $crate::catch_panic(|| {
                $crate::matcher::not_contains_attribute(
                    ::core::borrow::Borrow::borrow(&$text),
                    ::core::convert::AsRef::as_ref(&$key),
                    $range,
                )
            }),
        )
    };
}
