//! Assertion helpers for attributed ("rich") text.
//!
//! The crate centres on two pieces. The [`matcher`] module decides whether a
//! [`RichText`] value carries a formatting attribute over a particular
//! character range, returning a precise failure description when it does not.
//! The [`catching`] module runs a closure inside a scoped panic trap and
//! converts the panic into a returned [`CaughtPanic`] value, while always
//! letting a reserved test-runner [`Interruption`] unwind untouched.
//!
//! A set of `assert_*` macros layers test-failure reporting on top of the
//! matcher; the matcher itself never aborts, so it can be tested without any
//! failure-reporting machinery. Small [`case`] and [`combinatorics`] modules
//! round out the toolkit for table-style tests.
//!
//! # Examples
//!
//! ```
//! use rich_assert::{assert_contains_attribute, RichText, Span};
//!
//! # fn main() -> Result<(), rich_assert::RichTextError> {
//! let text = RichText::new("Hello World").with_attr("bold", true, Span::new(0, 5))?;
//! assert_contains_attribute!(text, "bold", Span::new(0, 5));
//! # Ok(())
//! # }
//! ```

pub mod case;
pub mod catching;
pub mod combinatorics;
pub mod config;
mod macros;
pub mod matcher;
mod span;
#[doc(hidden)]
pub mod support;
mod text;

pub use catching::{CaughtPanic, Interruption, PanicFilter, catch_panic, catch_panic_matching};
pub use matcher::AttributeMismatch;
pub use span::{Span, SpanList};
pub use text::{AttrValue, AttributeRun, RichText, RichTextError};
