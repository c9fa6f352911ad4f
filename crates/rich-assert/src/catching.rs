//! Scoped panic trapping for test helpers.
//!
//! [`catch_panic`] runs a closure and converts an unwinding panic into a
//! returned [`CaughtPanic`] value instead of letting it crash the test run.
//! [`catch_panic_matching`] narrows the trap to payload types registered on a
//! [`PanicFilter`]; any other payload is re-raised so unrelated failures keep
//! their original unwind path.
//!
//! A reserved [`Interruption`] payload is never trapped by either function,
//! even when a filter names its type. Test runners that abort a case through
//! it must stay in control of the unwind; swallowing it would corrupt their
//! control flow.

use std::any::{Any, TypeId};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Reserved abort signal used by a test runner to stop a case immediately.
///
/// Raise one with [`Interruption::raise`]; the trapping functions in this
/// module always let it propagate untouched.
#[derive(Debug)]
pub struct Interruption {
    message: Option<String>,
}

impl Interruption {
    /// Construct an interruption carrying an optional reason.
    #[must_use]
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// Reason attached to the interruption, when one was given.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Unwind the current thread with this interruption as the payload.
    #[track_caller]
    pub fn raise(message: Option<String>) -> ! {
        panic::resume_unwind(Box::new(Self::new(message)));
    }
}

/// A panic captured by [`catch_panic`] or [`catch_panic_matching`].
///
/// Owns the raw payload so callers can inspect or re-raise it.
pub struct CaughtPanic {
    payload: Box<dyn Any + Send>,
}

impl CaughtPanic {
    fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Readable message extracted from the payload.
    ///
    /// String payloads are returned directly and common primitives are
    /// rendered through `ToString`; anything else is described opaquely.
    ///
    /// # Examples
    ///
    /// ```
    /// use rich_assert::catch_panic;
    ///
    /// let result: Result<(), _> = catch_panic(|| panic!("boom"));
    /// assert_eq!(result.unwrap_err().message(), "boom");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        macro_rules! try_downcast {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(value) = self.payload.downcast_ref::<$ty>() {
                        return value.to_string();
                    }
                )*
            };
        }

        try_downcast!(&str, String, bool, char, i32, u32, i64, u64, isize, usize, f32, f64);
        format!(
            "opaque panic payload of type {:?}",
            self.payload.as_ref().type_id()
        )
    }

    /// Returns `true` when the payload is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.as_ref().is::<T>()
    }

    /// Borrow the payload as a `T`, when it is one.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Recover the raw payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raise the captured panic, restoring the original unwind.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Set of payload types that [`catch_panic_matching`] traps.
///
/// An empty filter traps every payload type, matching the behaviour of
/// [`catch_panic`]. [`Interruption`] is excluded regardless of what the
/// filter names.
///
/// # Examples
///
/// ```
/// use rich_assert::PanicFilter;
///
/// let filter = PanicFilter::new().allow::<String>().allow::<i32>();
/// ```
#[derive(Debug, Default)]
pub struct PanicFilter {
    allowed: Vec<TypeId>,
}

impl PanicFilter {
    /// Construct an empty filter, which traps any payload type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `T` to the set of trapped payload types.
    #[must_use]
    pub fn allow<T: Any>(mut self) -> Self {
        self.allowed.push(TypeId::of::<T>());
        self
    }

    fn matches(&self, payload: &(dyn Any + Send)) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&payload.type_id())
    }
}

/// Run `op`, converting an unwinding panic into a returned [`CaughtPanic`].
///
/// An [`Interruption`] payload is re-raised rather than returned.
///
/// # Examples
///
/// ```
/// use rich_assert::catch_panic;
///
/// assert_eq!(catch_panic(|| 2 + 2).ok(), Some(4));
/// ```
pub fn catch_panic<T>(op: impl FnOnce() -> T) -> Result<T, CaughtPanic> {
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Ok(value),
        Err(payload) if payload.is::<Interruption>() => panic::resume_unwind(payload),
        Err(payload) => {
            let caught = CaughtPanic::new(payload);
            log::debug!("trapped panic: {}", caught.message());
            Err(caught)
        }
    }
}

/// Run `op`, trapping only panics whose payload type is named by `filter`.
///
/// Payloads outside the filtered set, and [`Interruption`] always, are
/// re-raised so the original failure path is preserved.
///
/// # Examples
///
/// ```
/// use rich_assert::{PanicFilter, catch_panic_matching};
///
/// let filter = PanicFilter::new().allow::<String>();
/// let result: Result<(), _> = catch_panic_matching(&filter, || panic!("{}", "boom"));
/// assert!(result.unwrap_err().is::<String>());
/// ```
pub fn catch_panic_matching<T>(
    filter: &PanicFilter,
    op: impl FnOnce() -> T,
) -> Result<T, CaughtPanic> {
    match catch_panic(op) {
        Err(caught) if !filter.matches(caught.payload.as_ref()) => {
            log::debug!("re-raising panic outside the filtered set: {}", caught.message());
            caught.resume()
        }
        result => result,
    }
}
