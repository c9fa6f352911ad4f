//! Runtime configuration for rich-assert.
//!
//! The module currently exposes the cap on how many attribute run spans a
//! failure description lists before truncating the remainder.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Cap applied when neither an override nor the environment specifies one.
pub const DEFAULT_MAX_REPORTED_SPANS: usize = 8;

// Stored as limit + 1 so zero can mean "no override".
static MAX_REPORTED_SPANS_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

fn parse_env_limit(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|limit| *limit > 0)
}

fn env_max_reported_spans() -> Option<usize> {
    std::env::var("RICH_ASSERT_MAX_REPORTED_SPANS")
        .ok()
        .as_deref()
        .and_then(parse_env_limit)
}

fn override_state() -> Option<usize> {
    match MAX_REPORTED_SPANS_OVERRIDE.load(Ordering::Relaxed) {
        0 => None,
        stored => Some(stored.saturating_sub(1)),
    }
}

/// Maximum number of spans one failure description lists.
///
/// Resolution order: in-process override, then the
/// `RICH_ASSERT_MAX_REPORTED_SPANS` environment variable, then
/// [`DEFAULT_MAX_REPORTED_SPANS`].
#[must_use]
pub fn max_reported_spans() -> usize {
    override_state()
        .or_else(env_max_reported_spans)
        .unwrap_or(DEFAULT_MAX_REPORTED_SPANS)
}

/// Override the reported-span cap for the current process.
///
/// A `limit` of zero is clamped to one so descriptions always name at least
/// one span. Tests may call [`clear_max_reported_spans_override`] to restore
/// environment-driven behaviour afterwards.
pub fn set_max_reported_spans(limit: usize) {
    let stored = limit.max(1).saturating_add(1);
    MAX_REPORTED_SPANS_OVERRIDE.store(stored, Ordering::Relaxed);
}

/// Remove any in-process override for the reported-span cap.
pub fn clear_max_reported_spans_override() {
    MAX_REPORTED_SPANS_OVERRIDE.store(0, Ordering::Relaxed);
}
