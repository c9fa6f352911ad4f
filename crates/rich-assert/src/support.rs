//! Hidden runtime support for the assertion macros.
//!
//! These functions exist so the exported macros expand to minimal glue; they
//! are not part of the public API.

use crate::catching::CaughtPanic;
use crate::matcher::AttributeMismatch;

/// Panic with a uniform assertion-failure message.
#[track_caller]
pub fn fail(macro_name: &str, description: &str) -> ! {
    panic!("{macro_name} failed: {description}");
}

/// Turn a trapped matcher outcome into a pass or an assertion panic.
#[track_caller]
pub fn surface(
    macro_name: &str,
    outcome: Result<Result<(), AttributeMismatch>, CaughtPanic>,
) {
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(mismatch)) => fail(macro_name, &mismatch.to_string()),
        Err(caught) => fail(
            macro_name,
            &format!("panicked with \"{}\"", caught.message()),
        ),
    }
}
