//! Behaviour of the panic-catching bridge: trapping, filtering, and the
//! interruption pass-through guarantee.

use std::panic::{self, AssertUnwindSafe};

use rich_assert::{CaughtPanic, Interruption, PanicFilter, catch_panic, catch_panic_matching};

#[derive(Debug)]
struct StepFault;

#[derive(Debug)]
struct OtherFault;

#[test]
fn completed_operation_returns_its_value() {
    let result = catch_panic(|| "done");
    assert_eq!(result.ok(), Some("done"));
}

#[test]
fn str_panic_is_returned_with_its_message() {
    let result: Result<(), CaughtPanic> = catch_panic(|| panic!("boom"));
    let caught = result
        .err()
        .unwrap_or_else(|| panic!("panic should have been trapped"));
    assert_eq!(caught.message(), "boom");
    assert!(caught.is::<&str>());
}

#[test]
fn formatted_panic_is_returned_as_a_string_payload() {
    let result: Result<(), CaughtPanic> = catch_panic(|| panic!("code {}", 7));
    let caught = result
        .err()
        .unwrap_or_else(|| panic!("panic should have been trapped"));
    assert_eq!(caught.message(), "code 7");
    assert!(caught.is::<String>());
}

#[test]
fn typed_payload_can_be_downcast() {
    let result: Result<(), CaughtPanic> =
        catch_panic(|| panic::resume_unwind(Box::new(StepFault)));
    let caught = result
        .err()
        .unwrap_or_else(|| panic!("panic should have been trapped"));
    assert!(caught.downcast_ref::<StepFault>().is_some());
    assert!(caught.message().starts_with("opaque panic payload"));
}

#[test]
fn filter_traps_named_payload_types() {
    let filter = PanicFilter::new().allow::<StepFault>();
    let result: Result<(), CaughtPanic> =
        catch_panic_matching(&filter, || panic::resume_unwind(Box::new(StepFault)));
    assert!(matches!(result, Err(caught) if caught.is::<StepFault>()));
}

#[test]
fn filter_re_raises_other_payload_types() {
    let filter = PanicFilter::new().allow::<StepFault>();
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
        let _trapped: Result<(), CaughtPanic> =
            catch_panic_matching(&filter, || panic::resume_unwind(Box::new(OtherFault)));
    }));
    let Err(payload) = unwound else {
        panic!("an unmatched payload should re-raise");
    };
    assert!(payload.is::<OtherFault>());
}

#[test]
fn empty_filter_traps_any_payload() {
    let filter = PanicFilter::new();
    let result: Result<(), CaughtPanic> =
        catch_panic_matching(&filter, || panic::resume_unwind(Box::new(OtherFault)));
    assert!(matches!(result, Err(caught) if caught.is::<OtherFault>()));
}

#[test]
fn interruption_passes_through_catch_panic() {
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
        let _trapped: Result<(), CaughtPanic> =
            catch_panic(|| Interruption::raise(Some("runner abort".to_owned())));
    }));
    let Err(payload) = unwound else {
        panic!("an interruption should unwind past catch_panic");
    };
    let interruption = payload
        .downcast::<Interruption>()
        .unwrap_or_else(|_| panic!("payload should be the interruption"));
    assert_eq!(interruption.message(), Some("runner abort"));
}

#[test]
fn interruption_passes_through_even_when_filtered_for() {
    // Naming the interruption type on a filter must not trap it.
    let filter = PanicFilter::new().allow::<Interruption>();
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
        let _trapped: Result<(), CaughtPanic> =
            catch_panic_matching(&filter, || Interruption::raise(None));
    }));
    let Err(payload) = unwound else {
        panic!("an interruption should unwind past catch_panic_matching");
    };
    assert!(payload.is::<Interruption>());
}

#[test]
fn resume_restores_the_original_payload() {
    let result: Result<(), CaughtPanic> = catch_panic(|| panic!("first"));
    let caught = result
        .err()
        .unwrap_or_else(|| panic!("panic should have been trapped"));
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| caught.resume()));
    let Err(payload) = unwound else {
        panic!("resume should unwind");
    };
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"first"));
}
