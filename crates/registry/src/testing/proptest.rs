//! Property-based testing macros for state machines.
//!
//! These use proptest to generate arbitrary call sequences and verify that fundamental properties
//! of a state machine hold after every call.

/// Property: State machines should be deterministic.
///
/// Two machines created from the same seed and fed the same calls must end up in the same state
/// and emit the same notifications.
///
/// # Arguments
/// * `$create_fn` - Function to create the SM: `Fn() -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$calls_strategy` - Proptest strategy for `Vec<(Caller, Call)>`
#[macro_export]
macro_rules! prop_deterministic {
    ($create_fn:expr, $get_state_fn:expr, $calls_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn state_machine_is_deterministic(calls in $calls_strategy) {
                use $crate::state_machine::StateMachine;

                let mut sm1 = $create_fn();
                let mut sm2 = $create_fn();

                for (caller, call) in calls {
                    let result1 = sm1.process_call(&caller, call.clone());
                    let result2 = sm2.process_call(&caller, call);

                    match (result1, result2) {
                        (Ok(out1), Ok(out2)) => {
                            proptest::prop_assert_eq!(out1.notifications, out2.notifications);
                        }
                        (Err(err1), Err(err2)) => {
                            proptest::prop_assert_eq!(err1, err2);
                        }
                        _ => {
                            proptest::prop_assert!(false, "Inconsistent results: one succeeded, one failed");
                        }
                    }

                    proptest::prop_assert_eq!($get_state_fn(&sm1), $get_state_fn(&sm2));
                }
            }
        }
    };
}

/// Property: Rejected calls leave the state untouched.
///
/// Every call of an arbitrary sequence either succeeds or fails without any partial application.
///
/// # Arguments
/// * `$create_fn` - Function to create the SM: `Fn() -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$calls_strategy` - Proptest strategy for `Vec<(Caller, Call)>`
#[macro_export]
macro_rules! prop_no_partial_application {
    ($create_fn:expr, $get_state_fn:expr, $calls_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn rejected_calls_leave_state_unchanged(calls in $calls_strategy) {
                use $crate::state_machine::StateMachine;

                let mut sm = $create_fn();

                for (caller, call) in calls {
                    let before = $get_state_fn(&sm).clone();

                    if let Err(err) = sm.process_call(&caller, call) {
                        proptest::prop_assert_eq!(
                            &before,
                            $get_state_fn(&sm),
                            "State changed despite error: {}",
                            err
                        );
                    }
                }
            }
        }
    };
}

/// Property: A caller-supplied invariant holds after every call of an arbitrary sequence.
///
/// # Arguments
/// * `$name` - Name of the generated test
/// * `$create_fn` - Function to create the SM: `Fn() -> SM`
/// * `$calls_strategy` - Proptest strategy for `Vec<(Caller, Call)>`
/// * `$check_fn` - `Fn(&SM_before, &SM_after, &Result<Output, Error>) -> Result<(), TestCaseError>`
#[macro_export]
macro_rules! prop_invariant {
    ($name:ident, $create_fn:expr, $calls_strategy:expr, $check_fn:expr) => {
        proptest::proptest! {
            #[test]
            fn $name(calls in $calls_strategy) {
                use $crate::state_machine::StateMachine;

                let mut sm = $create_fn();

                for (caller, call) in calls {
                    let before = sm.clone();
                    let result = sm.process_call(&caller, call);
                    $check_fn(&before, &sm, &result)?;
                }
            }
        }
    };
}
