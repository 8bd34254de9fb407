//! Value-based call testing helpers.
//!
//! These helpers make it easy to write declarative tests for individual calls and sequences of
//! calls against any [`StateMachine`].

use std::fmt::Debug;

use crate::state_machine::{SMOutput, StateMachine};

/// Describes a call that is expected to be accepted.
pub(crate) struct CallCase<SM: StateMachine> {
    /// Who makes the call.
    pub(crate) caller: SM::Caller,
    /// The call itself.
    pub(crate) call: SM::Call,
    /// The notifications the call must emit, in order.
    pub(crate) expected_notifications: Vec<SM::Notification>,
}

/// Processes an accepted call and checks the notifications it emitted.
///
/// Returns the output so that the caller can inspect the resulting state.
pub(crate) fn test_call<SM>(sm: &mut SM, case: CallCase<SM>) -> SMOutput<SM::Notification>
where
    SM: StateMachine,
    SM::Notification: PartialEq + Debug,
    SM::Error: Debug,
{
    let result = sm.process_call(&case.caller, case.call);

    assert!(
        result.is_ok(),
        "Expected call to be accepted, got error: {:?}",
        result.as_ref().err()
    );

    let output = result.unwrap();
    assert_eq!(
        output.notifications, case.expected_notifications,
        "Notifications mismatch"
    );

    output
}

/// Describes a call that is expected to be rejected.
pub(crate) struct RejectedCall<SM: StateMachine> {
    /// Who makes the call.
    pub(crate) caller: SM::Caller,
    /// The call itself.
    pub(crate) call: SM::Call,
    /// Checks that the error is the expected one.
    pub(crate) expected_error: fn(&SM::Error) -> bool,
}

/// Processes a call that must be rejected and checks that the state did not change.
pub(crate) fn test_rejected_call<SM, S, GetStateFn>(
    sm: &mut SM,
    get_state: GetStateFn,
    rejected: RejectedCall<SM>,
) where
    SM: StateMachine,
    SM::Notification: Debug,
    SM::Error: Debug,
    S: Clone + PartialEq + Debug,
    GetStateFn: Fn(&SM) -> &S,
{
    let before = get_state(sm).clone();

    let result = sm.process_call(&rejected.caller, rejected.call);

    let err = match result {
        Ok(output) => panic!(
            "Expected error, but call was accepted with {:?}",
            output.notifications
        ),
        Err(err) => err,
    };

    assert!(
        (rejected.expected_error)(&err),
        "Error type mismatch. Got: {err:?}"
    );
    assert_eq!(get_state(sm), &before, "State changed despite error");
}

/// Runs a sequence of calls through a state machine and collects the outcomes.
pub(crate) struct CallSequence<SM: StateMachine> {
    sm: SM,
    outputs: Vec<SMOutput<SM::Notification>>,
    errors: Vec<(usize, SM::Error)>,
}

impl<SM: StateMachine> CallSequence<SM> {
    pub(crate) const fn new(sm: SM) -> Self {
        Self {
            sm,
            outputs: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Processes a call and records the result.
    pub(crate) fn process(&mut self, caller: &SM::Caller, call: SM::Call) -> &mut Self {
        let call_idx = self.outputs.len() + self.errors.len();
        match self.sm.process_call(caller, call) {
            Ok(output) => self.outputs.push(output),
            Err(e) => self.errors.push((call_idx, e)),
        }
        self
    }

    /// The state machine after the calls processed so far.
    pub(crate) const fn machine(&self) -> &SM {
        &self.sm
    }

    /// Asserts that every call was accepted.
    pub(crate) fn assert_no_errors(&self) -> &Self
    where
        SM::Error: Debug,
    {
        assert!(
            self.errors.is_empty(),
            "Expected no errors, but got: {:?}",
            self.errors
        );
        self
    }

    /// All notifications emitted during the sequence, in order.
    pub(crate) fn all_notifications(&self) -> Vec<&SM::Notification> {
        self.outputs.iter().flat_map(|o| &o.notifications).collect()
    }

    /// The errors of the rejected calls, with the index of each call.
    pub(crate) fn all_errors(&self) -> Vec<&(usize, SM::Error)> {
        self.errors.iter().collect()
    }

    /// Asserts that the given notifications were emitted, in any order.
    pub(crate) fn assert_notifications_contain(&self, expected: &[SM::Notification]) -> &Self
    where
        SM::Notification: PartialEq + Debug,
    {
        let all = self.all_notifications();
        for notification in expected {
            assert!(
                all.contains(&notification),
                "Expected notification {notification:?} not found. All notifications: {all:?}"
            );
        }
        self
    }
}
