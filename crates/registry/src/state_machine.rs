//! Generic state machine infrastructure.
//!
//! This module provides the output type and the trait that lets an embedder drive a state machine
//! with serializable call values instead of invoking its methods directly.

/// Generic output from a state machine after processing a call.
///
/// Holds the notifications emitted by the call, in emission order. Consumers that react to
/// "something changed" notifications rely on this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SMOutput<N> {
    /// The notifications emitted while processing the call.
    pub notifications: Vec<N>,
}

impl<N> Default for SMOutput<N> {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }
}

impl<N> SMOutput<N> {
    /// Creates a new empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an output with the given notifications.
    pub const fn with_notifications(notifications: Vec<N>) -> Self {
        Self { notifications }
    }

    /// Appends a notification.
    pub fn push(&mut self, notification: N) {
        self.notifications.push(notification);
    }

    /// Returns `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns the number of emitted notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

impl<N> Extend<N> for SMOutput<N> {
    fn extend<T: IntoIterator<Item = N>>(&mut self, iter: T) {
        self.notifications.extend(iter);
    }
}

impl<N> IntoIterator for SMOutput<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.into_iter()
    }
}

/// Trait for state machines driven by authenticated calls.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for NodeOperatorsRegistry<A, C, D> {
///     type Caller = Address;
///     type Call = RegistryCall;
///     type Notification = RegistryEvent;
///     type Error = RegistryError;
///
///     fn process_call(&mut self, caller: &Address, call: RegistryCall)
///         -> Result<SMOutput<RegistryEvent>, RegistryError>
///     {
///         // Implementation
///     }
/// }
/// ```
pub trait StateMachine {
    /// The identity of whoever issues a call.
    type Caller;

    /// The type of calls this state machine can process.
    type Call;

    /// The type of notifications this state machine emits.
    type Notification;

    /// The error type returned when a call is rejected.
    type Error;

    /// Processes a call on behalf of `caller`.
    ///
    /// A rejected call must leave the state machine exactly as it was.
    fn process_call(
        &mut self,
        caller: &Self::Caller,
        call: Self::Call,
    ) -> Result<SMOutput<Self::Notification>, Self::Error>;
}
