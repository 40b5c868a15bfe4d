//! # Fault disposition policy.
//!
//! Decides what happens to a [`DispatchError`](crate::DispatchError) after
//! every interceptor's `on_error` has fired. There is exactly one active
//! disposition per subscription: a custom exception handler set on the
//! builder takes precedence over this policy; otherwise the policy applies.

/// What to do with a fault that reaches the end of the disposition chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionPolicy {
    /// Log the fault through diagnostics and report success to the host bus
    /// (default).
    Swallow,
    /// Return the fault to the host bus caller.
    Propagate,
}

impl ExceptionPolicy {
    /// Returns true if faults are caught and logged instead of propagated.
    pub fn catches(&self) -> bool {
        matches!(self, ExceptionPolicy::Swallow)
    }
}

impl Default for ExceptionPolicy {
    /// Returns [`ExceptionPolicy::Swallow`].
    fn default() -> Self {
        ExceptionPolicy::Swallow
    }
}
