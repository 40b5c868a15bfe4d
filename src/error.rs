//! Error types used by the dispatch engine.
//!
//! Two taxonomies, matching the two moments things can go wrong:
//!
//! - [`ConfigError`] — builder misuse detected at `register()` time. Fails
//!   fast; never silently defaulted.
//! - [`DispatchError`] — a fault raised while dispatching one occurrence: the
//!   handler returned an error, or some stage panicked.
//!
//! Filter rejections, pipeline vetoes and cooldown drops are *not* errors;
//! they short-circuit a dispatch silently and never appear here.

use std::any::Any;

use thiserror::Error;

use crate::events::EventKey;

/// Boxed error returned by user handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// # Errors raised at registration time.
///
/// These represent misconfigured subscriptions. `register()` refuses to
/// guess: a subscription without an owner would leak past every
/// [`Registry::shutdown`](crate::Registry::shutdown) call.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No owner was bound before `register()`.
    #[error("subscription for {event} has no owner; call .owner(..) before register()")]
    OwnerNotBound {
        /// Short name of the event type being subscribed to.
        event: &'static str,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::OwnerNotBound { .. } => "config_owner_not_bound",
        }
    }
}

/// # Faults raised while dispatching a single occurrence.
///
/// A fault never flips the subscription's state: a handler that fails once
/// keeps receiving future occurrences. Disposition is decided per
/// subscription (custom handler, then [`ExceptionPolicy`]).
///
/// [`ExceptionPolicy`]: crate::ExceptionPolicy
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The user handler returned an error.
    #[error("handler failed for {event}: {source}")]
    Handler {
        /// Short name of the event type.
        event: &'static str,
        /// The underlying handler error.
        #[source]
        source: HandlerError,
    },

    /// The handler, a filter, a pipeline stage or an interceptor panicked.
    #[error("dispatch panicked for {event}: {message}")]
    Panicked {
        /// Short name of the event type.
        event: &'static str,
        /// Panic payload rendered as text.
        message: String,
    },
}

impl DispatchError {
    pub(crate) fn handler(key: EventKey, source: HandlerError) -> Self {
        DispatchError::Handler {
            event: key.short_name(),
            source,
        }
    }

    pub(crate) fn panicked(key: EventKey, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        DispatchError::Panicked {
            event: key.short_name(),
            message,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Handler { .. } => "dispatch_handler_failed",
            DispatchError::Panicked { .. } => "dispatch_panicked",
        }
    }
}
