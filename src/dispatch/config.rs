//! # Immutable per-subscription configuration snapshot.
//!
//! Built once by [`SubscriptionBuilder::register`](crate::SubscriptionBuilder::register)
//! and owned by the executor for the subscription's whole life. The builder
//! is consumed by `register()`, so nothing can mutate a config after the
//! subscription exists.

use std::time::{Duration, Instant};

use std::sync::Arc;

use crate::error::DispatchError;
use crate::events::Event;
use crate::policies::{ExceptionPolicy, FilterFn, Interceptor, Pipeline};

/// Custom per-subscription fault handler; takes precedence over
/// [`ExceptionPolicy`] when present.
pub type ExceptionHandlerFn<E> = Box<dyn Fn(&E, &DispatchError) + Send + Sync>;

/// Frozen execution policy of one subscription.
///
/// Priority and `ignore_cancelled` are not here: they travel with the raw
/// registration and are enforced by the bus, not the executor.
pub(crate) struct DispatchConfig<E: Event> {
    /// Cancel the occurrence after each successful handler call.
    pub force_cancel: bool,
    /// Conjunctive predicates, registration order.
    pub filters: Vec<FilterFn<E>>,
    /// Local interceptors, registration order.
    pub interceptors: Vec<Arc<dyn Interceptor>>,
    /// Pipelines, registration order.
    pub pipelines: Vec<Arc<dyn Pipeline<E>>>,
    /// Maximum successful invocations; `None` = unlimited.
    pub limit: Option<u32>,
    /// Absolute deadline, computed once at registration.
    pub expires_at: Option<Instant>,
    /// Minimum gap between accepted occurrences.
    pub cooldown: Option<Duration>,
    /// Custom fault disposition.
    pub exception_handler: Option<ExceptionHandlerFn<E>>,
    /// Fallback fault disposition.
    pub policy: ExceptionPolicy,
    /// Emit a timing log line per successful dispatch.
    pub debug: bool,
}
