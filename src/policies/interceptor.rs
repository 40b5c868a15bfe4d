//! # Interceptors: before/after/on_error observers wrapping dispatch.
//!
//! Interceptors are cross-cutting hooks (metrics, logging, auditing). They
//! are type-erased: one interceptor can observe subscriptions of any event
//! type through the [`DispatchContext`].
//!
//! ## Wrapping order
//! Global interceptors (held by the [`Registry`](crate::Registry)) always
//! wrap local ones:
//! ```text
//! global.before → local.before → handler → local.after → global.after
//! ```
//! On a fault, `on_error` fires exactly once per interceptor, local first,
//! then global (unwrapping order).
//!
//! ## Veto interaction
//! When a pipeline vetoes or a filter rejects, the dispatch aborts *between*
//! `before` and the handler: `after` does not run for that occurrence. An
//! interceptor that pairs `before`/`after` state must tolerate a missing
//! `after`.

use crate::error::DispatchError;
use crate::events::DispatchContext;

/// Before/after/on_error observer around every dispatch of a subscription.
///
/// All hooks default to no-ops so implementors override only what they need.
pub trait Interceptor: Send + Sync {
    /// Runs before pipelines, filters and the handler.
    fn before(&self, _ctx: &DispatchContext<'_>) {}

    /// Runs after the handler and the pipelines' `post`, on success only.
    fn after(&self, _ctx: &DispatchContext<'_>) {}

    /// Runs exactly once per failing dispatch.
    fn on_error(&self, _ctx: &DispatchContext<'_>, _error: &DispatchError) {}
}
