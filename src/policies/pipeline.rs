//! # Pipelines: typed pre/post gates around the handler.
//!
//! A pipeline is a gate-and-side-effect pair. `pre` runs before the handler
//! and may veto the dispatch by returning `false`; `post` runs after a
//! successful handler call. Unlike interceptors, pipelines see the typed
//! occurrence.
//!
//! ## Veto semantics
//! A `false` from any `pre` aborts immediately: no later `pre`, no handler,
//! no `post` (not even for pipelines whose `pre` already ran), no interceptor
//! `after`, no counters, no error. The subscription stays active for the next
//! occurrence.

use crate::events::{DispatchContext, Event};

/// Typed pre/post stage around a subscription's handler.
pub trait Pipeline<E: Event>: Send + Sync {
    /// Gate before the handler. Returning `false` vetoes the dispatch.
    fn pre(&self, _event: &E, _ctx: &DispatchContext<'_>) -> bool {
        true
    }

    /// Side effect after a successful handler call.
    fn post(&self, _event: &E, _ctx: &DispatchContext<'_>) {}
}
