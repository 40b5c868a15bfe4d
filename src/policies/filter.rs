//! # Filters: predicates gating handler execution.
//!
//! A filter is a plain predicate over the typed occurrence. A subscription
//! may carry any number of filters; they are evaluated in registration order
//! with AND semantics, and a `false` aborts the dispatch silently — no
//! handler call, no counters, no error. Order among filters affects only
//! short-circuit cost, never the outcome.
//!
//! The [`filters`] helpers cover the recurring cases so call sites stay
//! declarative:
//! ```rust
//! use eventry::filters;
//! # use std::any::Any;
//! # use eventry::Event;
//! # struct Damage;
//! # impl Event for Damage { fn as_any(&self) -> &dyn Any { self } }
//! let gate = filters::not_cancelled::<Damage>();
//! ```

use crate::events::Event;

/// Boxed predicate over a typed occurrence.
pub type FilterFn<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Ready-made filters.
pub mod filters {
    use super::FilterFn;
    use crate::events::Event;

    /// Passes every occurrence. Useful as a placeholder in generated configs.
    pub fn always<E: Event>() -> FilterFn<E> {
        Box::new(|_| true)
    }

    /// Rejects every occurrence.
    pub fn never<E: Event>() -> FilterFn<E> {
        Box::new(|_| false)
    }

    /// Rejects occurrences that are already cancelled. Occurrences without
    /// the cancellation capability always pass.
    pub fn not_cancelled<E: Event>() -> FilterFn<E> {
        Box::new(|e: &E| e.as_cancellable().map_or(true, |c| !c.is_cancelled()))
    }
}
