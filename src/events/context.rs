//! # Per-dispatch context handed to interceptors and pipelines.
//!
//! One [`DispatchContext`] is created per occurrence at the top of the
//! dispatch pipeline and borrowed by every stage that runs for it. It carries
//! the occurrence (type-erased), its [`EventKey`], and the dispatch start
//! instant used for elapsed-time measurement.

use std::time::Instant;

use crate::events::{Event, EventKey};

/// Borrowed view of one in-flight dispatch.
pub struct DispatchContext<'a> {
    event: &'a dyn Event,
    key: EventKey,
    started: Instant,
}

impl<'a> DispatchContext<'a> {
    /// Creates a context for one occurrence; captures the start instant now.
    pub fn new(event: &'a dyn Event, key: EventKey) -> Self {
        Self {
            event,
            key,
            started: Instant::now(),
        }
    }

    /// Returns the occurrence, type-erased.
    ///
    /// Typed access belongs to pipelines and filters, which receive `&E`
    /// directly; interceptors are cross-cutting and usually only need the
    /// key. Downcast via [`Event::as_any`] when an interceptor does care.
    pub fn event(&self) -> &'a dyn Event {
        self.event
    }

    /// Returns the key of the occurrence's event type.
    pub fn key(&self) -> EventKey {
        self.key
    }

    /// Returns the instant this dispatch started.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Returns nanoseconds elapsed since dispatch start.
    pub fn elapsed_nanos(&self) -> u128 {
        self.started.elapsed().as_nanos()
    }
}
