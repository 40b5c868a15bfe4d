//! # Occurrence model: the [`Event`] and [`Cancellable`] traits.
//!
//! An *occurrence* is one instance of a typed notification delivered by the
//! host bus. The engine never owns occurrences; it borrows them for the
//! duration of one dispatch and hands them to handlers by reference.
//!
//! ## Type identity
//! Registrations are keyed by the concrete event type. The erased side of the
//! seam ([`Event::as_any`]) lets the bus carry `&dyn Event` while the typed
//! side (the registration callback) downcasts back to the exact type it was
//! built for, so an executor only ever sees occurrences of its own type.
//!
//! ## Cancellation
//! Cancellation is an optional capability: occurrences that support it expose
//! it through [`Event::as_cancellable`]. Cancellation state uses interior
//! mutability because occurrences travel as shared references across
//! registrations.
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use eventry::{Cancellable, Event};
//!
//! struct BlockBreak {
//!     cancelled: AtomicBool,
//! }
//!
//! impl Event for BlockBreak {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!     fn as_cancellable(&self) -> Option<&dyn Cancellable> {
//!         Some(self)
//!     }
//! }
//!
//! impl Cancellable for BlockBreak {
//!     fn is_cancelled(&self) -> bool {
//!         self.cancelled.load(Ordering::Acquire)
//!     }
//!     fn set_cancelled(&self, cancelled: bool) {
//!         self.cancelled.store(cancelled, Ordering::Release);
//!     }
//! }
//! ```

use std::any::Any;

/// A typed notification deliverable through the engine.
///
/// Implementors are plain data types. The two methods are wiring, not
/// behavior:
/// - [`Event::as_any`] is the downcast seam (`fn as_any(&self) -> &dyn Any { self }`);
/// - [`Event::as_cancellable`] opts into the cancellation capability and
///   defaults to `None`.
pub trait Event: Any + Send + Sync {
    /// Returns `self` as [`Any`] for downcasting at the bus boundary.
    fn as_any(&self) -> &dyn Any;

    /// Returns the cancellation capability, if this occurrence carries one.
    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        None
    }
}

/// Optional capability on an occurrence allowing consumers to suppress
/// further propagation.
///
/// `set_cancelled` takes `&self`: implementors use interior mutability
/// (typically an `AtomicBool`) because occurrences are shared across
/// registrations during delivery.
pub trait Cancellable {
    /// Returns true if this occurrence has been cancelled.
    fn is_cancelled(&self) -> bool;

    /// Sets the cancelled flag.
    fn set_cancelled(&self, cancelled: bool);
}
