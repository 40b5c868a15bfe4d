//! # The host-bus seam.
//!
//! The engine does not route events by type itself; that is the host's job.
//! What it needs from the host is small: accept a [`RawRegistration`] and
//! later remove it by id. [`EventBus`] is that seam. The host invokes the
//! registration's callback for every matching occurrence, on a thread of its
//! choosing, possibly concurrently.
//!
//! [`LocalBus`](crate::LocalBus) is the in-crate reference implementation.

use std::any::TypeId;

use crate::error::DispatchError;
use crate::events::Event;
use crate::policies::Priority;

/// Type-erased dispatch callback invoked by the host for each occurrence.
///
/// The callback downcasts internally and ignores occurrences of foreign
/// types, so a host may over-deliver without harm.
pub type DispatchFn = Box<dyn Fn(&dyn Event) -> Result<(), DispatchError> + Send + Sync>;

/// Identifier of one raw registration on a bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistrationId(pub u64);

/// One raw registration handed to the host bus.
pub struct RawRegistration {
    /// Concrete event type this registration matches.
    pub type_id: TypeId,
    /// Delivery order relative to other registrations on the same type.
    pub priority: Priority,
    /// Skip delivery when the occurrence is already cancelled.
    pub ignore_cancelled: bool,
    /// The per-occurrence callback.
    pub callback: DispatchFn,
}

impl RawRegistration {
    /// Builds a registration for event type `E`.
    pub fn new<E: Event>(
        priority: Priority,
        ignore_cancelled: bool,
        callback: DispatchFn,
    ) -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            priority,
            ignore_cancelled,
            callback,
        }
    }
}

/// Host event bus collaborator.
///
/// Implementations must support concurrent calls; `remove_registration` must
/// tolerate unknown ids (removal races with delivery are resolved by the
/// executor's own tombstone, not by the bus).
pub trait EventBus: Send + Sync {
    /// Adds a registration and returns its id.
    fn add_registration(&self, registration: RawRegistration) -> RegistrationId;

    /// Removes a registration. Unknown ids are a no-op.
    fn remove_registration(&self, id: RegistrationId);
}
