//! # In-process reference bus.
//!
//! [`LocalBus`] routes occurrences to registrations synchronously on the
//! publishing thread. It exists so the engine is usable (and testable)
//! without an external host: embedders with their own delivery mechanism
//! implement [`EventBus`] instead and never touch this type.
//!
//! ## Delivery rules
//! - Registrations for the published type run in [`Priority`] order; ties
//!   preserve registration order.
//! - `ignore_cancelled` registrations are skipped once the occurrence is
//!   cancelled — checked per registration, so a `Monitor` handler observes
//!   cancellation performed by an earlier handler of the same occurrence.
//! - The first fault a callback propagates aborts delivery of that
//!   occurrence to the remaining registrations and is returned to the
//!   publisher. Swallow-policy subscriptions never produce one.
//!
//! ## Locking
//! The registration table is snapshotted (cheap `Arc` clones) before
//! callbacks run, so a handler may add or remove registrations — including
//! unregistering itself — without deadlocking the bus. Such changes take
//! effect from the next `publish`.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bus::registration::{DispatchFn, EventBus, RawRegistration, RegistrationId};
use crate::error::DispatchError;
use crate::events::Event;
use crate::policies::Priority;

struct Slot {
    id: RegistrationId,
    priority: Priority,
    ignore_cancelled: bool,
    callback: DispatchFn,
}

/// Synchronous in-process implementation of [`EventBus`].
#[derive(Default)]
pub struct LocalBus {
    table: RwLock<HashMap<TypeId, Vec<Arc<Slot>>>>,
    next_id: AtomicU64,
}

impl LocalBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bus behind an `Arc<dyn EventBus>`, ready to hand to
    /// [`Subscriptions`](crate::Subscriptions).
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Delivers one occurrence to every matching registration, in priority
    /// order, on the calling thread.
    ///
    /// Returns the first fault propagated by a registration, if any.
    pub fn publish<E: Event>(&self, event: &E) -> Result<(), DispatchError> {
        let slots: Vec<Arc<Slot>> = {
            let table = self.table.read();
            match table.get(&TypeId::of::<E>()) {
                Some(slots) => slots.clone(),
                None => return Ok(()),
            }
        };

        for slot in slots {
            if slot.ignore_cancelled
                && event.as_cancellable().is_some_and(|c| c.is_cancelled())
            {
                continue;
            }
            (slot.callback)(event)?;
        }
        Ok(())
    }

    /// Returns the number of live registrations for event type `E`.
    pub fn registration_count<E: Event>(&self) -> usize {
        self.table
            .read()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl EventBus for LocalBus {
    fn add_registration(&self, registration: RawRegistration) -> RegistrationId {
        let id = RegistrationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let slot = Arc::new(Slot {
            id,
            priority: registration.priority,
            ignore_cancelled: registration.ignore_cancelled,
            callback: registration.callback,
        });

        let mut table = self.table.write();
        let slots = table.entry(registration.type_id).or_default();
        slots.push(slot);
        // Stable sort: equal priorities keep registration order.
        slots.sort_by_key(|s| (s.priority, s.id.0));
        id
    }

    fn remove_registration(&self, id: RegistrationId) {
        let mut table = self.table.write();
        for slots in table.values_mut() {
            slots.retain(|s| s.id != id);
        }
        table.retain(|_, slots| !slots.is_empty());
    }
}
