//! # Lifecycle registry: owners, bulk teardown, global interceptors.
//!
//! [`Registry`] is an explicit object constructed once per process (or per
//! test) and shared by `Arc` — deliberately not a global static, so isolated
//! registries stay possible and nothing couples through hidden module state.
//!
//! It owns three things:
//! - the per-owner tables of live [`Subscription`] handles, fed by
//!   `register()` and drained by [`Registry::shutdown`];
//! - the process-wide list of global [`Interceptor`]s, appended at
//!   initialization and snapshotted by every dispatch;
//! - the diagnostics [`Audit`] map of debug-enabled registrations.
//!
//! ## Owners
//! An [`Owner`] is a copyable token standing in for the module that owns a
//! set of subscriptions (the host's "owner context"). The owning module's
//! own teardown hook calls `shutdown(owner)`; every subscription bound to
//! that owner is unregistered and the slot removed. A second `shutdown` is a
//! no-op. In-flight dispatches are not interrupted — they complete, and
//! future occurrences are rejected by each subscription's tombstone.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::diagnostics::Audit;
use crate::dispatch::Subscription;
use crate::policies::Interceptor;

/// Copyable token identifying one owner of subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Owner {
    id: u64,
}

struct OwnerSlot {
    label: Arc<str>,
    subscriptions: Vec<Subscription>,
}

/// Process-wide lifecycle registry.
pub struct Registry {
    owners: Mutex<HashMap<u64, OwnerSlot>>,
    global: RwLock<Vec<Arc<dyn Interceptor>>>,
    audit: Audit,
    next_owner: AtomicU64,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            owners: Mutex::new(HashMap::new()),
            global: RwLock::new(Vec::new()),
            audit: Audit::new(),
            next_owner: AtomicU64::new(0),
        })
    }

    /// Mints a new owner token. The label appears in shutdown logs only.
    pub fn owner(&self, label: impl Into<Arc<str>>) -> Owner {
        let id = self.next_owner.fetch_add(1, Ordering::Relaxed);
        self.owners.lock().insert(
            id,
            OwnerSlot {
                label: label.into(),
                subscriptions: Vec::new(),
            },
        );
        Owner { id }
    }

    /// Binds a live subscription to its owner (thread-safe append).
    ///
    /// Called by `SubscriptionBuilder::register`. Binding to an owner token
    /// this registry never minted (or already shut down) is accepted but
    /// such subscriptions can only be torn down through their own handles.
    ///
    /// Handles that unregistered themselves in the meantime (`once`, expiry)
    /// are pruned here, so an owner that keeps registering does not
    /// accumulate dead entries between shutdowns.
    pub fn bind(&self, owner: Owner, subscription: Subscription) {
        let mut owners = self.owners.lock();
        let slot = owners.entry(owner.id).or_insert_with(|| OwnerSlot {
            label: Arc::from("unknown"),
            subscriptions: Vec::new(),
        });
        slot.subscriptions.retain(Subscription::is_active);
        slot.subscriptions.push(subscription);
    }

    /// Unregisters every subscription bound to `owner` and removes its slot
    /// from the table, so dynamically minted owners do not accumulate.
    ///
    /// Idempotent and infallible: a second call finds nothing to do, and
    /// unregistration itself never panics. Safe to race with in-flight
    /// dispatches (cooperative cancellation).
    pub fn shutdown(&self, owner: Owner) {
        let slot = self.owners.lock().remove(&owner.id);

        if let Some(slot) = slot {
            if !slot.subscriptions.is_empty() {
                tracing::debug!(
                    owner = %slot.label,
                    count = slot.subscriptions.len(),
                    "owner shutdown, unregistering subscriptions"
                );
            }
            for subscription in slot.subscriptions {
                subscription.unregister();
            }
        }
    }

    /// Returns the number of live subscriptions currently bound to `owner`.
    pub fn subscription_count(&self, owner: Owner) -> usize {
        self.owners
            .lock()
            .get(&owner.id)
            .map_or(0, |slot| slot.subscriptions.len())
    }

    /// Appends a global interceptor. Intended for process/module
    /// initialization; interceptors cannot be removed.
    pub fn add_interceptor(&self, interceptor: Arc<dyn Interceptor>) {
        self.global.write().push(interceptor);
    }

    /// Returns a snapshot of the global interceptors, in registration order.
    /// The snapshot is immutable; later appends do not affect it.
    pub fn interceptors(&self) -> Vec<Arc<dyn Interceptor>> {
        self.global.read().clone()
    }

    /// The registration-source audit map.
    pub fn audit(&self) -> &Audit {
        &self.audit
    }
}
