//! # Subscription handle and shared runtime state.
//!
//! [`Subscription`] is what callers keep after `register()`: a cheap
//! cloneable handle exposing `unregister` / `is_active` / `call_count`. The
//! handle and the subscription's executor share one [`SubscriptionState`],
//! so state observed through the handle is exactly the state the executor
//! acts on.
//!
//! ## Tombstone semantics
//! `active` starts true and can only ever flip to false — by an explicit
//! `unregister()`, by owner shutdown, or by the executor itself (execution
//! limit reached, expiry passed). Once false, the executor never invokes the
//! handler again on any thread; an in-flight dispatch is not interrupted, it
//! just completes (cooperative cancellation).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use parking_lot::Mutex;

use crate::bus::{EventBus, RegistrationId};
use crate::events::EventKey;

/// Runtime state shared between a [`Subscription`] handle and its executor.
pub(crate) struct SubscriptionState {
    key: EventKey,
    active: AtomicBool,
    calls: AtomicU64,
    reserved: AtomicU64,
    last_success: Mutex<Option<Instant>>,
    bus: Arc<dyn EventBus>,
    registration: OnceLock<RegistrationId>,
}

impl SubscriptionState {
    pub(crate) fn new(key: EventKey, bus: Arc<dyn EventBus>) -> Arc<Self> {
        Arc::new(Self {
            key,
            active: AtomicBool::new(true),
            calls: AtomicU64::new(0),
            reserved: AtomicU64::new(0),
            last_success: Mutex::new(None),
            bus,
            registration: OnceLock::new(),
        })
    }

    /// Binds the raw registration id once the bus has accepted it.
    ///
    /// An occurrence delivered in the window before this call can still flip
    /// the tombstone (e.g. instant expiry); the raw registration then stays
    /// on the bus but its callback is a permanent no-op.
    pub(crate) fn bind_registration(&self, id: RegistrationId) {
        let _ = self.registration.set(id);
        // Unregistered while the id was still unbound: finish the removal.
        if !self.is_active() {
            self.bus.remove_registration(id);
        }
    }

    pub(crate) fn key(&self) -> EventKey {
        self.key
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Acquire)
    }

    /// Counts one successful handler invocation and stamps the cooldown
    /// clock. Returns the new total.
    pub(crate) fn record_success(&self, at: Instant) -> u64 {
        *self.last_success.lock() = Some(at);
        self.calls.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(crate) fn last_success(&self) -> Option<Instant> {
        *self.last_success.lock()
    }

    /// Claims one of `limit` invocation slots. Returns false when all slots
    /// are taken, which means the limit has been reached or enough deliveries
    /// are already in flight (concurrently or reentrantly) to reach it.
    pub(crate) fn try_reserve(&self, limit: u64) -> bool {
        self.reserved
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |reserved| {
                (reserved < limit).then_some(reserved + 1)
            })
            .is_ok()
    }

    /// Releases a slot claimed by [`try_reserve`](Self::try_reserve) whose
    /// handler invocation did not succeed.
    pub(crate) fn release_reservation(&self) {
        self.reserved.fetch_sub(1, Ordering::AcqRel);
    }

    /// Flips the tombstone and removes the raw registration. Idempotent;
    /// never panics.
    pub(crate) fn unregister(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            if let Some(id) = self.registration.get() {
                self.bus.remove_registration(*id);
            }
        }
    }
}

/// Handle to a registered subscription.
///
/// Cloning shares the underlying state; any clone can unregister.
#[derive(Clone)]
pub struct Subscription {
    state: Arc<SubscriptionState>,
}

impl Subscription {
    pub(crate) fn new(state: Arc<SubscriptionState>) -> Self {
        Self { state }
    }

    /// Key of the event type this subscription listens to.
    pub fn key(&self) -> EventKey {
        self.state.key()
    }

    /// Unregisters the subscription.
    ///
    /// Idempotent: the second call observes the tombstone and does nothing.
    /// Never panics. An occurrence being dispatched on another thread
    /// completes; future occurrences are rejected.
    pub fn unregister(&self) {
        self.state.unregister();
    }

    /// Returns true while the subscription can still receive occurrences.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Total successful handler invocations. Monotonic; frozen after
    /// unregistration, never reset.
    pub fn call_count(&self) -> u64 {
        self.state.call_count()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.state.key().short_name())
            .field("active", &self.is_active())
            .field("calls", &self.call_count())
            .finish()
    }
}
