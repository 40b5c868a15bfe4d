//! # Crate entry point: bus + registry pair.
//!
//! [`Subscriptions`] bundles the host [`EventBus`] with a [`Registry`] and
//! hands out [`SubscriptionBuilder`]s. One instance per bus is the normal
//! shape; tests create as many isolated pairs as they need.

use std::sync::Arc;

use crate::bus::EventBus;
use crate::dispatch::SubscriptionBuilder;
use crate::error::HandlerError;
use crate::events::Event;
use crate::registry::Registry;

/// Entry point for building subscriptions against one bus.
pub struct Subscriptions {
    bus: Arc<dyn EventBus>,
    registry: Arc<Registry>,
}

impl Subscriptions {
    /// Creates a subscription surface with a fresh [`Registry`].
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self {
            bus,
            registry: Registry::new(),
        }
    }

    /// Creates a subscription surface sharing an existing registry, so
    /// several buses can be torn down through one set of owners.
    pub fn with_registry(bus: Arc<dyn EventBus>, registry: Arc<Registry>) -> Self {
        Self { bus, registry }
    }

    /// The lifecycle registry backing this surface.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// The bus subscriptions register against.
    pub fn bus(&self) -> &Arc<dyn EventBus> {
        &self.bus
    }

    /// Starts a builder for a typed handler of `E`.
    ///
    /// Nothing is registered until
    /// [`register`](SubscriptionBuilder::register) is called.
    pub fn listen<E, F>(&self, handler: F) -> SubscriptionBuilder<E>
    where
        E: Event,
        F: Fn(&E) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        SubscriptionBuilder::new(
            Arc::clone(&self.bus),
            Arc::clone(&self.registry),
            Box::new(handler),
        )
    }
}
