//! # Fluent configuration surface for subscriptions.
//!
//! A [`SubscriptionBuilder`] is obtained from
//! [`Subscriptions::listen`](crate::Subscriptions::listen), configured by
//! chaining, and consumed by [`register`](SubscriptionBuilder::register):
//!
//! ```rust
//! use std::any::Any;
//! use eventry::{Event, LocalBus, Subscriptions};
//!
//! struct PlayerJoin { name: String }
//! impl Event for PlayerJoin {
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! let bus = LocalBus::shared();
//! let subs = Subscriptions::new(bus.clone());
//! let owner = subs.registry().owner("greeter");
//!
//! let sub = subs
//!     .listen::<PlayerJoin, _>(|ev| {
//!         println!("welcome, {}", ev.name);
//!         Ok(())
//!     })
//!     .owner(owner)
//!     .filter(|ev: &PlayerJoin| !ev.name.is_empty())
//!     .once()
//!     .register()?;
//!
//! bus.publish(&PlayerJoin { name: "sol".into() })?;
//! assert_eq!(sub.call_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! `register()` snapshots the configuration (the builder is consumed, so no
//! later mutation can reach a live subscription), computes the expiry
//! deadline once, wires the executor, registers the callback on the bus and
//! binds the resulting [`Subscription`] into the owner's registry slot.

use std::panic::Location;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bus::{DispatchFn, EventBus, RawRegistration};
use crate::dispatch::config::{DispatchConfig, ExceptionHandlerFn};
use crate::dispatch::executor::{DispatchExecutor, Handler};
use crate::dispatch::subscription::{Subscription, SubscriptionState};
use crate::error::{ConfigError, DispatchError};
use crate::events::{Event, EventKey};
use crate::policies::{ExceptionPolicy, FilterFn, Interceptor, Pipeline, Priority};
use crate::registry::{Owner, Registry};

/// Chainable configuration for one subscription-to-be.
pub struct SubscriptionBuilder<E: Event> {
    bus: Arc<dyn EventBus>,
    registry: Arc<Registry>,
    handler: Handler<E>,
    owner: Option<Owner>,

    priority: Priority,
    ignore_cancelled: bool,
    force_cancel: bool,
    limit: Option<u32>,
    expiry: Option<Duration>,
    cooldown: Option<Duration>,
    filters: Vec<FilterFn<E>>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    pipelines: Vec<Arc<dyn Pipeline<E>>>,
    exception_handler: Option<ExceptionHandlerFn<E>>,
    policy: ExceptionPolicy,
    debug: bool,
    debug_source: Option<String>,
}

impl<E: Event> SubscriptionBuilder<E> {
    pub(crate) fn new(
        bus: Arc<dyn EventBus>,
        registry: Arc<Registry>,
        handler: Handler<E>,
    ) -> Self {
        Self {
            bus,
            registry,
            handler,
            owner: None,
            priority: Priority::default(),
            ignore_cancelled: false,
            force_cancel: false,
            limit: None,
            expiry: None,
            cooldown: None,
            filters: Vec::new(),
            interceptors: Vec::new(),
            pipelines: Vec::new(),
            exception_handler: None,
            policy: ExceptionPolicy::default(),
            debug: false,
            debug_source: None,
        }
    }

    /// Binds the owner whose teardown unregisters this subscription.
    /// Mandatory; `register()` fails without it.
    pub fn owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the delivery priority (default [`Priority::Normal`]).
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Skips occurrences that are already cancelled when delivery starts.
    pub fn ignore_cancelled(mut self, value: bool) -> Self {
        self.ignore_cancelled = value;
        self
    }

    /// Cancels the occurrence after every successful handler call (only
    /// effective on occurrences carrying the cancellation capability).
    pub fn cancel(mut self, value: bool) -> Self {
        self.force_cancel = value;
        self
    }

    /// Unregisters after the first successful invocation. Shorthand for
    /// `limit(1)`.
    pub fn once(self) -> Self {
        self.limit(1)
    }

    /// Caps successful invocations at `count`; the subscription unregisters
    /// itself immediately after the `count`-th. `0` means unlimited.
    pub fn limit(mut self, count: u32) -> Self {
        self.limit = (count > 0).then_some(count);
        self
    }

    /// Auto-unregisters at `now + duration`, evaluated once at `register()`.
    /// The first occurrence at or after the deadline triggers the removal
    /// and is not delivered.
    pub fn expire_after(mut self, duration: Duration) -> Self {
        self.expiry = Some(duration);
        self
    }

    /// Drops (silently, uncounted) occurrences arriving within `duration` of
    /// the last accepted one.
    pub fn cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = Some(duration);
        self
    }

    /// Adds a filter; all filters must pass for the handler to run.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Adds a local interceptor observing this subscription's dispatches.
    pub fn intercept(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Adds a pipeline; its `pre` may veto execution.
    pub fn pipeline(mut self, pipeline: Arc<dyn Pipeline<E>>) -> Self {
        self.pipelines.push(pipeline);
        self
    }

    /// Installs a custom fault handler. Takes precedence over the
    /// [`ExceptionPolicy`]; there is exactly one active disposition.
    pub fn exception_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&E, &DispatchError) + Send + Sync + 'static,
    {
        self.exception_handler = Some(Box::new(handler));
        self
    }

    /// Sets the fallback fault disposition (default
    /// [`ExceptionPolicy::Swallow`]).
    pub fn policy(mut self, policy: ExceptionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables per-dispatch timing logs and records the call site
    /// (`file:line`) in the registry's audit map.
    #[track_caller]
    pub fn debug(mut self) -> Self {
        let caller = Location::caller();
        self.debug = true;
        self.debug_source = Some(format!("{}:{}", caller.file(), caller.line()));
        self
    }

    /// Enables per-dispatch timing logs under an explicit source label.
    pub fn debug_source(mut self, source: impl Into<String>) -> Self {
        self.debug = true;
        self.debug_source = Some(source.into());
        self
    }

    /// Freezes the configuration and registers with the bus.
    ///
    /// Fails fast with [`ConfigError::OwnerNotBound`] when no owner was
    /// bound — an ownerless subscription would survive every
    /// [`Registry::shutdown`] call.
    pub fn register(self) -> Result<Subscription, ConfigError> {
        let key = EventKey::of::<E>();
        let owner = self.owner.ok_or(ConfigError::OwnerNotBound {
            event: key.short_name(),
        })?;

        if let Some(source) = &self.debug_source {
            self.registry.audit().record(key, source.clone());
        }

        let config = DispatchConfig {
            force_cancel: self.force_cancel,
            filters: self.filters,
            interceptors: self.interceptors,
            pipelines: self.pipelines,
            limit: self.limit,
            expires_at: self.expiry.map(|d| Instant::now() + d),
            cooldown: self.cooldown,
            exception_handler: self.exception_handler,
            policy: self.policy,
            debug: self.debug,
        };

        let state = SubscriptionState::new(key, Arc::clone(&self.bus));
        let executor = Arc::new(DispatchExecutor::new(
            config,
            self.handler,
            Arc::clone(&self.registry),
            Arc::clone(&state),
        ));

        let callback: DispatchFn = Box::new(move |occurrence| {
            match occurrence.as_any().downcast_ref::<E>() {
                Some(event) => executor.execute(event),
                // Foreign type: the host over-delivered; not ours.
                None => Ok(()),
            }
        });

        let id = self.bus.add_registration(RawRegistration::new::<E>(
            self.priority,
            self.ignore_cancelled,
            callback,
        ));
        state.bind_registration(id);

        let subscription = Subscription::new(state);
        self.registry.bind(owner, subscription.clone());
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::LocalBus;
    use crate::subscriptions::Subscriptions;
    use std::any::Any;

    struct Ping;
    impl Event for Ping {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_register_without_owner_fails_fast() {
        let subs = Subscriptions::new(LocalBus::shared());
        let err = subs.listen::<Ping, _>(|_| Ok(())).register().unwrap_err();
        assert_eq!(err.as_label(), "config_owner_not_bound");
        assert!(err.to_string().contains("Ping"));
    }

    #[test]
    fn test_limit_zero_means_unlimited() {
        let bus = LocalBus::shared();
        let subs = Subscriptions::new(bus.clone());
        let owner = subs.registry().owner("test");

        let sub = subs
            .listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .limit(0)
            .register()
            .unwrap();

        for _ in 0..5 {
            bus.publish(&Ping).unwrap();
        }
        assert!(sub.is_active());
        assert_eq!(sub.call_count(), 5);
    }

    #[test]
    fn test_debug_records_call_site_in_audit() {
        let subs = Subscriptions::new(LocalBus::shared());
        let owner = subs.registry().owner("test");

        subs.listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .debug()
            .register()
            .unwrap();

        let dump = subs.registry().audit().dump();
        assert!(dump.contains("Event: Ping"));
        assert!(dump.contains("builder.rs:"), "call site recorded: {dump}");
    }

    #[test]
    fn test_debug_source_uses_explicit_label() {
        let subs = Subscriptions::new(LocalBus::shared());
        let owner = subs.registry().owner("test");

        subs.listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .debug_source("greeter-module")
            .register()
            .unwrap();

        let dump = subs.registry().audit().dump();
        assert!(dump.contains("  Registered by: greeter-module"));
    }
}
