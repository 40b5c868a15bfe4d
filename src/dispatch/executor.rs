//! # Per-subscription dispatch executor.
//!
//! One [`DispatchExecutor`] is wired per registered subscription. The host
//! bus calls [`DispatchExecutor::execute`] for each matching occurrence, on
//! whatever thread the host chose, possibly concurrently for different
//! occurrences of the same subscription.
//!
//! ## The dispatch pipeline
//! ```text
//! execute(e)
//!   ├─ tombstone set? ──────────────► return (no-op)
//!   ├─ expiry deadline passed? ─────► unregister, return
//!   ├─ global.before, local.before
//!   ├─ pipeline.pre (any false ────► silent abort, still active)
//!   ├─ filters, AND (any false ────► silent abort, still active)
//!   ├─ cooldown gate (too soon ────► silent drop, uncounted)
//!   ├─ invocation slot (limit full ► silent skip)
//!   ├─ handler(e)            [trace frame "handler", RAII]
//!   ├─ count++, stamp cooldown clock, force-cancel?
//!   ├─ pipeline.post, local.after, global.after
//!   ├─ debug? log (key, elapsed)
//!   └─ limit reached? ──────────────► unregister
//!
//! any fault (handler Err, or panic in the stages above):
//!   local.on_error → global.on_error → custom handler | policy
//! ```
//!
//! A silent abort (veto, rejection, cooldown drop) produces no handler call,
//! no `post`, no `after`, no log, no counter change and no error; the
//! subscription stays active. A fault never changes the subscription's
//! state either — only expiry, the execution limit and explicit
//! unregistration do.
//!
//! ## Concurrency
//! State shared across delivering threads lives in atomics and a mutex (see
//! [`SubscriptionState`]); the executor itself holds only frozen config.
//! Panic isolation uses `catch_unwind`, and the trace frame is an RAII guard,
//! so a failing handler unwinds cleanly without poisoning the thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::diagnostics;
use crate::dispatch::config::DispatchConfig;
use crate::dispatch::subscription::SubscriptionState;
use crate::error::{DispatchError, HandlerError};
use crate::events::{DispatchContext, Event};
use crate::policies::Interceptor;
use crate::registry::Registry;

/// Boxed user handler for occurrences of type `E`.
pub type Handler<E> = Box<dyn Fn(&E) -> Result<(), HandlerError> + Send + Sync>;

/// Runtime callback enforcing one subscription's execution policy.
pub(crate) struct DispatchExecutor<E: Event> {
    config: DispatchConfig<E>,
    handler: Handler<E>,
    registry: Arc<Registry>,
    state: Arc<SubscriptionState>,
}

impl<E: Event> DispatchExecutor<E> {
    pub(crate) fn new(
        config: DispatchConfig<E>,
        handler: Handler<E>,
        registry: Arc<Registry>,
        state: Arc<SubscriptionState>,
    ) -> Self {
        Self {
            config,
            handler,
            registry,
            state,
        }
    }

    /// Runs the full policy pipeline for one occurrence.
    ///
    /// `Err` means a fault reached the end of the disposition chain with
    /// [`ExceptionPolicy::Propagate`](crate::ExceptionPolicy::Propagate) and
    /// no custom handler; it is the host bus caller's to deal with.
    pub(crate) fn execute(&self, event: &E) -> Result<(), DispatchError> {
        if !self.state.is_active() {
            return Ok(());
        }

        if let Some(deadline) = self.config.expires_at {
            if Instant::now() >= deadline {
                self.state.unregister();
                return Ok(());
            }
        }

        let ctx = DispatchContext::new(event, self.state.key());
        // One snapshot per dispatch: before/after/on_error all see the same
        // global interceptor set even if the registry changes mid-flight.
        let globals = self.registry.interceptors();

        match panic::catch_unwind(AssertUnwindSafe(|| self.run(event, &ctx, &globals))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(fault)) => self.dispose(event, &ctx, &globals, fault),
            Err(payload) => {
                let fault = DispatchError::panicked(self.state.key(), payload);
                self.dispose(event, &ctx, &globals, fault)
            }
        }
    }

    fn run(
        &self,
        event: &E,
        ctx: &DispatchContext<'_>,
        globals: &[Arc<dyn Interceptor>],
    ) -> Result<(), DispatchError> {
        for i in globals {
            i.before(ctx);
        }
        for i in &self.config.interceptors {
            i.before(ctx);
        }

        for pipeline in &self.config.pipelines {
            if !pipeline.pre(event, ctx) {
                return Ok(());
            }
        }

        for filter in &self.config.filters {
            if !filter(event) {
                return Ok(());
            }
        }

        if let Some(cooldown) = self.config.cooldown {
            if let Some(last) = self.state.last_success() {
                if Instant::now().duration_since(last) < cooldown {
                    return Ok(());
                }
            }
        }

        // Limited subscriptions claim an invocation slot before the handler
        // runs, so concurrent or reentrant deliveries cannot push the number
        // of successful calls past the limit.
        let slot = match self.config.limit {
            Some(limit) => match ExecutionSlot::claim(&self.state, u64::from(limit)) {
                Some(slot) => Some(slot),
                None => return Ok(()),
            },
            None => None,
        };

        {
            let _frame = diagnostics::trace::enter("handler");
            (self.handler)(event)
                .map_err(|source| DispatchError::handler(self.state.key(), source))?;
        }

        let calls = self.state.record_success(Instant::now());
        if let Some(slot) = slot {
            slot.commit();
        }

        if self.config.force_cancel {
            if let Some(cancellable) = event.as_cancellable() {
                cancellable.set_cancelled(true);
            }
        }

        for pipeline in &self.config.pipelines {
            pipeline.post(event, ctx);
        }
        for i in &self.config.interceptors {
            i.after(ctx);
        }
        for i in globals {
            i.after(ctx);
        }

        if self.config.debug {
            diagnostics::log_dispatch(self.state.key(), ctx.elapsed_nanos());
        }

        if let Some(limit) = self.config.limit {
            if calls >= u64::from(limit) {
                self.state.unregister();
            }
        }

        Ok(())
    }

    /// Fault path: `on_error` exactly once per interceptor (local, then
    /// global), then one disposition — custom handler, or the policy.
    fn dispose(
        &self,
        event: &E,
        ctx: &DispatchContext<'_>,
        globals: &[Arc<dyn Interceptor>],
        fault: DispatchError,
    ) -> Result<(), DispatchError> {
        for i in &self.config.interceptors {
            i.on_error(ctx, &fault);
        }
        for i in globals {
            i.on_error(ctx, &fault);
        }

        if let Some(custom) = &self.config.exception_handler {
            custom(event, &fault);
            return Ok(());
        }

        if self.config.policy.catches() {
            diagnostics::log_fault(self.state.key(), &fault);
            Ok(())
        } else {
            Err(fault)
        }
    }
}

/// Claimed invocation slot of a limited subscription.
///
/// Released on drop unless committed, so a handler fault or a panic
/// unwinding through `run` frees the slot for a later occurrence (faults are
/// uncounted).
struct ExecutionSlot<'a> {
    state: &'a SubscriptionState,
    committed: bool,
}

impl<'a> ExecutionSlot<'a> {
    fn claim(state: &'a SubscriptionState, limit: u64) -> Option<Self> {
        state.try_reserve(limit).then(|| Self {
            state,
            committed: false,
        })
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for ExecutionSlot<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.state.release_reservation();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::bus::LocalBus;
    use crate::diagnostics::trace;
    use crate::events::{Cancellable, DispatchContext, Event};
    use crate::policies::{ExceptionPolicy, Interceptor, Pipeline, Priority};
    use crate::registry::Owner;
    use crate::subscriptions::Subscriptions;
    use crate::DispatchError;

    struct Ping;
    impl Event for Ping {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Damage {
        amount: u32,
        cancelled: AtomicBool,
    }
    impl Damage {
        fn of(amount: u32) -> Self {
            Self {
                amount,
                cancelled: AtomicBool::new(false),
            }
        }
    }
    impl Event for Damage {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_cancellable(&self) -> Option<&dyn Cancellable> {
            Some(self)
        }
    }
    impl Cancellable for Damage {
        fn is_cancelled(&self) -> bool {
            self.cancelled.load(Ordering::Acquire)
        }
        fn set_cancelled(&self, cancelled: bool) {
            self.cancelled.store(cancelled, Ordering::Release);
        }
    }

    fn setup() -> (Arc<LocalBus>, Subscriptions, Owner) {
        let bus = LocalBus::shared();
        let subs = Subscriptions::new(bus.clone());
        let owner = subs.registry().owner("test");
        (bus, subs, owner)
    }

    /// Records hook invocations in order.
    struct Recorder {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }
    impl Recorder {
        fn push(&self, hook: &str) {
            self.log.lock().unwrap().push(format!("{}.{}", self.tag, hook));
        }
    }
    impl Interceptor for Recorder {
        fn before(&self, _ctx: &DispatchContext<'_>) {
            self.push("before");
        }
        fn after(&self, _ctx: &DispatchContext<'_>) {
            self.push("after");
        }
        fn on_error(&self, _ctx: &DispatchContext<'_>, _error: &DispatchError) {
            self.push("on_error");
        }
    }

    struct Veto {
        open: AtomicBool,
        posts: AtomicUsize,
    }
    impl Pipeline<Ping> for Veto {
        fn pre(&self, _event: &Ping, _ctx: &DispatchContext<'_>) -> bool {
            self.open.load(Ordering::Acquire)
        }
        fn post(&self, _event: &Ping, _ctx: &DispatchContext<'_>) {
            self.posts.fetch_add(1, Ordering::AcqRel);
        }
    }

    #[test]
    fn test_scenario_limit_two() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .limit(2)
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        bus.publish(&Ping).unwrap();
        assert!(!sub.is_active(), "unregistered right after the 2nd call");

        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 2);
        assert_eq!(sub.call_count(), 2);
    }

    #[test]
    fn test_scenario_cooldown() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .cooldown(Duration::from_millis(100))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap(); // t=0: accepted
        std::thread::sleep(Duration::from_millis(50));
        bus.publish(&Ping).unwrap(); // t=50: dropped
        std::thread::sleep(Duration::from_millis(100));
        bus.publish(&Ping).unwrap(); // t=150: accepted

        assert_eq!(hits.load(Ordering::Acquire), 2);
        // Drops are uncounted and leave the subscription active.
        assert_eq!(sub.call_count(), 2);
        assert!(sub.is_active());
    }

    #[test]
    fn test_cooldown_measured_from_last_accepted() {
        let (bus, subs, owner) = setup();

        let sub = subs
            .listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .cooldown(Duration::from_millis(80))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap(); // accepted
        std::thread::sleep(Duration::from_millis(50));
        bus.publish(&Ping).unwrap(); // dropped; must not extend the window
        std::thread::sleep(Duration::from_millis(40));
        bus.publish(&Ping).unwrap(); // 90ms after the accepted one

        assert_eq!(sub.call_count(), 2);
    }

    #[test]
    fn test_scenario_pipeline_veto() {
        let (bus, subs, owner) = setup();
        let log = Arc::new(Mutex::new(Vec::new()));
        let veto = Arc::new(Veto {
            open: AtomicBool::new(false),
            posts: AtomicUsize::new(0),
        });
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .pipeline(Arc::clone(&veto) as Arc<dyn Pipeline<Ping>>)
            .intercept(Arc::new(Recorder {
                tag: "local",
                log: Arc::clone(&log),
            }))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 0, "handler not called");
        assert_eq!(veto.posts.load(Ordering::Acquire), 0, "post not called");
        assert_eq!(
            *log.lock().unwrap(),
            vec!["local.before"],
            "after not called on veto"
        );
        assert_eq!(sub.call_count(), 0);
        assert!(sub.is_active(), "veto leaves the subscription active");

        // Next occurrence goes through once the gate opens.
        veto.open.store(true, Ordering::Release);
        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 1);
        assert_eq!(veto.posts.load(Ordering::Acquire), 1);
    }

    #[test]
    fn test_scenario_propagate_keeps_subscription_active() {
        let (bus, subs, owner) = setup();
        let log = Arc::new(Mutex::new(Vec::new()));

        let fails = Arc::new(AtomicBool::new(true));
        let fails2 = Arc::clone(&fails);
        let sub = subs
            .listen::<Ping, _>(move |_| {
                if fails2.load(Ordering::Acquire) {
                    Err("boom".into())
                } else {
                    Ok(())
                }
            })
            .owner(owner)
            .policy(ExceptionPolicy::Propagate)
            .intercept(Arc::new(Recorder {
                tag: "local",
                log: Arc::clone(&log),
            }))
            .register()
            .unwrap();
        subs.registry().add_interceptor(Arc::new(Recorder {
            tag: "global",
            log: Arc::clone(&log),
        }));

        let err = bus.publish(&Ping).unwrap_err();
        assert_eq!(err.as_label(), "dispatch_handler_failed");
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "global.before",
                "local.before",
                "local.on_error",
                "global.on_error"
            ]
        );
        assert!(sub.is_active(), "a single failure does not unregister");
        assert_eq!(sub.call_count(), 0, "faults are not counted");

        fails.store(false, Ordering::Release);
        bus.publish(&Ping).unwrap();
        assert_eq!(sub.call_count(), 1);
    }

    #[test]
    fn test_swallow_policy_reports_success_to_publisher() {
        let (bus, subs, owner) = setup();
        let errors = Arc::new(AtomicUsize::new(0));
        let errors2 = Arc::clone(&errors);

        struct CountErrors(Arc<AtomicUsize>);
        impl Interceptor for CountErrors {
            fn on_error(&self, _ctx: &DispatchContext<'_>, _error: &DispatchError) {
                self.0.fetch_add(1, Ordering::AcqRel);
            }
        }

        let sub = subs
            .listen::<Ping, _>(|_| Err("swallowed".into()))
            .owner(owner)
            .intercept(Arc::new(CountErrors(errors2)))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        assert_eq!(errors.load(Ordering::Acquire), 1, "on_error exactly once");
        assert!(sub.is_active());
    }

    #[test]
    fn test_custom_exception_handler_wins_over_policy() {
        let (bus, subs, owner) = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::clone(&seen);

        subs.listen::<Ping, _>(|_| Err("custom".into()))
            .owner(owner)
            .policy(ExceptionPolicy::Propagate)
            .exception_handler(move |_ev, err| {
                seen2.lock().unwrap().push(err.as_label());
            })
            .register()
            .unwrap();

        // Custom handler consumes the fault even under Propagate.
        bus.publish(&Ping).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["dispatch_handler_failed"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let sub = subs
            .listen::<Damage, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .filter(|d: &Damage| d.amount > 5)
            .filter(|d: &Damage| d.amount < 20)
            .register()
            .unwrap();

        bus.publish(&Damage::of(3)).unwrap(); // first filter rejects
        bus.publish(&Damage::of(50)).unwrap(); // second filter rejects
        bus.publish(&Damage::of(10)).unwrap(); // both pass

        assert_eq!(hits.load(Ordering::Acquire), 1);
        assert_eq!(sub.call_count(), 1);
        assert!(sub.is_active(), "rejections are silent, state untouched");
    }

    #[test]
    fn test_expiry_unregisters_before_anything_runs() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);
        let log = Arc::new(Mutex::new(Vec::new()));

        let sub = subs
            .listen::<Ping, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .expire_after(Duration::from_millis(40))
            .intercept(Arc::new(Recorder {
                tag: "local",
                log: Arc::clone(&log),
            }))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 1);

        std::thread::sleep(Duration::from_millis(60));
        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 1, "expired: handler skipped");
        assert!(!sub.is_active());
        // The expired dispatch ran no hooks at all.
        assert_eq!(log.lock().unwrap().len(), 2, "only the first dispatch logged");
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let (bus, subs, owner) = setup();
        let sub = subs
            .listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        sub.unregister();
        sub.unregister();
        assert!(!sub.is_active());
        assert_eq!(sub.call_count(), 1, "count frozen after unregister");

        bus.publish(&Ping).unwrap();
        assert_eq!(sub.call_count(), 1);
    }

    #[test]
    fn test_force_cancel_marks_occurrence() {
        let (bus, subs, owner) = setup();

        subs.listen::<Damage, _>(|_| Ok(()))
            .owner(owner)
            .cancel(true)
            .register()
            .unwrap();

        let ev = Damage::of(7);
        bus.publish(&ev).unwrap();
        assert!(ev.is_cancelled());
    }

    #[test]
    fn test_global_interceptors_wrap_local() {
        let (bus, subs, owner) = setup();
        let log = Arc::new(Mutex::new(Vec::new()));

        subs.registry().add_interceptor(Arc::new(Recorder {
            tag: "global",
            log: Arc::clone(&log),
        }));
        subs.listen::<Ping, _>(|_| Ok(()))
            .owner(owner)
            .intercept(Arc::new(Recorder {
                tag: "local",
                log: Arc::clone(&log),
            }))
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "global.before",
                "local.before",
                "local.after",
                "global.after"
            ]
        );
    }

    #[test]
    fn test_panicking_handler_leaves_no_trace_frame() {
        let (bus, subs, owner) = setup();

        let sub = subs
            .listen::<Ping, _>(|_| panic!("handler exploded"))
            .owner(owner)
            .register()
            .unwrap();

        // Default policy swallows: publisher sees success.
        bus.publish(&Ping).unwrap();
        assert_eq!(trace::depth(), 0, "RAII frame popped during unwind");
        assert!(sub.is_active());
        assert_eq!(sub.call_count(), 0);
    }

    #[test]
    fn test_panicking_handler_propagates_as_fault() {
        let (bus, subs, owner) = setup();

        subs.listen::<Ping, _>(|_| panic!("no mercy"))
            .owner(owner)
            .policy(ExceptionPolicy::Propagate)
            .register()
            .unwrap();

        let err = bus.publish(&Ping).unwrap_err();
        assert_eq!(err.as_label(), "dispatch_panicked");
        assert!(err.to_string().contains("no mercy"));
    }

    #[test]
    fn test_once_registration_under_concurrent_delivery() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                hits2.fetch_add(1, Ordering::AcqRel);
                Ok(())
            })
            .owner(owner)
            .once()
            .register()
            .unwrap();

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let bus = Arc::clone(&bus);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        bus.publish(&Ping).unwrap();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        // Slot reservation bounds invocations even when deliveries race
        // past the tombstone check together.
        assert!(!sub.is_active());
        assert_eq!(hits.load(Ordering::Acquire), 1);
        assert_eq!(sub.call_count(), 1);
    }

    #[test]
    fn test_limit_holds_under_reentrant_publish() {
        let (bus, subs, owner) = setup();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);
        let bus2 = Arc::clone(&bus);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                // Republishing from inside the handler hits the executor
                // again before this invocation has been counted.
                if hits2.fetch_add(1, Ordering::AcqRel) == 0 {
                    bus2.publish(&Ping)?;
                }
                Ok(())
            })
            .owner(owner)
            .once()
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap();
        assert_eq!(hits.load(Ordering::Acquire), 1);
        assert_eq!(sub.call_count(), 1);
        assert!(!sub.is_active());
    }

    #[test]
    fn test_faulted_invocation_releases_its_slot() {
        let (bus, subs, owner) = setup();
        let attempts = Arc::new(AtomicUsize::new(0));
        let attempts2 = Arc::clone(&attempts);

        let sub = subs
            .listen::<Ping, _>(move |_| {
                if attempts2.fetch_add(1, Ordering::AcqRel) == 0 {
                    return Err("first try fails".into());
                }
                Ok(())
            })
            .owner(owner)
            .once()
            .register()
            .unwrap();

        bus.publish(&Ping).unwrap(); // fault, swallowed, slot released
        assert!(sub.is_active());
        bus.publish(&Ping).unwrap(); // succeeds, consumes the limit
        assert_eq!(sub.call_count(), 1);
        assert!(!sub.is_active());
    }

    #[test]
    fn test_priority_orders_subscriptions() {
        let (bus, subs, owner) = setup();
        let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        for (tag, priority) in [
            ("monitor", Priority::Monitor),
            ("low", Priority::Low),
            ("high", Priority::High),
        ] {
            let log = Arc::clone(&log);
            subs.listen::<Ping, _>(move |_| {
                log.lock().unwrap().push(tag);
                Ok(())
            })
            .owner(owner)
            .priority(priority)
            .register()
            .unwrap();
        }

        bus.publish(&Ping).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["low", "high", "monitor"]);
    }
}
