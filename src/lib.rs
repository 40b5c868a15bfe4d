//! # eventry
//!
//! **Eventry** is a policy-driven event subscription and dispatch library
//! for Rust.
//!
//! It sits between an event source (a "bus") and user handlers, enforcing a
//! per-subscription policy on every delivered occurrence: filters, cooldown,
//! invocation limits, expiry, interceptors, pipelines and fault disposition.
//! The crate is designed as a building block for plugin hosts and modular
//! services that need self-managing listeners.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ Subscription │   │ Subscription │   │ Subscription │
//!     │  Builder #1  │   │  Builder #2  │   │  Builder #3  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ register()       │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Subscriptions (entry point)                                      │
//! │  - EventBus (delivery by priority)                                │
//! │  - Registry (owners, global interceptors, audit)                  │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │ DispatchExec │   │ DispatchExec │   │ DispatchExec │
//!   │ (per-occur.  │   │              │   │              │
//!   │  pipeline)   │   │              │   │              │
//!   └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!          ▼                  ▼                  ▼
//!       handler            handler            handler
//! ```
//!
//! ### Per-occurrence pipeline
//! ```text
//! bus delivers &E to DispatchExecutor::execute
//!   ├─► active? expired?            (tombstone, deadline)
//!   ├─► interceptors.before         (global then local)
//!   ├─► pipelines.pre               (any false ─► veto, silent success)
//!   ├─► filters                     (all must pass)
//!   ├─► cooldown                    (gap since last accepted occurrence)
//!   ├─► handler(&E)                 (under a trace frame, panic-isolated)
//!   │     ├─ Ok  ─► count += 1, force-cancel, pipelines.post,
//!   │     │        interceptors.after (local then global), limit check
//!   │     └─ Err ─► interceptors.on_error (local then global), then
//!   │              exception_handler XOR ExceptionPolicy
//!   └─► Swallow ─► Ok(()) to the publisher; Propagate ─► Err
//! ```
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits                          |
//! |-------------------|----------------------------------------------------------------------|---------------------------------------------|
//! | **Events**        | Type-erased occurrences with optional cancellation.                  | [`Event`], [`Cancellable`], [`EventKey`]    |
//! | **Subscriptions** | Fluent builder and live handle.                                      | [`SubscriptionBuilder`], [`Subscription`]   |
//! | **Policies**      | Filters, interceptors, pipelines, priorities, fault disposition.     | [`Interceptor`], [`Pipeline`], [`Priority`] |
//! | **Lifecycle**     | Owner-scoped bulk teardown, global interceptors.                     | [`Registry`], [`Owner`]                     |
//! | **Bus**           | In-process reference bus plus the trait hosts implement.             | [`EventBus`], [`LocalBus`]                  |
//! | **Diagnostics**   | Thread-local dispatch trace and registration audit.                  | [`diagnostics::trace`], [`Audit`]           |
//! | **Errors**        | Typed errors for configuration and dispatch.                         | [`ConfigError`], [`DispatchError`]          |
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::time::Duration;
//! use eventry::{Event, ExceptionPolicy, LocalBus, Priority, Subscriptions};
//!
//! struct PlayerChat { message: String }
//! impl Event for PlayerChat {
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = LocalBus::shared();
//!     let subs = Subscriptions::new(bus.clone());
//!     let owner = subs.registry().owner("chat-module");
//!
//!     let sub = subs
//!         .listen::<PlayerChat, _>(|ev| {
//!             println!("chat: {}", ev.message);
//!             Ok(())
//!         })
//!         .owner(owner)
//!         .priority(Priority::High)
//!         .filter(|ev: &PlayerChat| !ev.message.is_empty())
//!         .cooldown(Duration::from_millis(100))
//!         .policy(ExceptionPolicy::Swallow)
//!         .register()?;
//!
//!     bus.publish(&PlayerChat { message: "hello".into() })?;
//!     assert_eq!(sub.call_count(), 1);
//!
//!     // Module teardown removes everything the owner registered.
//!     subs.registry().shutdown(owner);
//!     assert!(!sub.is_active());
//!     Ok(())
//! }
//! ```
mod bus;
mod dispatch;
mod error;
mod events;
mod policies;
mod registry;
mod subscriptions;

pub mod diagnostics;

// ---- Public re-exports ----

pub use bus::{DispatchFn, EventBus, LocalBus, RawRegistration, RegistrationId};
pub use diagnostics::Audit;
pub use dispatch::{ExceptionHandlerFn, Handler, Subscription, SubscriptionBuilder};
pub use error::{ConfigError, DispatchError, HandlerError};
pub use events::{Cancellable, DispatchContext, Event, EventKey};
pub use policies::{filters, ExceptionPolicy, FilterFn, Interceptor, Pipeline, Priority};
pub use registry::{Owner, Registry};
pub use subscriptions::Subscriptions;
