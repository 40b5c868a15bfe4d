//! # Subscription building, configuration and per-occurrence dispatch.
//!
//! The center of the engine:
//! - [`SubscriptionBuilder`] — fluent DSL; `register()` freezes a
//!   [`DispatchConfig`](config::DispatchConfig) snapshot and wires everything
//!   up;
//! - [`DispatchExecutor`](executor::DispatchExecutor) — enforces the frozen
//!   policy on every occurrence the host bus delivers;
//! - [`Subscription`] — the caller-facing handle
//!   (`unregister`/`is_active`/`call_count`).
//!
//! ```text
//! listen::<E>(handler) ─► SubscriptionBuilder ─ register() ─► Subscription
//!                                  │                               ▲
//!                                  ├── DispatchConfig (frozen)     │ shared state
//!                                  └── DispatchExecutor ───────────┘
//!                                        ▲
//!                        host bus ── execute(&E) per occurrence
//! ```

mod builder;
mod config;
mod executor;
mod subscription;

pub use builder::SubscriptionBuilder;
pub use config::ExceptionHandlerFn;
pub use executor::Handler;
pub use subscription::Subscription;
