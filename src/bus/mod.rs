//! # Host-bus seam and the in-process reference bus.
//!
//! The engine consumes event delivery through the [`EventBus`] trait and
//! ships [`LocalBus`] as the synchronous in-process implementation.
//!
//! ```text
//! publisher ── publish(&E) ──► LocalBus ── priority order ──► DispatchFn
//!                                                               │
//!                              embedder's own EventBus ─────────┘
//!                              (same callbacks, host threads)
//! ```

mod local;
mod registration;

pub use local::LocalBus;
pub use registration::{DispatchFn, EventBus, RawRegistration, RegistrationId};
