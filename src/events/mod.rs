//! # Occurrence model: event traits, type keys, dispatch context.
//!
//! Leaf module of the engine. Everything here is value-level and carries no
//! dispatch behavior:
//! - [`Event`] / [`Cancellable`] — what the host bus delivers;
//! - [`EventKey`] — stable identity of an event type (diagnostics grouping,
//!   map keys);
//! - [`DispatchContext`] — the per-occurrence view handed to interceptors
//!   and pipelines.

mod context;
mod event;
mod key;

pub use context::DispatchContext;
pub use event::{Cancellable, Event};
pub use key::EventKey;
