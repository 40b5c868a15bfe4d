//! # Diagnostics: call-stack tracing and registration auditing.
//!
//! Consumed by the dispatch executor; independent of everything else.
//!
//! - [`trace`] — thread-local stage stack with RAII frames. Answers "where
//!   inside dispatch is this thread right now?"
//! - [`Audit`] — concurrent map from [`EventKey`](crate::EventKey) to the
//!   source labels that registered debug-enabled handlers for it. Answers
//!   "who listens to this event type?"
//!
//! Log output (per-dispatch timing, swallowed faults) goes through
//! [`tracing`]; install a `tracing-subscriber` in the host to see it.

mod debug;
pub mod trace;

pub use debug::Audit;
pub(crate) use debug::{log_dispatch, log_fault};
pub use trace::TraceGuard;
