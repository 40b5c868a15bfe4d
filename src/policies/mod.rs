//! # Policy value objects supplied by callers.
//!
//! Everything a subscription's behavior is configured with, independent of
//! the machinery that enforces it:
//!
//! | Unit                | Shape                      | Effect                                   |
//! |---------------------|----------------------------|------------------------------------------|
//! | [`Priority`]        | ordered enum               | delivery order on the bus                |
//! | [`FilterFn`]        | predicate over `&E`        | AND-gated handler execution              |
//! | [`Interceptor`]     | before/after/on_error      | cross-cutting observation                |
//! | [`Pipeline`]        | typed pre/post pair        | veto + post side effect                  |
//! | [`ExceptionPolicy`] | swallow / propagate        | final fault disposition                  |
//!
//! The enforcement order is fixed by the dispatch executor; see
//! [`dispatch`](crate::dispatch).

mod exception;
mod filter;
mod interceptor;
mod pipeline;
mod priority;

pub use exception::ExceptionPolicy;
pub use filter::{filters, FilterFn};
pub use interceptor::Interceptor;
pub use pipeline::Pipeline;
pub use priority::Priority;
