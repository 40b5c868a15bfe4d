//! # Thread-local call-stack tracing.
//!
//! Each thread keeps its own LIFO stack of stage labels describing where
//! dispatch currently is ("handler", "database-save", ...). The stack is
//! strictly thread-local: it is never read or written cross-thread, so no
//! synchronization is involved.
//!
//! ## Exception safety
//! [`enter`] returns an RAII [`TraceGuard`]; the pop happens in its `Drop`,
//! which also runs during unwinding. A panicking handler therefore cannot
//! leave a stale frame behind for a thread that the host's pool later
//! reuses.
//!
//! ## Example
//! ```rust
//! use eventry::diagnostics::trace;
//!
//! let _outer = trace::enter("handler");
//! {
//!     let _inner = trace::enter("database-save");
//!     assert_eq!(trace::dump(), "database-save -> handler");
//! }
//! assert_eq!(trace::dump(), "handler");
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static TRACE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// RAII frame on the calling thread's trace stack.
///
/// Not `Send`: the guard must be dropped on the thread that created it.
#[must_use = "the stage is popped when the guard drops"]
pub struct TraceGuard {
    // *const () keeps the guard !Send and !Sync.
    _not_send: PhantomData<*const ()>,
}

/// Pushes a stage label onto the calling thread's stack.
pub fn enter(stage: &'static str) -> TraceGuard {
    TRACE.with(|t| t.borrow_mut().push(stage));
    TraceGuard {
        _not_send: PhantomData,
    }
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        TRACE.with(|t| {
            t.borrow_mut().pop();
        });
    }
}

/// Renders the calling thread's stack, most recent stage first, joined with
/// `" -> "`. Empty string when no stage is active.
pub fn dump() -> String {
    TRACE.with(|t| {
        t.borrow()
            .iter()
            .rev()
            .copied()
            .collect::<Vec<_>>()
            .join(" -> ")
    })
}

/// Returns the number of active stages on the calling thread.
pub fn depth() -> usize {
    TRACE.with(|t| t.borrow().len())
}
