//! # Registration audit map and dispatch log helpers.
//!
//! [`Audit`] answers "who registered a handler for this event type?" — every
//! debug-enabled registration records its source label here, grouped by
//! [`EventKey`]. The map is owned by the [`Registry`](crate::Registry), not a
//! process-wide static, so isolated registries in tests get isolated audit
//! trees.
//!
//! The free functions are pure logging/formatting helpers over [`tracing`]
//! with no state of their own.

use std::collections::{BTreeSet, HashMap};

use parking_lot::Mutex;

use crate::error::DispatchError;
use crate::events::EventKey;

/// Registration-source audit map.
///
/// Concurrent append; sources for one key are kept sorted and deduplicated.
#[derive(Default)]
pub struct Audit {
    tree: Mutex<HashMap<EventKey, BTreeSet<String>>>,
}

impl Audit {
    /// Creates an empty audit map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `source` registered a handler for `key`.
    pub fn record(&self, key: EventKey, source: impl Into<String>) {
        self.tree.lock().entry(key).or_default().insert(source.into());
    }

    /// Renders the audit tree:
    ///
    /// ```text
    /// Event: BlockBreak
    ///   Registered by: src/mining.rs:42
    /// Event: PlayerJoin
    ///   Registered by: src/greeter.rs:17
    /// ```
    ///
    /// Events are sorted by short name for stable output; returns
    /// `"No events recorded."` when empty.
    pub fn dump(&self) -> String {
        let tree = self.tree.lock();
        if tree.is_empty() {
            return "No events recorded.".to_string();
        }

        let mut entries: Vec<(&EventKey, &BTreeSet<String>)> = tree.iter().collect();
        entries.sort_by_key(|(key, _)| key.short_name());

        let mut out = String::new();
        for (key, sources) in entries {
            out.push_str("Event: ");
            out.push_str(key.short_name());
            out.push('\n');
            for source in sources {
                out.push_str("  Registered by: ");
                out.push_str(source);
                out.push('\n');
            }
        }
        out
    }

    /// Resets the map.
    pub fn clear(&self) {
        self.tree.lock().clear();
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tree.lock().is_empty()
    }
}

/// Logs one debug-enabled dispatch with its elapsed time.
pub(crate) fn log_dispatch(key: EventKey, elapsed_nanos: u128) {
    tracing::debug!(
        event = key.short_name(),
        elapsed_ns = elapsed_nanos as u64,
        "dispatch complete"
    );
}

/// Logs a fault that the subscription's policy swallowed.
pub(crate) fn log_fault(key: EventKey, error: &DispatchError) {
    tracing::error!(
        event = key.short_name(),
        label = error.as_label(),
        error = %error,
        "handler fault swallowed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use std::any::Any;
    use std::sync::Arc;

    struct BlockBreak;
    impl Event for BlockBreak {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct PlayerJoin;
    impl Event for PlayerJoin {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_dump_format() {
        let audit = Audit::new();
        audit.record(EventKey::of::<PlayerJoin>(), "src/greeter.rs:17");
        audit.record(EventKey::of::<BlockBreak>(), "src/mining.rs:42");
        audit.record(EventKey::of::<BlockBreak>(), "src/mining.rs:42"); // dedup

        let dump = audit.dump();
        let expected = "Event: BlockBreak\n\
                        \x20 Registered by: src/mining.rs:42\n\
                        Event: PlayerJoin\n\
                        \x20 Registered by: src/greeter.rs:17\n";
        assert_eq!(dump, expected);
    }

    #[test]
    fn test_sources_sorted_within_key() {
        let audit = Audit::new();
        audit.record(EventKey::of::<BlockBreak>(), "zeta");
        audit.record(EventKey::of::<BlockBreak>(), "alpha");

        let dump = audit.dump();
        let alpha = dump.find("alpha").unwrap();
        let zeta = dump.find("zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_clear_resets() {
        let audit = Audit::new();
        audit.record(EventKey::of::<BlockBreak>(), "somewhere");
        assert!(!audit.is_empty());
        audit.clear();
        assert!(audit.is_empty());
        assert_eq!(audit.dump(), "No events recorded.");
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;
        fn make_writer(&'a self) -> Capture {
            self.clone()
        }
    }

    #[test]
    fn test_log_lines_reach_installed_subscriber() {
        use crate::bus::LocalBus;
        use crate::subscriptions::Subscriptions;

        let capture = Capture::default();
        let collector = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .without_time()
            .finish();

        tracing::subscriber::with_default(collector, || {
            let bus = LocalBus::shared();
            let subs = Subscriptions::new(bus.clone());
            let owner = subs.registry().owner("logging");

            subs.listen::<BlockBreak, _>(|_| Ok(()))
                .owner(owner)
                .debug_source("src/mining.rs:42")
                .register()
                .unwrap();
            subs.listen::<PlayerJoin, _>(|_| Err("db down".into()))
                .owner(owner)
                .register()
                .unwrap();

            bus.publish(&BlockBreak).unwrap(); // timing line
            bus.publish(&PlayerJoin).unwrap(); // swallowed fault line
        });

        let out = String::from_utf8(capture.0.lock().clone()).unwrap();
        assert!(out.contains("dispatch complete"), "timing log missing: {out}");
        assert!(out.contains("BlockBreak"));
        assert!(out.contains("handler fault swallowed"), "fault log missing: {out}");
        assert!(out.contains("dispatch_handler_failed"));
    }
}
