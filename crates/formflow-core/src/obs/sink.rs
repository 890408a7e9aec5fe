//! Metrics sink boundary.
//!
//! Evaluation logic MUST NOT count or log on its own.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! When no scoped sink is installed, events are dropped. Installing a
//! sink is always an explicit, dynamically scoped choice made by the
//! caller via `with_metrics_sink`.

use serde::Serialize;
use std::{
    cell::RefCell,
    sync::atomic::{AtomicU64, Ordering},
};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///
/// One event per evaluation stage, emitted in pipeline order:
/// conditions fold, page projection, navigation, text interpolation.
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ConditionsResolved { rules: u64, matched: u64 },
    PageProjected { fields: u64, skipped: u64 },
    NavigationResolved { complete: bool },
    TextInterpolated { tokens: u64, replaced: u64 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - We materialize only a shared reference (`&dyn MetricsSink`), matching the
        //   original shared borrow used to install the override.
        // - No mutable alias to the same sink is created here.
        //
        // What would break this:
        // - If `with_metrics_sink` failed to restore on all exits (normal + panic),
        //   `ptr` could outlive the borrowed sink and become dangling.
        // - If `record` were changed to store or dispatch asynchronously using `ptr`,
        //   lifetime assumptions would no longer hold.
        unsafe { (&*ptr).record(event) };
    }
}

/// Run a closure with a temporary metrics sink override.
///
/// Evaluation performed inside `f` on this thread reports its events to
/// `sink`. Overrides nest; the previous sink is restored on exit, panic
/// included.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Preconditions:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` always restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    //
    // Aliasing:
    // - We erase lifetime to a raw pointer, but still only expose shared access.
    // - No mutable alias to the same sink is introduced by this conversion.
    //
    // What would break this:
    // - Any async/deferred use of `sink_ptr` beyond this scope.
    // - Any path that bypasses Guard restoration.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// CountingSink
/// Accumulating sink for tests, tooling, and interactive sessions.
/// Thread-safe so a single sink can back a whole walkthrough.
///

#[derive(Debug, Default)]
pub struct CountingSink {
    conditions_resolved: AtomicU64,
    rules_evaluated: AtomicU64,
    rules_matched: AtomicU64,
    pages_projected: AtomicU64,
    fields_projected: AtomicU64,
    fields_skipped: AtomicU64,
    navigations_resolved: AtomicU64,
    completions: AtomicU64,
    texts_interpolated: AtomicU64,
    tokens_seen: AtomicU64,
    tokens_replaced: AtomicU64,
}

impl CountingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conditions_resolved: AtomicU64::new(0),
            rules_evaluated: AtomicU64::new(0),
            rules_matched: AtomicU64::new(0),
            pages_projected: AtomicU64::new(0),
            fields_projected: AtomicU64::new(0),
            fields_skipped: AtomicU64::new(0),
            navigations_resolved: AtomicU64::new(0),
            completions: AtomicU64::new(0),
            texts_interpolated: AtomicU64::new(0),
            tokens_seen: AtomicU64::new(0),
            tokens_replaced: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            conditions_resolved: self.conditions_resolved.load(Ordering::SeqCst),
            rules_evaluated: self.rules_evaluated.load(Ordering::SeqCst),
            rules_matched: self.rules_matched.load(Ordering::SeqCst),
            pages_projected: self.pages_projected.load(Ordering::SeqCst),
            fields_projected: self.fields_projected.load(Ordering::SeqCst),
            fields_skipped: self.fields_skipped.load(Ordering::SeqCst),
            navigations_resolved: self.navigations_resolved.load(Ordering::SeqCst),
            completions: self.completions.load(Ordering::SeqCst),
            texts_interpolated: self.texts_interpolated.load(Ordering::SeqCst),
            tokens_seen: self.tokens_seen.load(Ordering::SeqCst),
            tokens_replaced: self.tokens_replaced.load(Ordering::SeqCst),
        }
    }
}

impl MetricsSink for CountingSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ConditionsResolved { rules, matched } => {
                self.conditions_resolved.fetch_add(1, Ordering::SeqCst);
                self.rules_evaluated.fetch_add(rules, Ordering::SeqCst);
                self.rules_matched.fetch_add(matched, Ordering::SeqCst);
            }
            MetricsEvent::PageProjected { fields, skipped } => {
                self.pages_projected.fetch_add(1, Ordering::SeqCst);
                self.fields_projected.fetch_add(fields, Ordering::SeqCst);
                self.fields_skipped.fetch_add(skipped, Ordering::SeqCst);
            }
            MetricsEvent::NavigationResolved { complete } => {
                self.navigations_resolved.fetch_add(1, Ordering::SeqCst);
                if complete {
                    self.completions.fetch_add(1, Ordering::SeqCst);
                }
            }
            MetricsEvent::TextInterpolated { tokens, replaced } => {
                self.texts_interpolated.fetch_add(1, Ordering::SeqCst);
                self.tokens_seen.fetch_add(tokens, Ordering::SeqCst);
                self.tokens_replaced.fetch_add(replaced, Ordering::SeqCst);
            }
        }
    }
}

///
/// MetricsSnapshot
/// Point-in-time copy of a `CountingSink`, serializable for reporting.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub conditions_resolved: u64,
    pub rules_evaluated: u64,
    pub rules_matched: u64,
    pub pages_projected: u64,
    pub fields_projected: u64,
    pub fields_skipped: u64,
    pub navigations_resolved: u64,
    pub completions: u64,
    pub texts_interpolated: u64,
    pub tokens_seen: u64,
    pub tokens_replaced: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::AtomicUsize;

    struct CallSink<'a> {
        calls: &'a AtomicUsize,
    }

    impl MetricsSink for CallSink<'_> {
        fn record(&self, _: MetricsEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn with_metrics_sink_routes_and_restores_nested_overrides() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let outer_calls = AtomicUsize::new(0);
        let inner_calls = AtomicUsize::new(0);
        let outer = CallSink {
            calls: &outer_calls,
        };
        let inner = CallSink {
            calls: &inner_calls,
        };

        // No override installed yet: events are dropped.
        record(MetricsEvent::NavigationResolved { complete: false });
        assert_eq!(outer_calls.load(Ordering::SeqCst), 0);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

        with_metrics_sink(&outer, || {
            record(MetricsEvent::NavigationResolved { complete: false });
            assert_eq!(outer_calls.load(Ordering::SeqCst), 1);
            assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

            with_metrics_sink(&inner, || {
                record(MetricsEvent::NavigationResolved { complete: true });
            });

            // Inner override was restored to outer override.
            record(MetricsEvent::TextInterpolated {
                tokens: 1,
                replaced: 1,
            });
        });

        assert_eq!(outer_calls.load(Ordering::SeqCst), 2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);

        // Outer override was restored to previous (none).
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });

        record(MetricsEvent::NavigationResolved { complete: false });
        assert_eq!(outer_calls.load(Ordering::SeqCst), 2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn with_metrics_sink_restores_override_on_panic() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let calls = AtomicUsize::new(0);
        let sink = CallSink { calls: &calls };

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || {
                record(MetricsEvent::ConditionsResolved {
                    rules: 2,
                    matched: 1,
                });
                panic!("intentional panic for guard test");
            });
        }))
        .is_err();
        assert!(panicked);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Guard restored TLS slot after unwind.
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });

        record(MetricsEvent::NavigationResolved { complete: false });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn counting_sink_accumulates_per_event_payloads() {
        let sink = CountingSink::new();

        sink.record(MetricsEvent::ConditionsResolved {
            rules: 4,
            matched: 2,
        });
        sink.record(MetricsEvent::ConditionsResolved {
            rules: 3,
            matched: 0,
        });
        sink.record(MetricsEvent::PageProjected {
            fields: 5,
            skipped: 1,
        });
        sink.record(MetricsEvent::NavigationResolved { complete: false });
        sink.record(MetricsEvent::NavigationResolved { complete: true });
        sink.record(MetricsEvent::TextInterpolated {
            tokens: 3,
            replaced: 2,
        });

        let snap = sink.snapshot();
        assert_eq!(snap.conditions_resolved, 2);
        assert_eq!(snap.rules_evaluated, 7);
        assert_eq!(snap.rules_matched, 2);
        assert_eq!(snap.pages_projected, 1);
        assert_eq!(snap.fields_projected, 5);
        assert_eq!(snap.fields_skipped, 1);
        assert_eq!(snap.navigations_resolved, 2);
        assert_eq!(snap.completions, 1);
        assert_eq!(snap.texts_interpolated, 1);
        assert_eq!(snap.tokens_seen, 3);
        assert_eq!(snap.tokens_replaced, 2);
    }

    #[test]
    fn snapshot_serializes_flat_counter_object() {
        let sink = CountingSink::new();
        sink.record(MetricsEvent::PageProjected {
            fields: 2,
            skipped: 0,
        });

        let json = serde_json::to_value(sink.snapshot()).unwrap();
        assert_eq!(json["pages_projected"], 1);
        assert_eq!(json["fields_projected"], 2);
        assert_eq!(json["completions"], 0);
    }
}
