//! Span instrumentation for the analysis entry points.
//!
//! With the `tracing` feature enabled every public analysis operation opens
//! an `info_span!`, and [`init_tracing`] installs a layer that accumulates
//! per-span call counts and durations for the current thread. Without the
//! feature the same API compiles to no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Accumulated statistics for one span name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                SPAN_TIMINGS.with(|timings| {
                    let mut timings = timings.borrow_mut();
                    let entry = timings.entry(name).or_default();
                    entry.total += elapsed;
                    entry.count += 1;
                });
            }
        }
    }

    /// Installs the timing layer as the global subscriber. Calling this more
    /// than once, or after another subscriber was installed, has no effect.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Returns the statistics recorded on this thread, keyed by span name.
    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        SPAN_TIMINGS.with(|timings| timings.borrow().clone())
    }

    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        let mut entries: Vec<_> = span_timings().into_iter().collect();
        entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        eprintln!("span timings (desc):");
        for (name, timing) in entries {
            eprintln!("  {name}: {:?} ({}x)", timing.total, timing.count);
        }
    }

    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    pub fn init_tracing() {}

    pub fn span_timings() -> BTreeMap<&'static str, SpanTiming> {
        BTreeMap::new()
    }

    pub fn reset_span_timings() {}

    #[doc(hidden)]
    pub fn dump_span_timings() {}

    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;
    use crate::Graph;

    #[test]
    fn test_analysis_spans_are_recorded() {
        reset_span_timings();
        let mut graph = Graph::new("g");
        let nodes = graph.add_nodes(["a", "b", "c"]);
        graph.connect_nodes(&nodes);
        assert!(graph.has_path(nodes[0], nodes[2]));
        assert!(graph.find_bridges(nodes[0]).len() == 2);

        let timings = span_timings();
        assert!(timings.get("find_bridges").is_some_and(|t| t.count == 1));
        assert!(timings.get("path_to").is_some_and(|t| t.count >= 1));
    }
}
