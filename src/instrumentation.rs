//! Span timing for the search and move application.
//!
//! Built with `--features instrumentation`. Every `#[instrument]`ed function
//! (the top-level search and `Engine::apply_move`) is timed, and a table of
//! call counts and latencies is printed to stderr when the program exits.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::warn;
use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SpanTiming {
    calls: u64,
    total: Duration,
}

impl SpanTiming {
    fn record(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
    }

    fn merge(&mut self, other: &SpanTiming) {
        self.calls += other.calls;
        self.total += other.total;
    }

    fn average(&self) -> Duration {
        if self.calls == 0 {
            Duration::default()
        } else {
            self.total / self.calls as u32
        }
    }
}

type TimingTable = HashMap<&'static str, SpanTiming>;

/// One table per thread, so recording never waits on another thread.
static TIMINGS: Lazy<ThreadLocal<Mutex<TimingTable>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let cell = TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut table) = cell.lock() {
            table
                .entry(span.name())
                .or_default()
                .record(started.elapsed());
        }
    }
}

/// Installs the timing layer. With `RUST_LOG` set, span events are printed
/// as well.
pub fn init_tracing() {
    let verbose = std::env::var("RUST_LOG").map_or(false, |filter| {
        !filter.is_empty() && filter != "off"
    });

    let result = if verbose {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(TimingLayer)
                .with(fmt_layer),
        )
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::new("trace"))
                .with(TimingLayer),
        )
    };

    if let Err(error) = result {
        warn!("tracing subscriber already installed: {}", error);
    }
}

fn collect_timings() -> Vec<(&'static str, SpanTiming)> {
    let mut merged = TimingTable::new();
    for cell in TIMINGS.iter() {
        if let Ok(table) = cell.lock() {
            for (name, timing) in table.iter() {
                merged.entry(*name).or_default().merge(timing);
            }
        }
    }

    let mut entries: Vec<_> = merged.into_iter().collect();
    entries.sort_by_key(|(_, timing)| std::cmp::Reverse(timing.total));
    entries
}

/// Prints the per-span latency table, slowest total first.
pub fn print_timing_statistics() {
    let entries = collect_timings();
    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>10} {:>14} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");

    let mut grand_total = Duration::default();
    for (name, timing) in &entries {
        grand_total += timing.total;
        eprintln!(
            "{:<32} {:>10} {:>14.2} {:>12.2}",
            name,
            timing.calls,
            timing.total.as_secs_f64() * 1_000.0,
            timing.average().as_secs_f64() * 1_000_000.0
        );
    }

    eprintln!("{:-<72}", "");
    eprintln!(
        "Total instrumented time: {:.2} ms\n",
        grand_total.as_secs_f64() * 1_000.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_timing_average() {
        let mut timing = SpanTiming::default();
        assert_eq!(timing.average(), Duration::default());

        timing.record(Duration::from_micros(10));
        timing.record(Duration::from_micros(30));
        assert_eq!(timing.calls, 2);
        assert_eq!(timing.average(), Duration::from_micros(20));

        let mut merged = SpanTiming::default();
        merged.merge(&timing);
        merged.merge(&timing);
        assert_eq!(merged.calls, 4);
        assert_eq!(merged.total, Duration::from_micros(80));
    }
}
