//! Tracing/logging initialization.
//!
//! Log lines are JSON objects with the event fields flattened to the top
//! level, so `event.id` and `event.name` from [`record_event`] are plain keys.
//! Lines emitted inside an [`event_span`] also carry the span's fields under
//! `"span"`.
//!
//! [`record_event`]: crate::event::record_event
//! [`event_span`]: crate::event::event_span

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// JSON formatting layer writing to `writer`.
pub fn json_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: ::tracing::Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(writer)
}

/// Initialize tracing/logging for the process, writing JSON to stdout.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer(std::io::stdout))
        .try_init();
}
