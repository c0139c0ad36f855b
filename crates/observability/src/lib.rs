//! Tracing/logging setup and the `EventId` logging adapter.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Attaching event identifiers to spans and log lines.
pub mod event;

pub use event::{event_span, record_event};
