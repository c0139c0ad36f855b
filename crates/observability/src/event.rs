//! Boundary adapter between [`EventId`] and `tracing`.
//!
//! Logging backends that want an event identifier receive it here as two
//! structured fields, `event.id` and `event.name`.

use eventid_core::EventId;

/// Open an `info` span named `event` tagged with the identifier.
pub fn event_span(event: &EventId) -> ::tracing::Span {
    ::tracing::info_span!("event", event.id = event.id(), event.name = event.name())
}

/// Emit a single `info` log line tagged with the identifier.
pub fn record_event(event: impl Into<EventId>, message: &str) {
    let event = event.into();
    ::tracing::info!(
        event.id = event.id(),
        event.name = event.name(),
        "{}",
        message
    );
}
