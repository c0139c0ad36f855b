//! `eventid-core` — portable logging event identifier.
//!
//! This crate contains the **pure** value type (no logging, no I/O). Wiring
//! identifiers into a logging backend lives in `eventid-observability`.

pub mod error;
pub mod event_id;
pub mod value_object;

pub use error::{EventIdError, EventIdResult};
pub use event_id::EventId;
pub use value_object::ValueObject;
