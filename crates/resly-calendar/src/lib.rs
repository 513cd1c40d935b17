//! Google Calendar integration for Resly.
//!
//! Thin facade over the Calendar v3 REST API: authenticate once with a
//! service account, then list, create, update and delete events. Nothing is
//! cached locally; the remote calendar is the sole source of truth.

pub mod client;
pub mod config;
pub mod error;
pub mod manager;
pub mod types;

pub use client::CalendarClient;
pub use config::CalendarConfig;
pub use error::CalendarError;
pub use manager::{CalendarManager, DEFAULT_MAX_RESULTS};
pub use types::{ApiEvent, Attendee, Event, EventStatus, EventTime, ResponseStatus};
