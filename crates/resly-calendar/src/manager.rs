//! Facade over the calendar client.
//!
//! Holds the authenticated client and the default calendar identifier for
//! the life of the process. Every operation is a single remote round trip
//! (update adds the preceding read); nothing is cached between calls.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike};
use tracing::{info, instrument};

use resly_auth::{ServiceAccountKey, TokenMinter};

use crate::client::CalendarClient;
use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::types::{ApiEventTime, Event};

/// Default cap on entries returned by [`CalendarManager::list_upcoming`].
pub const DEFAULT_MAX_RESULTS: u32 = 22;

/// Daily listing window, hours of local time.
const WINDOW_START_HOUR: i64 = 8;
const WINDOW_END_HOUR: i64 = 19;

pub struct CalendarManager {
    client: CalendarClient,
    calendar_id: String,
}

impl CalendarManager {
    /// Manager over an already-authenticated client.
    pub fn new(client: CalendarClient, calendar_id: impl Into<String>) -> Self {
        Self { client, calendar_id: calendar_id.into() }
    }

    /// Authenticate with the configured service account key and bind to the
    /// configured calendar. Meant to run once at startup; the handle is
    /// reused for all subsequent calls.
    pub async fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let problems = config.validate();
        if !problems.is_empty() {
            return Err(CalendarError::InvalidConfig(problems.join("; ")));
        }

        let key = ServiceAccountKey::from_file(&config.credentials_path)?;
        let token = TokenMinter::new(key).mint().await?;

        Ok(Self::new(CalendarClient::new(&token.access_token), config.calendar_id.clone()))
    }

    /// Calendar targeted by default.
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    /// Start times of the day's events inside the 08:00-19:00 window,
    /// ascending, formatted `"H:MM"` (minutes padded, hours not).
    ///
    /// All-day entries carry no time of day and are skipped. An empty window
    /// is an empty vec, never an error.
    #[instrument(skip(self), level = "info")]
    pub async fn list_upcoming(
        &self,
        day: NaiveDate,
        max_results: u32,
    ) -> Result<Vec<String>, CalendarError> {
        let day_start = day.and_time(NaiveTime::MIN);
        let time_min = (day_start + Duration::hours(WINDOW_START_HOUR)).and_utc();
        let time_max = (day_start + Duration::hours(WINDOW_END_HOUR)).and_utc();

        let response = self
            .client
            .list_events(&self.calendar_id, time_min, time_max, max_results)
            .await?;

        let hours: Vec<String> = response
            .items
            .iter()
            .filter_map(|item| item.start.as_ref().and_then(start_label))
            .collect();

        if hours.is_empty() {
            info!(%day, "No upcoming events found");
        }

        Ok(hours)
    }

    /// Create an event on the default calendar and return its canonical
    /// link.
    #[instrument(skip(self, attendees), level = "info")]
    pub async fn create_event(
        &self,
        summary: &str,
        start: &str,
        end: &str,
        time_zone: &str,
        attendees: Option<&[String]>,
    ) -> Result<String, CalendarError> {
        let event = self
            .client
            .insert_event(&self.calendar_id, summary, start, end, time_zone, attendees)
            .await?;

        let link = event
            .html_link
            .ok_or_else(|| CalendarError::ApiError("insert response missing htmlLink".to_string()))?;

        info!(link = %link, "Event created");
        Ok(link)
    }

    /// Fetch a single event from the default calendar.
    #[instrument(skip(self), level = "info")]
    pub async fn get_event(&self, event_id: &str) -> Result<Event, CalendarError> {
        let api = self.client.get_event(&self.calendar_id, event_id).await?;
        Ok(Event::from_api(api, &self.calendar_id))
    }

    /// Partial update: fetch the stored event, overlay only the provided
    /// fields and write the merged object back. Omitted fields are left
    /// unchanged; time zone and attendees are not mutable through this
    /// operation.
    #[instrument(skip(self), level = "info")]
    pub async fn update_event(
        &self,
        event_id: &str,
        summary: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Event, CalendarError> {
        let mut stored = self.client.get_event(&self.calendar_id, event_id).await?;

        if let Some(value) = summary {
            stored.summary = Some(value.to_string());
        }
        if let Some(value) = start {
            stored.start.get_or_insert_with(ApiEventTime::default).date_time =
                Some(value.to_string());
        }
        if let Some(value) = end {
            stored.end.get_or_insert_with(ApiEventTime::default).date_time =
                Some(value.to_string());
        }

        let updated = self.client.update_event(&self.calendar_id, event_id, &stored).await?;
        Ok(Event::from_api(updated, &self.calendar_id))
    }

    /// Delete an event from the default calendar. `Ok(())` means the remote
    /// service confirmed removal.
    #[instrument(skip(self), level = "info")]
    pub async fn delete_event(&self, event_id: &str) -> Result<(), CalendarError> {
        self.client.delete_event(&self.calendar_id, event_id).await
    }
}

/// Wall-clock start label, `"H:MM"`. All-day and unparseable starts have
/// none.
fn start_label(start: &ApiEventTime) -> Option<String> {
    let raw = start.date_time.as_deref()?;
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?;
    Some(format!("{}:{:02}", parsed.hour(), parsed.minute()))
}
