//! Google Calendar API client.

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::error::CalendarError;
use crate::types::{ApiEvent, EventListResponse};

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

pub struct CalendarClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl CalendarClient {
    pub fn new(access_token: &str) -> Self {
        Self::with_base_url(access_token, CALENDAR_API_BASE)
    }

    /// Client against a non-default endpoint (tests, self-hosted proxies).
    pub fn with_base_url(access_token: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.to_string(),
            base_url: base_url.to_string(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// List non-recurring event instances in a time range, ordered by start.
    #[instrument(skip(self), level = "info")]
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        max_results: u32,
    ) -> Result<EventListResponse, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events?timeMin={}&timeMax={}&singleEvents=true&orderBy=startTime&maxResults={}",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(&time_min.to_rfc3339()),
            urlencoding::encode(&time_max.to_rfc3339()),
            max_results,
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a single event.
    #[instrument(skip(self), level = "info")]
    pub async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<ApiEvent, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(event_id),
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Insert a new event.
    ///
    /// `start` and `end` are offset-less timestamps; the offset comes from
    /// `time_zone`. Attendees are attached only when provided and non-empty.
    #[instrument(skip(self, attendees), level = "info")]
    pub async fn insert_event(
        &self,
        calendar_id: &str,
        summary: &str,
        start: &str,
        end: &str,
        time_zone: &str,
        attendees: Option<&[String]>,
    ) -> Result<ApiEvent, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id),
        );

        let mut body = serde_json::json!({
            "summary": summary,
            "start": { "dateTime": start, "timeZone": time_zone },
            "end": { "dateTime": end, "timeZone": time_zone },
        });

        if let Some(emails) = attendees {
            if !emails.is_empty() {
                body["attendees"] = serde_json::Value::Array(
                    emails
                        .iter()
                        .map(|email| serde_json::json!({ "email": email }))
                        .collect(),
                );
            }
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Write back a full event object (read-modify-write update).
    #[instrument(skip(self, event), level = "info")]
    pub async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &ApiEvent,
    ) -> Result<ApiEvent, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(event_id),
        );

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.auth_header())
            .json(event)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete an event.
    #[instrument(skip(self), level = "info")]
    pub async fn delete_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<(), CalendarError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(event_id),
        );

        let response = self
            .client
            .delete(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        // Delete returns 204 No Content on success
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CalendarError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CalendarError::ApiError(format!("JSON parse error: {}", e)))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Map an error response to the calendar error taxonomy.
    async fn api_error(response: reqwest::Response) -> CalendarError {
        let status = response.status();
        match status.as_u16() {
            401 => CalendarError::TokenExpired,
            403 => CalendarError::AuthRequired,
            // 410 is the provider's answer for an already-deleted event
            404 | 410 => {
                let text = response.text().await.unwrap_or_default();
                CalendarError::EventNotFound(text)
            }
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60);
                CalendarError::RateLimited(retry_after)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                CalendarError::ApiError(format!("{}: {}", status, text))
            }
        }
    }
}
