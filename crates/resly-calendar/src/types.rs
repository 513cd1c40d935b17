//! Calendar API types and data structures.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Calendar event as handed to callers. Never persisted; the remote
/// calendar owns the canonical copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    pub summary: String,
    pub start: EventTime,
    pub end: EventTime,
    pub all_day: bool,
    pub time_zone: Option<String>,
    pub attendees: Vec<Attendee>,
    pub status: EventStatus,
    pub html_link: Option<String>,
}

/// Event time - a specific datetime or an all-day date.
///
/// Datetimes keep the provider's offset so the wall-clock time of day
/// survives; convert with [`EventTime::as_datetime`] when ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventTime {
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
}

impl EventTime {
    pub fn as_datetime(&self) -> DateTime<Utc> {
        match self {
            EventTime::DateTime(dt) => dt.with_timezone(&Utc),
            EventTime::Date(d) => d.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

/// Event status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

/// Event attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
    pub response_status: ResponseStatus,
}

/// Attendee response status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ResponseStatus {
    NeedsAction,
    Declined,
    Tentative,
    Accepted,
}

impl Default for ResponseStatus {
    fn default() -> Self {
        Self::NeedsAction
    }
}

// API Wire Types

/// Calendar API event payload.
///
/// Round-trips: fields this module does not model land in `extra` and are
/// written back untouched, so a read-modify-write update never drops them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<ApiEventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<ApiEventTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<ApiAttendee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAttendee {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// API response for event list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    #[serde(default)]
    pub items: Vec<ApiEvent>,
    pub next_page_token: Option<String>,
}

impl Event {
    /// Convert an API payload to a caller-facing Event.
    pub fn from_api(api: ApiEvent, calendar_id: &str) -> Self {
        let time_zone = api.start.as_ref().and_then(|t| t.time_zone.clone());

        let (start, all_day) = api
            .start
            .map(|t| parse_event_time(&t))
            .unwrap_or((EventTime::DateTime(Utc::now().fixed_offset()), false));

        let end = api.end.map(|t| parse_event_time(&t).0).unwrap_or_else(|| start.clone());

        let status = match api.status.as_deref() {
            Some("tentative") => EventStatus::Tentative,
            Some("cancelled") => EventStatus::Cancelled,
            _ => EventStatus::Confirmed,
        };

        let attendees = api
            .attendees
            .into_iter()
            .map(|a| {
                let response_status = match a.response_status.as_deref() {
                    Some("accepted") => ResponseStatus::Accepted,
                    Some("declined") => ResponseStatus::Declined,
                    Some("tentative") => ResponseStatus::Tentative,
                    _ => ResponseStatus::NeedsAction,
                };
                Attendee { email: a.email, response_status }
            })
            .collect();

        Self {
            id: api.id,
            calendar_id: calendar_id.to_string(),
            summary: api.summary.unwrap_or_default(),
            start,
            end,
            all_day,
            time_zone,
            attendees,
            status,
            html_link: api.html_link,
        }
    }
}

fn parse_event_time(api: &ApiEventTime) -> (EventTime, bool) {
    if let Some(dt_str) = &api.date_time {
        if let Ok(dt) = DateTime::parse_from_rfc3339(dt_str) {
            return (EventTime::DateTime(dt), false);
        }
    }
    if let Some(date_str) = &api.date {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            return (EventTime::Date(date), true);
        }
    }
    (EventTime::DateTime(Utc::now().fixed_offset()), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_event_from_api() {
        let json = r#"{
            "id": "event123",
            "summary": "Team Meeting",
            "start": {"dateTime": "2024-06-01T10:00:00Z", "timeZone": "Europe/Helsinki"},
            "end": {"dateTime": "2024-06-01T11:00:00Z", "timeZone": "Europe/Helsinki"},
            "status": "confirmed",
            "htmlLink": "https://calendar.google.com/event?id=123"
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let event = Event::from_api(api_event, "primary");

        assert_eq!(event.id, "event123");
        assert_eq!(event.calendar_id, "primary");
        assert_eq!(event.summary, "Team Meeting");
        assert_eq!(event.time_zone, Some("Europe/Helsinki".to_string()));
        assert_eq!(event.status, EventStatus::Confirmed);
        assert!(!event.all_day);
        assert_eq!(
            event.html_link.as_deref(),
            Some("https://calendar.google.com/event?id=123")
        );
    }

    #[test]
    fn test_event_start_keeps_wall_clock() {
        let json = r#"{
            "id": "event321",
            "summary": "Morning sync",
            "start": {"dateTime": "2024-06-01T09:05:00-07:00"},
            "end": {"dateTime": "2024-06-01T09:30:00-07:00"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let event = Event::from_api(api_event, "primary");

        match event.start {
            EventTime::DateTime(dt) => {
                assert_eq!(dt.hour(), 9);
                assert_eq!(dt.minute(), 5);
            }
            EventTime::Date(_) => panic!("expected a datetime start"),
        }
    }

    #[test]
    fn test_all_day_event() {
        let json = r#"{
            "id": "event456",
            "summary": "Holiday",
            "start": {"date": "2024-06-01"},
            "end": {"date": "2024-06-02"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let event = Event::from_api(api_event, "primary");

        assert!(event.all_day);
        assert!(matches!(event.start, EventTime::Date(_)));
    }

    #[test]
    fn test_event_with_attendees() {
        let json = r#"{
            "id": "event789",
            "summary": "Project Review",
            "start": {"dateTime": "2024-06-01T14:00:00Z"},
            "end": {"dateTime": "2024-06-01T15:00:00Z"},
            "attendees": [
                {"email": "alice@example.com", "responseStatus": "accepted"},
                {"email": "bob@example.com", "responseStatus": "tentative"}
            ]
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let event = Event::from_api(api_event, "primary");

        assert_eq!(event.attendees.len(), 2);
        assert_eq!(event.attendees[0].email, "alice@example.com");
        assert_eq!(event.attendees[0].response_status, ResponseStatus::Accepted);
        assert_eq!(event.attendees[1].response_status, ResponseStatus::Tentative);
    }

    #[test]
    fn test_api_event_round_trips_unknown_fields() {
        let json = r#"{
            "id": "event123",
            "summary": "Team Meeting",
            "start": {"dateTime": "2024-06-01T10:00:00Z"},
            "end": {"dateTime": "2024-06-01T11:00:00Z"},
            "colorId": "5",
            "creator": {"email": "owner@example.com"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(api_event.extra.get("colorId"), Some(&serde_json::json!("5")));

        let round_tripped = serde_json::to_value(&api_event).unwrap();
        assert_eq!(round_tripped["colorId"], "5");
        assert_eq!(round_tripped["creator"]["email"], "owner@example.com");
        assert_eq!(round_tripped["summary"], "Team Meeting");
    }

    #[test]
    fn test_event_time_as_datetime() {
        let dt_str = "2024-06-01T09:05:00-07:00";
        let dt = EventTime::DateTime(DateTime::parse_from_rfc3339(dt_str).unwrap());
        assert_eq!(dt.as_datetime().hour(), 16);

        let date = EventTime::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            date.as_datetime().date_naive(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }
}
