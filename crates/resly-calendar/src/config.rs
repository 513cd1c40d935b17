//! Construction-time settings for the calendar integration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings the facade is built from. One calendar identifier serves as the
/// default for every operation; client calls can still target another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Path to the service account key file
    pub credentials_path: PathBuf,

    /// Calendar targeted by default
    pub calendar_id: String,
}

impl CalendarConfig {
    pub fn new(credentials_path: impl Into<PathBuf>, calendar_id: impl Into<String>) -> Self {
        Self { credentials_path: credentials_path.into(), calendar_id: calendar_id.into() }
    }

    /// Field-level problems; empty means the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.credentials_path.as_os_str().is_empty() {
            problems.push("credentials_path: must not be empty".to_string());
        }
        if self.calendar_id.trim().is_empty() {
            problems.push("calendar_id: must not be empty".to_string());
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = CalendarConfig::new("credentials.json", "team@example.com");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_fields_are_reported() {
        let config = CalendarConfig::new("", "  ");
        let problems = config.validate();

        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("credentials_path"));
        assert!(problems[1].contains("calendar_id"));
    }

    #[test]
    fn test_config_deserializes() {
        let config: CalendarConfig = serde_json::from_str(
            r#"{"credentials_path": "credentials.json", "calendar_id": "team@example.com"}"#,
        )
        .unwrap();

        assert_eq!(config.calendar_id, "team@example.com");
        assert!(config.validate().is_empty());
    }
}
