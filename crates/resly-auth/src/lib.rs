//! Service account authentication for Resly.
//!
//! Loads a Google service account key file and mints short-lived OAuth2
//! access tokens for the Calendar API.

pub mod credentials;
pub mod error;
pub mod token;

pub use credentials::ServiceAccountKey;
pub use error::AuthError;
pub use token::{AccessToken, TokenMinter, CALENDAR_SCOPE};
