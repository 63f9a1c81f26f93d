//! Upstream calendar integration.
//!
//! # Responsibilities
//! - Define the calendar lookup capability used by the HTTP handlers
//! - Mirror the Aladhan `gToHCalendar` wire format
//! - Issue the single outbound call per request (no retries, no caching)
//!
//! The lookup is behind a trait so handlers can be exercised against a mock
//! without network access.

pub mod client;
pub mod types;

pub use client::AladhanClient;
pub use types::{DayEntry, GregorianDay, HijriDay, HijriMonth};

use async_trait::async_trait;

/// Hijri month number for Ramadan.
pub const RAMADAN_MONTH: u8 = 9;

/// Error type for upstream calendar calls.
///
/// Every variant is surfaced to API clients as the same generic failure;
/// the distinction exists for server-side logging only.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Network-level failure or undecodable response body.
    #[error("calendar API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("calendar API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Capability for Gregorian-to-Hijri month conversion.
///
/// One operation: given a Gregorian month and year, return the day entries
/// covering that month.
#[async_trait]
pub trait CalendarLookup: Send + Sync {
    async fn month_calendar(&self, month: u32, year: i32) -> Result<Vec<DayEntry>, CalendarError>;
}
