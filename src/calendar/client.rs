//! Reqwest-backed Aladhan client.

use async_trait::async_trait;
use url::Url;

use crate::calendar::types::{DayEntry, MonthCalendar};
use crate::calendar::{CalendarError, CalendarLookup};

/// HTTP client for the Aladhan Gregorian-to-Hijri calendar endpoint.
///
/// Issues one `GET {base}/gToHCalendar/{month}/{year}` per lookup. No
/// retries and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AladhanClient {
    /// Create a client against the given base URL
    /// (e.g. `https://api.aladhan.com/v1`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, month: u32, year: i32) -> String {
        // Trailing-slash safe: the base is treated as a prefix, not joined.
        format!(
            "{}/gToHCalendar/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            month,
            year
        )
    }
}

#[async_trait]
impl CalendarLookup for AladhanClient {
    async fn month_calendar(&self, month: u32, year: i32) -> Result<Vec<DayEntry>, CalendarError> {
        let url = self.endpoint(month, year);
        tracing::debug!(url = %url, "Requesting Hijri calendar");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::Status(status));
        }

        let calendar: MonthCalendar = response.json().await?;
        Ok(calendar.data)
    }
}
