//! Request handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::RAMADAN_MONTH;
use crate::error::ApiError;
use crate::http::server::AppState;

/// Input date format for the `date` query parameter.
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Output date format, matching the upstream `gregorian.date` field.
const OUTPUT_FORMAT: &str = "%d-%m-%Y";

/// Query parameters for the lookup route.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Optional `YYYY-MM-DD` date; defaults to today.
    pub date: Option<String>,
}

/// Success body for the lookup route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamadanStatus {
    pub country: String,
    /// Formatted as `DD-MM-YYYY`.
    pub date: String,
    pub hijri_month: String,
    pub is_ramadan: bool,
}

/// Static usage body for the root route.
#[derive(Debug, Serialize)]
pub struct UsageInfo {
    pub message: &'static str,
    pub example: &'static str,
}

/// `GET /` — static usage information. Ignores all parameters.
pub async fn usage() -> Json<UsageInfo> {
    Json(UsageInfo {
        message: "Welcome to the Is It Ramadan API",
        example: "/:country?date=YYYY-MM-DD (e.g., /bd?date=2025-03-01)",
    })
}

/// `GET /{country}?date=YYYY-MM-DD` — the date lookup.
///
/// Validates the date (defaulting to today), fetches the Hijri calendar for
/// that month, and matches the formatted date against the returned entries
/// by exact string equality. The string match is deliberate: a semantic
/// date comparison would hide upstream format drift instead of surfacing
/// it as a 404.
pub async fn ramadan_lookup(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<RamadanStatus>, ApiError> {
    let date = match query.date {
        Some(raw) => {
            NaiveDate::parse_from_str(&raw, INPUT_FORMAT).map_err(|_| ApiError::InvalidDate)?
        }
        None => state.clock.today(),
    };
    let formatted = date.format(OUTPUT_FORMAT).to_string();

    tracing::debug!(
        country = %country,
        date = %formatted,
        "Looking up Hijri month"
    );

    let entries = state
        .calendar
        .month_calendar(date.month(), date.year())
        .await?;

    let entry = entries
        .iter()
        .find(|entry| entry.gregorian.date == formatted)
        .ok_or(ApiError::NoMatchingDate)?;

    Ok(Json(RamadanStatus {
        country: country.to_uppercase(),
        date: formatted,
        hijri_month: entry.hijri.month.en.clone(),
        is_ramadan: entry.hijri.month.number == RAMADAN_MONTH,
    }))
}
