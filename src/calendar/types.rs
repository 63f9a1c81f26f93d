//! Wire types for the Aladhan `gToHCalendar` response.
//!
//! Only the fields this service reads are modelled; the upstream payload
//! carries considerably more (weekday names, designations, holidays) which
//! serde ignores on deserialization.

use serde::Deserialize;

/// Top-level response envelope: `{ "data": [ ...day entries... ] }`.
#[derive(Debug, Deserialize)]
pub struct MonthCalendar {
    pub data: Vec<DayEntry>,
}

/// One day of the requested Gregorian month.
#[derive(Debug, Clone, Deserialize)]
pub struct DayEntry {
    pub gregorian: GregorianDay,
    pub hijri: HijriDay,
}

/// Gregorian half of a day entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GregorianDay {
    /// Formatted as `DD-MM-YYYY`. Matched against the request date by
    /// exact string equality, so the format must line up character for
    /// character.
    pub date: String,
}

/// Hijri half of a day entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HijriDay {
    pub month: HijriMonth,
}

/// Hijri month descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct HijriMonth {
    /// 1-12; 9 is Ramadan.
    pub number: u8,
    /// English month name, e.g. "Ramadan".
    pub en: String,
}
