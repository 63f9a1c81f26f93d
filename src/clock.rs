//! Clock abstraction.
//!
//! The lookup handler defaults to "today" when no date is supplied, so the
//! notion of the current date is injected rather than read from the system
//! directly. Tests provide a fixed clock instead of depending on real time.

use chrono::{Local, NaiveDate};

/// Source of the current date.
pub trait Clock: Send + Sync {
    /// The current date, in the server's local timezone.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
