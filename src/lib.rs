//! Ramadan Query Service Library
//!
//! A thin HTTP wrapper over the Aladhan Gregorian-to-Hijri calendar API,
//! built with Tokio and Axum.
//!
//! Control flow per request: parse/validate the date, call the upstream
//! calendar endpoint for that month and year, locate the day entry whose
//! Gregorian date matches, derive the `isRamadan` flag, respond. There is
//! no local Hijri computation, no caching, and no shared mutable state.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;

pub use calendar::{AladhanClient, CalendarLookup};
pub use clock::{Clock, SystemClock};
pub use config::ServiceConfig;
pub use http::{AppState, HttpServer};
