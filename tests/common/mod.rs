//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::net::TcpListener;
use url::Url;

use ramadan_query::calendar::AladhanClient;
use ramadan_query::clock::Clock;
use ramadan_query::http::{AppState, HttpServer};

/// Clock pinned to a fixed date, so "no date parameter" tests are
/// deterministic.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A running service instance bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

/// Start the service against the given upstream base URL, with "today"
/// pinned to `today`. Returns once the listener is bound.
pub async fn spawn_app(upstream_base: &str, today: NaiveDate) -> TestApp {
    let base = Url::parse(upstream_base).expect("invalid upstream base URL");
    let calendar = Arc::new(AladhanClient::new(base));
    let state = AppState::new(calendar, Arc::new(FixedClock(today)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(state, Duration::from_secs(5));
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    TestApp {
        addr,
        client: reqwest::Client::new(),
    }
}

/// Build an Aladhan-shaped month payload from `(gregorian date, hijri month
/// number, hijri month name)` triples.
pub fn month_payload(days: &[(&str, u8, &str)]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = days
        .iter()
        .map(|(date, number, name)| {
            serde_json::json!({
                "gregorian": { "date": date },
                "hijri": { "month": { "number": number, "en": name } },
            })
        })
        .collect();

    serde_json::json!({ "code": 200, "status": "OK", "data": data })
}
