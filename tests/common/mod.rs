//! Shared test utilities: a scripted clock, a scripted quote source, and a
//! one-shot local HTTP server.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use tickertape::clock::ClockSource;
use tickertape::config::TickerConfig;
use tickertape::models::{PriceSnapshot, Symbol};
use tickertape::quotes::QuoteProvider;
use tickertape::{Result, TickertapeError};

/// Monday 2024-01-08, the first weekday used throughout the tests.
pub fn utc(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// 10:00 in New York (UTC-5) on Monday 2024-01-08.
pub fn monday_open() -> DateTime<Utc> {
    utc(8, 15, 0)
}

/// 10:00 in New York (UTC-5) on Saturday 2024-01-13.
pub fn saturday() -> DateTime<Utc> {
    utc(13, 15, 0)
}

pub fn symbols(codes: &[&str]) -> Vec<Symbol> {
    codes.iter().map(|c| Symbol::from(*c)).collect()
}

pub fn snapshot(prices: &[(&str, f64)]) -> PriceSnapshot {
    prices.iter().map(|(s, p)| (Symbol::from(*s), *p)).collect()
}

/// Ticker config with two symbols and the stock timings.
pub fn test_config() -> TickerConfig {
    TickerConfig {
        symbols: symbols(&["AAPL", "MSFT"]),
        ..TickerConfig::default()
    }
}

/// A clock whose wall and monotonic time only move when told to.
#[derive(Clone)]
pub struct FakeClock(Rc<ClockState>);

pub struct ClockState {
    now: Cell<DateTime<Utc>>,
    mono: Cell<Duration>,
}

impl FakeClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Rc::new(ClockState {
            now: Cell::new(now),
            mono: Cell::new(Duration::ZERO),
        }))
    }

    /// Moves both wall and monotonic time forward.
    pub fn advance(&self, by: Duration) {
        let delta = chrono::TimeDelta::from_std(by).expect("small test duration");
        self.0.now.set(self.0.now.get() + delta);
        self.0.mono.set(self.0.mono.get() + by);
    }

    /// Jumps wall time to `now`; monotonic time moves by one second.
    pub fn set_utc(&self, now: DateTime<Utc>) {
        self.0.now.set(now);
        self.0.mono.set(self.0.mono.get() + Duration::from_secs(1));
    }
}

impl ClockSource for FakeClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0.now.get()
    }

    fn monotonic(&self) -> Duration {
        self.0.mono.get()
    }
}

/// A quote source that replays queued results and counts calls.
///
/// Once the queue is empty every call fails.
#[derive(Clone, Default)]
pub struct FakeQuotes(Rc<QuoteScript>);

#[derive(Default)]
pub struct QuoteScript {
    responses: RefCell<VecDeque<Result<PriceSnapshot>>>,
    calls: Cell<usize>,
}

impl FakeQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, snapshot: PriceSnapshot) {
        self.0.responses.borrow_mut().push_back(Ok(snapshot));
    }

    pub fn push_err(&self, message: &str) {
        self.0
            .responses
            .borrow_mut()
            .push_back(Err(TickertapeError::Quote(message.to_string())));
    }

    pub fn calls(&self) -> usize {
        self.0.calls.get()
    }
}

impl QuoteProvider for FakeQuotes {
    async fn fetch_quotes(&self, _symbols: &[Symbol]) -> Result<PriceSnapshot> {
        self.0.calls.set(self.0.calls.get() + 1);
        self.0
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TickertapeError::Quote("script exhausted".to_string())))
    }
}

/// Texts of `segments`, left to right.
pub fn texts(segments: &[tickertape::ticker::DisplaySegment]) -> Vec<String> {
    segments.iter().map(|s| s.text.clone()).collect()
}

/// Serves one canned HTTP response and returns the request head it received.
pub async fn serve_once(status: &'static str, body: String) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}
