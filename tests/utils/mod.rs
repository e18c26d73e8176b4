#![allow(dead_code)]

use logout::{Diagnostic, DiagnosticSink, LogoutClient};
use std::{
    sync::{Arc, Mutex, Once},
    thread,
    time::{Duration, Instant},
};
use tracing_subscriber::filter::LevelFilter;

pub fn logging() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A sink that keeps every diagnostic line it receives.
#[derive(Clone, Default)]
pub struct Diagnostics {
    lines: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticSink for Diagnostics {
    fn report(&self, diagnostic: Diagnostic<'_>) {
        self.lines.lock().unwrap().push(diagnostic.to_string());
    }
}

impl Diagnostics {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Wait until at least `count` lines have been reported, then return all
    /// of them.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;

        while self.lines.lock().unwrap().len() < count && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }

        self.lines()
    }
}

/// Create a client that sends requests to `origin` and collects diagnostics.
pub fn client(origin: impl AsRef<str>) -> (LogoutClient, Diagnostics) {
    logging();

    let diagnostics = Diagnostics::default();
    let client = LogoutClient::builder()
        .origin(origin)
        .sink(diagnostics.clone())
        .build()
        .unwrap();

    (client, diagnostics)
}
