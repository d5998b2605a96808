//! Issue timestamps for quotations.
//!
//! Quotation ids embed the issue time in milliseconds. Two submissions in the
//! same millisecond would collide, so the clock never hands out the same
//! millisecond twice.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct QuoteClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl QuoteClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, bumped past the previous tick when needed.
    pub fn tick(&self) -> DateTime<Utc> {
        self.tick_from(Utc::now())
    }

    fn tick_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let mut last = self.last.lock().unwrap_or_else(|p| p.into_inner());

        let issued = match *last {
            Some(prev) if now.timestamp_millis() <= prev.timestamp_millis() => {
                prev + Duration::milliseconds(1)
            }
            _ => now,
        };

        *last = Some(issued);
        issued
    }
}
