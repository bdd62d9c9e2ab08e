use chrono::{DateTime, Utc};
use gloo::timers::callback::Interval;

/// How often a running game's timer is refreshed.
pub const TICK_MILLIS: u32 = 1_000;

pub fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Calls back with the current time on a fixed period until stopped or dropped.
#[derive(Debug)]
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    pub fn start(period_millis: u32, mut on_tick: impl FnMut(DateTime<Utc>) + 'static) -> Self {
        log::debug!("clock started, every {}ms", period_millis);
        let interval = Interval::new(period_millis, move || on_tick(utc_now()));
        Self { interval }
    }

    pub fn stop(self) {
        drop(self.interval.cancel());
        log::debug!("clock stopped");
    }
}
