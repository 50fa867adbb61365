//! Browser wall clock and local-time conversion.
//!
//! `OffsetDateTime::now_utc` has no time source on `wasm32-unknown-unknown`,
//! so saves are stamped from `Date.now()` instead. Display converts stored
//! UTC timestamps to the viewer's offset for that instant (so daylight
//! saving is honored per date).

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use diagram::store::Clock;
use time::{OffsetDateTime, UtcOffset};

/// Clock reading the browser's `Date.now()`; the system clock on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> OffsetDateTime {
        #[cfg(feature = "hydrate")]
        {
            datetime_from_millis(js_sys::Date::now())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            OffsetDateTime::now_utc()
        }
    }
}

/// Convert JS epoch milliseconds to a UTC timestamp.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn datetime_from_millis(millis: f64) -> OffsetDateTime {
    let nanos = (millis * 1_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Offset for a JS `getTimezoneOffset()` value (minutes, UTC minus local).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_timezone_minutes(minutes: f64) -> UtcOffset {
    let seconds = -(minutes.round() as i32) * 60;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// `at` expressed in the viewer's local offset. Unchanged on the server.
#[must_use]
pub fn to_local(at: OffsetDateTime) -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        at.to_offset(offset_from_timezone_minutes(date.get_timezone_offset()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        at
    }
}
