// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day handling.

use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// Date format used for day keys and the day drill-down route.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Calendar day of a UTC timestamp (time of day discarded).
pub fn utc_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Today's date on the server's local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT).ok()
}

/// The `len` calendar days ending at `today`, oldest first.
pub fn trailing_days(today: NaiveDate, len: u32) -> impl Iterator<Item = NaiveDate> {
    (0..len).rev().filter_map(move |back| today.checked_sub_days(Days::new(u64::from(back))))
}
