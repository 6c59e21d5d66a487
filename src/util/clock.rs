//! Current date and time for quote stamping.
//!
//! In the browser the calendar date comes from the user's local clock via
//! `js_sys::Date`; elsewhere it falls back to the UTC date.

use time::{Date, OffsetDateTime};

/// Current instant, used as `Quote::created_at`.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Today's calendar date in the viewer's local time zone.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let js = js_sys::Date::new_0();
        let local = time::Month::try_from(js.get_month() as u8 + 1)
            .ok()
            .and_then(|month| Date::from_calendar_date(js.get_full_year() as i32, month, js.get_date() as u8).ok());
        if let Some(date) = local {
            return date;
        }
    }
    now().date()
}
