//! Date-of-birth handling.
//!
//! Dates are stored as `d/m/yyyy` strings exactly as the profile completion
//! screen writes them (day and month are not zero padded). Anything that
//! does not parse to a real calendar date is treated as unknown, and the
//! derived age falls back to 0.

use chrono::{Datelike, NaiveDate};

/// Parses a `d/m/yyyy` (or `dd/mm/yyyy`) string.
pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Age in whole years on `today` for the stored date of birth.
///
/// The birthday counts once today's (month, day) reaches the birth
/// (month, day), so leap years do not shift it. A 29 February birthday is
/// reached on 1 March in common years. Malformed strings and dates in the
/// future yield 0.
pub fn age_on(raw_dob: &str, today: NaiveDate) -> u32 {
    let Some(dob) = parse_dob(raw_dob) else {
        return 0;
    };
    if dob > today {
        return 0;
    }

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
