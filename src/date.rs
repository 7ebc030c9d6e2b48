// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates and conversions to and from [`JulianDate`].
//!
//! Two independent date→JD formulas are provided:
//!
//! - [`Date::quick_julian_date`] — the day-count form of Meeus ch. 7,
//!   valid for years 1900–2099.  It exposes its intermediate terms in a
//!   [`QuickTerms`] record so callers can inspect every stage.
//! - [`Date::julian_date`] — the Gregorian-calendar form.  Its century
//!   terms `a` and `b` enter *unfloored* (see the method docs), so its
//!   result can differ from the day-count form by a fraction of a day.
//!
//! The inverse direction ([`JulianDate::to_date`],
//! [`JulianDate::time_of_day`]) uses the USNO integer algorithm.

use crate::julian::JulianDate;
use chrono::{Datelike, NaiveDate};

/// A Gregorian calendar date.
///
/// Fields are plain integers and are not range-checked anywhere: month 13
/// or day 42 flow through the conversion formulas unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Intermediate terms of the day-count formula, plus its result.
///
/// `jd = year_days − leap_adjustment + month_days + day + 1 721 013.5`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuickTerms {
    /// `367 · year`
    pub year_days: i64,
    /// `year + ⌊(month + 9) / 12⌋`
    pub month_rollover: i64,
    /// `⌊7 · month_rollover / 4⌋`
    pub leap_adjustment: i64,
    /// `⌊275 · month / 9⌋`
    pub month_days: i64,
    /// The resulting Julian Date.
    pub jd: JulianDate,
}

impl Date {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Day-count Julian Date (Meeus ch. 7), with every intermediate term.
    ///
    /// Valid for years 1900–2099; divisions truncate toward zero exactly
    /// as in the reference form.
    pub fn quick_julian_date(&self) -> QuickTerms {
        let (y, m, d) = (self.year as i64, self.month as i64, self.day as i64);

        let year_days = 367 * y;
        let month_rollover = y + ((m + 9) as f64 / 12.0).trunc() as i64;
        let leap_adjustment = (7.0 * month_rollover as f64 / 4.0).trunc() as i64;
        let month_days = (275.0 * m as f64 / 9.0).trunc() as i64;

        let jd = JulianDate::new(
            (year_days - leap_adjustment + month_days + d) as f64 + 1_721_013.5,
        );

        QuickTerms {
            year_days,
            month_rollover,
            leap_adjustment,
            month_days,
            jd,
        }
    }

    /// Gregorian-calendar Julian Date.
    ///
    /// NOTE: the century terms `a = y/100` and `b = a/4` are *not* floored
    /// and no January/February month shift is applied, so the leap
    /// correction is continuous rather than stepped.  The result drifts a
    /// fraction of a day from the floored Meeus form (about 1.2 days for
    /// early 2024).  Downstream sidereal quantities are defined against
    /// this exact value; use [`Date::quick_julian_date`] when the
    /// conventional day count is wanted.
    pub fn julian_date(&self) -> JulianDate {
        let y = self.year as f64;
        let m = self.month as f64;
        let d = self.day as f64;

        let a = y / 100.0;
        let b = a / 4.0;
        let c = 2.0 - a + b;
        let e = (365.25 * (y + 4716.0)).floor();
        let f = (30.6001 * (m + 1.0)).floor();

        JulianDate::new(f + c + d + e - 1_524.5)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

// ── JD → calendar ─────────────────────────────────────────────────────────

impl JulianDate {
    /// Civil calendar date containing this instant.
    ///
    /// USNO integer algorithm (aa.usno.navy.mil/faq/JD_formula).  The day
    /// number is taken at the midnight boundary, so `JD x.5` maps to the
    /// civil date beginning at that midnight.
    pub fn to_date(&self) -> Date {
        let z = (self.value() + 0.5).floor() as i64;

        let mut l = z + 68_569;
        let n = (4 * l) / 146_097;
        l -= (146_097 * n + 3) / 4;
        let mut i = 4_000 * (l + 1) / 1_461_001;
        l = l - 1_461 * i / 4 + 31;
        let mut j = 80 * l / 2_447;
        let k = l - 2_447 * j / 80;
        l = j / 11;
        j = j + 2 - 12 * l;
        i = 100 * (n - 49) + i + l;

        Date::new(i as i32, j as i32, k as i32)
    }

    /// Hours, minutes and decimal seconds of the civil day containing
    /// this instant.
    pub fn time_of_day(&self) -> (u32, u32, f64) {
        let z = (self.value() + 0.5).floor();
        let day_fraction = self.value() + 0.5 - z;

        let hours = day_fraction * 24.0;
        let minutes = (hours - hours.floor()) * 60.0;
        let seconds = (minutes - minutes.floor()) * 60.0;

        (hours as u32, minutes as u32, seconds)
    }
}
