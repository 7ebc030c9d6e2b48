// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal Clock
//!
//! Julian Dates and sidereal time for calendar dates.
//!
//! The crate converts a Gregorian calendar date into a Julian Date and
//! derives Greenwich Sidereal Time (GST) and Local Sidereal Time (LST)
//! for a wall-clock time of day.  The `lstclock` binary runs the whole
//! pipeline for a date given on the command line and prints every
//! intermediate quantity, one stage per line.
//!
//! # Core types
//!
//! - [`Date`] — a Gregorian calendar date (fields are not range-checked).
//! - [`JulianDate`] — continuous day count on the Julian-day axis.
//! - [`ModifiedJulianDate`] — `JD − 2 400 000.5`.
//! - [`ClockTime`] — wall-clock hour/minute/second of day.
//! - [`QuickTerms`] — intermediate terms of the day-count date→JD formula.
//! - [`SiderealReport`] — every intermediate of the GST/LST pipeline.
//!
//! # Pipeline
//!
//! | Step | Operation |
//! |------|-----------|
//! | 1 | [`Date::julian_date`] — calendar date → [`JulianDate`] |
//! | 2 | [`JulianDate::julian_centuries`] — centuries since J2000.0 |
//! | 3 | [`greenwich_sidereal_time`] — GST polynomial (degrees) |
//! | 4 | [`reduce_degrees`] — bring GST down to at most 360° |
//! | 5 | [`local_sidereal_time`] — add the clock-time contribution |
//!
//! # Quick Example
//! ```rust
//! use lstclock::{Date, SiderealReport, OBSERVATION_TIME};
//!
//! let jd = Date::new(2024, 1, 1).julian_date();
//! let report = SiderealReport::at(jd, OBSERVATION_TIME);
//! println!("GST = {}°, LST = {}°", report.gst, report.lst);
//! ```

mod date;
mod julian;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::{Date, QuickTerms};
pub use julian::{JulianDate, ModifiedJulianDate};
pub use sidereal::{
    degrees_to_hms, greenwich_sidereal_time, local_sidereal_time, reduce_degrees, ClockTime,
    SiderealReport, OBSERVATION_TIME, SIDEREAL_DEGREES_PER_MINUTE,
};
