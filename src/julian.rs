// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Typed Julian-day instants.
//!
//! [`JulianDate`] stores a scalar [`Days`] quantity counting days on the
//! Julian-day axis; [`ModifiedJulianDate`] is the same axis shifted by
//! `2 400 000.5` days.  Both are `Copy` and layout-identical to a single
//! `f64`.
//!
//! Epoch-derived quantities (Julian centuries since J2000.0) and the UTC
//! conversions treat the Julian Day number as a plain epoch counter; no
//! ΔT or leap-second model is applied.

use chrono::{DateTime, Utc};
use qtty::*;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Date — continuous count of days since the start of the Julian
/// Period.
///
/// Day numbers roll over at noon UT: `JD x.0` is a noon, `JD x.5` the
/// following midnight.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn days(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries since J2000.0, `(jd − 2 451 545.0) / 36 525`.
    ///
    /// This is the `t` argument of the sidereal-time polynomial and of most
    /// nutation/precession series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Corresponding Modified Julian Date.
    #[inline]
    pub fn to_mjd(&self) -> ModifiedJulianDate {
        ModifiedJulianDate::from_days(self.quantity - MJD_EPOCH)
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>())
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<f64> for JulianDate {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ModifiedJulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// Modified Julian Date — `JD − 2 400 000.5`, days since 1858-11-17T00:00 UT.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ModifiedJulianDate {
    quantity: Days,
}

impl ModifiedJulianDate {
    /// Create from a raw MJD value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn days(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Corresponding Julian Date.
    #[inline]
    pub fn to_jd(&self) -> JulianDate {
        JulianDate::from_days(self.quantity + MJD_EPOCH)
    }
}

impl std::fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MJD {}", self.value())
    }
}

impl From<JulianDate> for ModifiedJulianDate {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.to_mjd()
    }
}

impl From<ModifiedJulianDate> for JulianDate {
    #[inline]
    fn from(mjd: ModifiedJulianDate) -> Self {
        mjd.to_jd()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Both instants serialize as the bare day number.

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

#[cfg(feature = "serde")]
impl Serialize for ModifiedJulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ModifiedJulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_creation() {
        let jd = JulianDate::new(2_451_545.0);
        assert_eq!(jd.days(), Days::new(2_451_545.0));
        assert_eq!(jd.value(), 2_451_545.0);
    }

    #[test]
    fn julian_centuries_at_epoch_and_one_century_later() {
        assert_eq!(JulianDate::J2000.julian_centuries().value(), 0.0);

        let jd = JulianDate::J2000 + JulianDate::JULIAN_CENTURY;
        assert!((jd.julian_centuries() - Centuries::new(1.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn julian_centuries_matches_raw_quotient() {
        let jd = JulianDate::new(2_460_309.32);
        let expected = (jd.value() - 2_451_545.0) / 36_525.0;
        assert!((jd.julian_centuries().value() - expected).abs() < 1e-12);
    }

    #[test]
    fn mjd_roundtrip() {
        let jd = JulianDate::new(2_451_545.0);
        let mjd = jd.to_mjd();
        assert!((mjd.days() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back = mjd.to_jd();
        assert!((back.days() - jd.days()).abs() < Days::new(1e-10));
    }

    #[test]
    fn mjd_from_into() {
        let jd = JulianDate::new(2_451_545.0);
        let mjd: ModifiedJulianDate = jd.into();
        assert!((mjd.days() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: JulianDate = mjd.into();
        assert!((back.days() - jd.days()).abs() < Days::new(1e-10));
    }

    #[test]
    fn from_utc_j2000_noon() {
        // 2000-01-01 12:00:00 UTC → JD 2451545.0 (plain epoch counting)
        let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
        let jd = JulianDate::from_utc(datetime);
        assert!((jd.days() - Days::new(2_451_545.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn utc_roundtrip() {
        let datetime = DateTime::from_timestamp(946_728_000, 123_000_000).unwrap();
        let jd = JulianDate::from_utc(datetime);
        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 10_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut jd = JulianDate::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.days(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.days(), Days::new(2_451_545.5));
    }

    #[test]
    fn difference_is_days() {
        let a = JulianDate::new(2_451_546.0);
        let b = JulianDate::new(2_451_545.0);
        assert_eq!(a - b, Days::new(1.0));
    }

    #[test]
    fn display_labels() {
        let jd = JulianDate::new(2_451_545.0);
        assert!(format!("{jd}").starts_with("JD "));
        let mjd = ModifiedJulianDate::new(51_544.5);
        assert!(format!("{mjd}").starts_with("MJD "));
    }
}
