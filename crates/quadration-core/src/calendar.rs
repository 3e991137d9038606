//! # Calendar Module
//!
//! Turns a birth date and a target date into the integers the engine runs
//! on: age, spread year and days elapsed since the last anniversary.
//!
//! - A Feb-29 birthday is observed on Mar-1 in non-leap years
//! - Day 1 is the anniversary itself
//! - Spread year is `age + 1` clamped to `[1, 90]`

use crate::SpreadError;
use crate::primitives::{DEFAULT_TARGET_YMD, MAX_SPREAD_YEAR, MIN_SPREAD_YEAR};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format accepted for full dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed target date used when none is supplied.
pub fn default_target_date() -> Result<NaiveDate, SpreadError> {
    let (year, month, day) = DEFAULT_TARGET_YMD;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SpreadError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, SpreadError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| SpreadError::InvalidDate(format!("{:?}: {}", text, e)))
}

// =============================================================================
// BIRTH DATE
// =============================================================================

/// A validated birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Create a birth date, rejecting impossible calendar dates.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, SpreadError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| SpreadError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parse a `YYYY-MM-DD` birth date.
    pub fn parse(text: &str) -> Result<Self, SpreadError> {
        parse_date(text).map(Self)
    }

    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The date this birthday is observed on in `year`.
    pub fn observed_in(&self, year: i32) -> Result<NaiveDate, SpreadError> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .ok_or_else(|| SpreadError::InvalidDate(format!("year {year} out of range")))
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

// =============================================================================
// SPREAD YEAR
// =============================================================================

/// Spread year: `age + 1`, clamped to `[1, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpreadYear(u32);

impl SpreadYear {
    pub const MIN: SpreadYear = SpreadYear(MIN_SPREAD_YEAR);
    pub const MAX: SpreadYear = SpreadYear(MAX_SPREAD_YEAR);

    /// Spread year for an age. Never fails; out-of-range ages clamp.
    #[must_use]
    pub fn from_age(age: i32) -> Self {
        let year = age
            .saturating_add(1)
            .clamp(MIN_SPREAD_YEAR as i32, MAX_SPREAD_YEAR as i32);
        Self(year as u32)
    }

    /// Clamp an explicit spread year into range.
    #[must_use]
    pub fn clamped(year: u32) -> Self {
        Self(year.clamp(MIN_SPREAD_YEAR, MAX_SPREAD_YEAR))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Chain length required for this spread year.
    #[must_use]
    pub const fn chain_len(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpreadYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ANNIVERSARY
// =============================================================================

/// Where a target date falls relative to a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anniversary {
    /// Most recent observed birthday on or before the target.
    pub date: NaiveDate,
    /// Completed years at that anniversary.
    pub age: i32,
    /// 1-based day count; the anniversary itself is day 1.
    pub days_since: u32,
    pub spread_year: SpreadYear,
}

impl Anniversary {
    /// Locate the most recent anniversary of `birth` on or before `target`.
    pub fn locate(birth: BirthDate, target: NaiveDate) -> Result<Self, SpreadError> {
        let mut date = birth.observed_in(target.year())?;
        if date > target {
            date = birth.observed_in(target.year() - 1)?;
        }

        let age = date.year() - birth.year();
        let elapsed = (target - date).num_days() + 1;
        let days_since = u32::try_from(elapsed)
            .map_err(|_| SpreadError::InvalidDate(format!("{elapsed} days since anniversary")))?;

        Ok(Self {
            date,
            age,
            days_since,
            spread_year: SpreadYear::from_age(age),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn anniversary_earlier_this_year() {
        let birth = BirthDate::new(1991, 2, 17).expect("birth");
        let a = Anniversary::locate(birth, date(2026, 2, 21)).expect("locate");
        assert_eq!(a.date, date(2026, 2, 17));
        assert_eq!(a.age, 35);
        assert_eq!(a.days_since, 5);
        assert_eq!(a.spread_year.get(), 36);
    }

    #[test]
    fn anniversary_falls_back_to_last_year() {
        let birth = BirthDate::new(1991, 2, 17).expect("birth");
        let a = Anniversary::locate(birth, date(2026, 2, 16)).expect("locate");
        assert_eq!(a.date, date(2025, 2, 17));
        assert_eq!(a.age, 34);
        assert_eq!(a.days_since, 365);
    }

    #[test]
    fn anniversary_day_is_day_one() {
        let birth = BirthDate::new(2000, 7, 4).expect("birth");
        let a = Anniversary::locate(birth, date(2024, 7, 4)).expect("locate");
        assert_eq!(a.days_since, 1);
        assert_eq!(a.age, 24);
    }

    #[test]
    fn leap_day_observed_on_march_first() {
        let birth = BirthDate::new(2000, 2, 29).expect("birth");
        assert_eq!(birth.observed_in(2023).expect("observed"), date(2023, 3, 1));
        assert_eq!(birth.observed_in(2024).expect("observed"), date(2024, 2, 29));

        let a = Anniversary::locate(birth, date(2023, 3, 10)).expect("locate");
        assert_eq!(a.date, date(2023, 3, 1));
        assert_eq!(a.days_since, 10);
    }

    #[test]
    fn spread_year_clamps_both_ends() {
        assert_eq!(SpreadYear::from_age(-5).get(), 1);
        assert_eq!(SpreadYear::from_age(0).get(), 1);
        assert_eq!(SpreadYear::from_age(35).get(), 36);
        assert_eq!(SpreadYear::from_age(89).get(), 90);
        assert_eq!(SpreadYear::from_age(140).get(), 90);
        assert_eq!(SpreadYear::from_age(i32::MAX).get(), 90);
        assert_eq!(SpreadYear::clamped(0), SpreadYear::MIN);
        assert_eq!(SpreadYear::clamped(200), SpreadYear::MAX);
    }

    #[test]
    fn target_before_birth_clamps_to_first_year() {
        let birth = BirthDate::new(2030, 5, 1).expect("birth");
        let a = Anniversary::locate(birth, date(2026, 3, 15)).expect("locate");
        assert!(a.age < 0);
        assert_eq!(a.spread_year.get(), 1);
    }

    #[test]
    fn invalid_birth_dates_rejected() {
        assert!(matches!(
            BirthDate::new(2023, 2, 29),
            Err(SpreadError::InvalidDate(_))
        ));
        assert!(matches!(
            BirthDate::parse("1991-13-01"),
            Err(SpreadError::InvalidDate(_))
        ));
    }

    #[test]
    fn default_target_is_mid_march_2026() {
        assert_eq!(default_target_date().expect("default"), date(2026, 3, 15));
    }
}
