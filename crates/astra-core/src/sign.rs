//! Sun signs and the calendar-date classifier.
//!
//! Each sign owns an inclusive day range of the Gregorian year. The twelve
//! ranges are mutually exclusive and exhaustive, so any valid calendar date
//! classifies to exactly one sign.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ─── SunSign ─────────────────────────────────────────────────────────────────

/// A zodiac sun sign, assigned by birthday.
///
/// `Unknown` is a sentinel for a date the range table fails to cover; a
/// well-formed table never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunSign {
  Aries,
  Taurus,
  Gemini,
  Cancer,
  Leo,
  Virgo,
  Libra,
  Scorpio,
  Sagittarius,
  Capricorn,
  Aquarius,
  Pisces,
  Unknown,
}

impl SunSign {
  /// The twelve real signs, in range-table order. Excludes `Unknown`.
  pub const ALL: [SunSign; 12] = [
    SunSign::Aries,
    SunSign::Taurus,
    SunSign::Gemini,
    SunSign::Cancer,
    SunSign::Leo,
    SunSign::Virgo,
    SunSign::Libra,
    SunSign::Scorpio,
    SunSign::Sagittarius,
    SunSign::Capricorn,
    SunSign::Aquarius,
    SunSign::Pisces,
  ];

  /// The label stored in the database and sent over the wire.
  pub fn as_str(&self) -> &'static str {
    match self {
      SunSign::Aries => "Aries",
      SunSign::Taurus => "Taurus",
      SunSign::Gemini => "Gemini",
      SunSign::Cancer => "Cancer",
      SunSign::Leo => "Leo",
      SunSign::Virgo => "Virgo",
      SunSign::Libra => "Libra",
      SunSign::Scorpio => "Scorpio",
      SunSign::Sagittarius => "Sagittarius",
      SunSign::Capricorn => "Capricorn",
      SunSign::Aquarius => "Aquarius",
      SunSign::Pisces => "Pisces",
      SunSign::Unknown => "Unknown",
    }
  }

  /// Parse a stored label back into a sign.
  pub fn from_label(s: &str) -> Option<SunSign> {
    match s {
      "Aries" => Some(SunSign::Aries),
      "Taurus" => Some(SunSign::Taurus),
      "Gemini" => Some(SunSign::Gemini),
      "Cancer" => Some(SunSign::Cancer),
      "Leo" => Some(SunSign::Leo),
      "Virgo" => Some(SunSign::Virgo),
      "Libra" => Some(SunSign::Libra),
      "Scorpio" => Some(SunSign::Scorpio),
      "Sagittarius" => Some(SunSign::Sagittarius),
      "Capricorn" => Some(SunSign::Capricorn),
      "Aquarius" => Some(SunSign::Aquarius),
      "Pisces" => Some(SunSign::Pisces),
      "Unknown" => Some(SunSign::Unknown),
      _ => None,
    }
  }

  /// Classify a calendar date into its sun sign.
  ///
  /// Date validity is the caller's problem — this takes an already-parsed
  /// [`NaiveDate`]. Returns [`SunSign::Unknown`] only if the range table
  /// fails to cover the date, which a well-formed table never does.
  pub fn from_date(date: NaiveDate) -> SunSign {
    let month = date.month();
    let day = date.day();

    for (sign, range) in &SIGN_RANGES {
      if range.contains(month, day) {
        return *sign;
      }
    }

    SunSign::Unknown
  }
}

impl fmt::Display for SunSign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Range table ─────────────────────────────────────────────────────────────

/// Inclusive day range a sign is active on. A `start_month` greater than
/// `end_month` encodes the December→January wraparound (Capricorn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
  pub start_month: u32,
  pub start_day:   u32,
  pub end_month:   u32,
  pub end_day:     u32,
}

impl SignRange {
  /// Whether a (month, day) pair falls inside this range.
  pub fn contains(&self, month: u32, day: u32) -> bool {
    (month == self.start_month && day >= self.start_day)
      || (month == self.end_month && day <= self.end_day)
  }
}

const fn range(
  start_month: u32,
  start_day:   u32,
  end_month:   u32,
  end_day:     u32,
) -> SignRange {
  SignRange { start_month, start_day, end_month, end_day }
}

/// The twelve sign ranges, evaluated in this order.
pub const SIGN_RANGES: [(SunSign, SignRange); 12] = [
  (SunSign::Aries, range(3, 21, 4, 19)),
  (SunSign::Taurus, range(4, 20, 5, 20)),
  (SunSign::Gemini, range(5, 21, 6, 20)),
  (SunSign::Cancer, range(6, 21, 7, 22)),
  (SunSign::Leo, range(7, 23, 8, 22)),
  (SunSign::Virgo, range(8, 23, 9, 22)),
  (SunSign::Libra, range(9, 23, 10, 22)),
  (SunSign::Scorpio, range(10, 23, 11, 21)),
  (SunSign::Sagittarius, range(11, 22, 12, 21)),
  (SunSign::Capricorn, range(12, 22, 1, 19)),
  (SunSign::Aquarius, range(1, 20, 2, 18)),
  (SunSign::Pisces, range(2, 19, 3, 20)),
];

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn classifies_known_birthdays() {
    assert_eq!(SunSign::from_date(date(1990, 3, 25)), SunSign::Aries);
    assert_eq!(SunSign::from_date(date(2000, 2, 29)), SunSign::Pisces);
    assert_eq!(SunSign::from_date(date(1985, 12, 25)), SunSign::Capricorn);
  }

  #[test]
  fn capricorn_wraps_across_new_year() {
    assert_eq!(SunSign::from_date(date(2023, 12, 22)), SunSign::Capricorn);
    assert_eq!(SunSign::from_date(date(2023, 12, 31)), SunSign::Capricorn);
    assert_eq!(SunSign::from_date(date(2024, 1, 1)), SunSign::Capricorn);
    assert_eq!(SunSign::from_date(date(2024, 1, 19)), SunSign::Capricorn);
    assert_eq!(SunSign::from_date(date(2024, 1, 20)), SunSign::Aquarius);
  }

  #[test]
  fn range_boundaries_have_no_gap_or_overlap() {
    // Last day of each range and first day of the next yield different signs.
    for (sign, range) in &SIGN_RANGES {
      let last = date(2023, range.end_month, range.end_day);
      let next = last.succ_opt().unwrap();
      assert_eq!(SunSign::from_date(last), *sign, "end of {sign}");
      assert_ne!(SunSign::from_date(next), *sign, "day after {sign}");
    }
  }

  #[test]
  fn every_day_of_a_leap_year_matches_exactly_one_range() {
    let mut day = date(2024, 1, 1);
    while day.year() == 2024 {
      let matching = SIGN_RANGES
        .iter()
        .filter(|(_, r)| r.contains(day.month(), day.day()))
        .count();
      assert_eq!(matching, 1, "{day}");
      assert_ne!(SunSign::from_date(day), SunSign::Unknown, "{day}");
      day = day.succ_opt().unwrap();
    }
  }

  #[test]
  fn leap_day_falls_in_pisces() {
    // Aquarius ends Feb 18, Pisces starts Feb 19.
    assert_eq!(SunSign::from_date(date(2024, 2, 18)), SunSign::Aquarius);
    assert_eq!(SunSign::from_date(date(2024, 2, 19)), SunSign::Pisces);
    assert_eq!(SunSign::from_date(date(2024, 2, 29)), SunSign::Pisces);
  }

  #[test]
  fn labels_round_trip() {
    for sign in SunSign::ALL {
      assert_eq!(SunSign::from_label(sign.as_str()), Some(sign));
    }
    assert_eq!(SunSign::from_label("Unknown"), Some(SunSign::Unknown));
    assert_eq!(SunSign::from_label("Ophiuchus"), None);
  }
}
