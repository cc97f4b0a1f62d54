//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, birthdays as ISO 8601 calendar
//! dates, signs and archetypes as their wire labels.

use astra_core::{
  archetype::Archetype,
  profile::Profile,
  sign::SunSign,
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse::<NaiveDate>()
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Labels ──────────────────────────────────────────────────────────────────

pub fn decode_sign(s: &str) -> Result<SunSign> {
  SunSign::from_label(s).ok_or_else(|| Error::UnknownSign(s.to_owned()))
}

pub fn decode_archetype(s: &str) -> Result<Archetype> {
  Archetype::from_label(s).ok_or_else(|| Error::UnknownArchetype(s.to_owned()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `profiles` row.
pub struct RawProfile {
  pub profile_id: i64,
  pub name:       String,
  pub birthday:   String,
  pub birthplace: String,
  pub job_title:  String,
  pub sun_sign:   String,
  pub archetype:  String,
  pub lat:        Option<f64>,
  pub lng:        Option<f64>,
  pub created_at: String,
}

impl RawProfile {
  /// Read a row produced by a `SELECT` of all `profiles` columns in schema
  /// order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawProfile {
      profile_id: row.get(0)?,
      name:       row.get(1)?,
      birthday:   row.get(2)?,
      birthplace: row.get(3)?,
      job_title:  row.get(4)?,
      sun_sign:   row.get(5)?,
      archetype:  row.get(6)?,
      lat:        row.get(7)?,
      lng:        row.get(8)?,
      created_at: row.get(9)?,
    })
  }

  pub fn into_profile(self) -> Result<Profile> {
    Ok(Profile {
      profile_id: self.profile_id,
      name:       self.name,
      birthday:   decode_date(&self.birthday)?,
      birthplace: self.birthplace,
      job_title:  self.job_title,
      sun_sign:   decode_sign(&self.sun_sign)?,
      archetype:  decode_archetype(&self.archetype)?,
      lat:        self.lat,
      lng:        self.lng,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
