//! Profile types — one persisted record per submission.
//!
//! A profile is written once, when a submission passes validation, and is
//! never updated or deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, archetype::Archetype, sign::SunSign};

// ─── Persisted record ────────────────────────────────────────────────────────

/// A persisted profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
  /// Store-assigned; unique and monotonically increasing.
  pub profile_id: i64,
  pub name:       String,
  pub birthday:   NaiveDate,
  pub birthplace: String,
  pub job_title:  String,
  pub sun_sign:   SunSign,
  pub archetype:  Archetype,
  pub lat:        Option<f64>,
  pub lng:        Option<f64>,
  /// Store-assigned timestamp; never changes after creation.
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ProfileStore::insert_profile`].
/// `profile_id` and `created_at` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewProfile {
  pub name:       String,
  pub birthday:   NaiveDate,
  pub birthplace: String,
  pub job_title:  String,
  pub sun_sign:   SunSign,
  pub archetype:  Archetype,
  pub lat:        Option<f64>,
  pub lng:        Option<f64>,
}

// ─── Submission input ────────────────────────────────────────────────────────

/// A raw submission as collected by the form, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
  pub name:       String,
  pub birthday:   String,
  pub birthplace: String,
  pub job_title:  String,
}

/// A submission that passed validation: fields trimmed, birthday parsed.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
  pub name:       String,
  pub birthday:   NaiveDate,
  pub birthplace: String,
  pub job_title:  String,
}

impl ProfileInput {
  /// Validate the submission: every field non-empty after trimming, the
  /// birthday an ISO 8601 calendar date.
  pub fn validate(&self) -> Result<ProfileDraft> {
    let name = required(&self.name, "name")?;
    let birthday_raw = required(&self.birthday, "birthday")?;
    let birthplace = required(&self.birthplace, "birthplace")?;
    let job_title = required(&self.job_title, "job title")?;

    let birthday = birthday_raw
      .parse::<NaiveDate>()
      .map_err(|_| Error::InvalidBirthday(birthday_raw))?;

    Ok(ProfileDraft { name, birthday, birthplace, job_title })
  }
}

fn required(value: &str, field: &'static str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::MissingField(field));
  }
  Ok(trimmed.to_owned())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn input() -> ProfileInput {
    ProfileInput {
      name:       "Alice Liddell".into(),
      birthday:   "1990-03-25".into(),
      birthplace: "Oxford".into(),
      job_title:  "Archivist".into(),
    }
  }

  #[test]
  fn valid_input_passes_and_parses_birthday() {
    let draft = input().validate().unwrap();
    assert_eq!(draft.name, "Alice Liddell");
    assert_eq!(
      draft.birthday,
      NaiveDate::from_ymd_opt(1990, 3, 25).unwrap()
    );
  }

  #[test]
  fn fields_are_trimmed() {
    let mut raw = input();
    raw.name = "  Alice Liddell  ".into();
    raw.job_title = "\tArchivist\n".into();

    let draft = raw.validate().unwrap();
    assert_eq!(draft.name, "Alice Liddell");
    assert_eq!(draft.job_title, "Archivist");
  }

  #[test]
  fn each_missing_field_is_rejected() {
    let blanks: [fn(&mut ProfileInput); 4] = [
      |i| i.name.clear(),
      |i| i.birthday.clear(),
      |i| i.birthplace.clear(),
      |i| i.job_title.clear(),
    ];
    for blank in blanks {
      let mut raw = input();
      blank(&mut raw);
      assert!(matches!(raw.validate(), Err(Error::MissingField(_))));
    }
  }

  #[test]
  fn whitespace_only_field_is_rejected() {
    let mut raw = input();
    raw.birthplace = "   ".into();
    assert!(matches!(
      raw.validate(),
      Err(Error::MissingField("birthplace"))
    ));
  }

  #[test]
  fn unparseable_birthday_is_rejected() {
    for bad in ["25/03/1990", "1990-13-01", "1990-02-30", "soon"] {
      let mut raw = input();
      raw.birthday = bad.into();
      assert!(
        matches!(raw.validate(), Err(Error::InvalidBirthday(_))),
        "{bad}"
      );
    }
  }
}
