//! [`SqliteStore`] — the SQLite implementation of [`ProfileStore`].

use std::path::Path;

use astra_core::{
  profile::{NewProfile, Profile},
  store::ProfileStore,
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawProfile, encode_date, encode_dt},
  schema::SCHEMA,
};

const PROFILE_COLUMNS: &str = "profile_id, name, birthday, birthplace, \
                               job_title, sun_sign, archetype, lat, lng, \
                               created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Astra profile store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ProfileStore impl ───────────────────────────────────────────────────────

impl ProfileStore for SqliteStore {
  type Error = Error;

  async fn insert_profile(&self, input: NewProfile) -> Result<Profile> {
    let created_at = Utc::now();

    let name        = input.name.clone();
    let birthday    = encode_date(input.birthday);
    let birthplace  = input.birthplace.clone();
    let job_title   = input.job_title.clone();
    let sun_sign    = input.sun_sign.as_str();
    let archetype   = input.archetype.as_str();
    let lat         = input.lat;
    let lng         = input.lng;
    let created_str = encode_dt(created_at);

    let profile_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO profiles (
             name, birthday, birthplace, job_title,
             sun_sign, archetype, lat, lng, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            name, birthday, birthplace, job_title,
            sun_sign, archetype, lat, lng, created_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Profile {
      profile_id,
      name:       input.name,
      birthday:   input.birthday,
      birthplace: input.birthplace,
      job_title:  input.job_title,
      sun_sign:   input.sun_sign,
      archetype:  input.archetype,
      lat:        input.lat,
      lng:        input.lng,
      created_at,
    })
  }

  async fn get_profile(&self, id: i64) -> Result<Option<Profile>> {
    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE profile_id = ?1"),
              rusqlite::params![id],
              RawProfile::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawProfile::into_profile).transpose()
  }

  async fn list_profiles(&self) -> Result<Vec<Profile>> {
    let raws: Vec<RawProfile> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY profile_id"
        ))?;
        let rows = stmt
          .query_map([], RawProfile::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawProfile::into_profile).collect()
  }
}
