//! Integration tests for `SqliteStore` against an in-memory database.

use astra_core::{
  archetype::Archetype, profile::NewProfile, sign::SunSign,
  store::ProfileStore,
};
use chrono::NaiveDate;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn aries_profile(name: &str) -> NewProfile {
  NewProfile {
    name:       name.into(),
    birthday:   NaiveDate::from_ymd_opt(1990, 3, 25).unwrap(),
    birthplace: "Oxford".into(),
    job_title:  "Archivist".into(),
    sun_sign:   SunSign::Aries,
    archetype:  Archetype::Generator,
    lat:        Some(51.75),
    lng:        Some(-1.26),
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_profile() {
  let s = store().await;

  let inserted = s.insert_profile(aries_profile("Alice")).await.unwrap();
  assert!(inserted.profile_id > 0);

  let fetched = s
    .get_profile(inserted.profile_id)
    .await
    .unwrap()
    .expect("profile exists");

  assert_eq!(fetched.profile_id, inserted.profile_id);
  assert_eq!(fetched.name, "Alice");
  assert_eq!(
    fetched.birthday,
    NaiveDate::from_ymd_opt(1990, 3, 25).unwrap()
  );
  assert_eq!(fetched.birthplace, "Oxford");
  assert_eq!(fetched.job_title, "Archivist");
  assert_eq!(fetched.sun_sign, SunSign::Aries);
  assert_eq!(fetched.archetype, Archetype::Generator);
  assert_eq!(fetched.lat, Some(51.75));
  assert_eq!(fetched.lng, Some(-1.26));
  assert_eq!(fetched.created_at, inserted.created_at);
}

#[tokio::test]
async fn get_profile_missing_returns_none() {
  let s = store().await;
  let result = s.get_profile(42).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn identifiers_increase_monotonically() {
  let s = store().await;

  let a = s.insert_profile(aries_profile("a")).await.unwrap();
  let b = s.insert_profile(aries_profile("b")).await.unwrap();
  let c = s.insert_profile(aries_profile("c")).await.unwrap();

  assert!(a.profile_id > 0);
  assert!(b.profile_id > a.profile_id);
  assert!(c.profile_id > b.profile_id);
}

#[tokio::test]
async fn absent_coordinates_round_trip_as_none() {
  let s = store().await;

  let mut input = aries_profile("no-coords");
  input.lat = None;
  input.lng = None;

  let inserted = s.insert_profile(input).await.unwrap();
  let fetched = s
    .get_profile(inserted.profile_id)
    .await
    .unwrap()
    .unwrap();

  assert_eq!(fetched.lat, None);
  assert_eq!(fetched.lng, None);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_profiles_empty_store() {
  let s = store().await;
  assert!(s.list_profiles().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_profiles_in_insertion_order() {
  let s = store().await;

  s.insert_profile(aries_profile("first")).await.unwrap();
  s.insert_profile(aries_profile("second")).await.unwrap();
  s.insert_profile(aries_profile("third")).await.unwrap();

  let all = s.list_profiles().await.unwrap();
  let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["first", "second", "third"]);
}

// ─── Label round-trips ───────────────────────────────────────────────────────

#[tokio::test]
async fn every_sign_and_archetype_round_trips() {
  let s = store().await;

  for (i, sign) in SunSign::ALL.into_iter().enumerate() {
    let archetype = Archetype::ALL[i % Archetype::ALL.len()];
    let mut input = aries_profile("roundtrip");
    input.sun_sign = sign;
    input.archetype = archetype;

    let inserted = s.insert_profile(input).await.unwrap();
    let fetched = s
      .get_profile(inserted.profile_id)
      .await
      .unwrap()
      .unwrap();

    assert_eq!(fetched.sun_sign, sign);
    assert_eq!(fetched.archetype, archetype);
  }
}
