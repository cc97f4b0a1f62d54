//! JSON REST API for Astra.
//!
//! Exposes an axum [`Router`] backed by any
//! [`astra_core::store::ProfileStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", astra_api::api_router(state))
//! ```

pub mod error;
pub mod health;
pub mod profiles;

use std::{path::PathBuf, sync::Arc};

use astra_core::{
  archetype::ArchetypeAssigner, geo::Geocoder, store::ProfileStore,
};
use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// The assigner and geocoder sit behind capability traits so the shipped
/// placeholders (random archetype, fabricated coordinates) can be replaced
/// without touching the handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:    Arc<S>,
  pub assigner: Arc<dyn ArchetypeAssigner>,
  pub geocoder: Arc<dyn Geocoder>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: ProfileStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/test", get(health::handler))
    .route("/user", post(profiles::submit::<S>))
    .route("/user/{id}", get(profiles::get_one::<S>))
    .route("/users", get(profiles::list::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use astra_core::{
    archetype::{Archetype, ArchetypeAssigner},
    geo::{Coordinates, Geocoder},
    response::guidance,
    sign::SunSign,
    store::ProfileStore as _,
  };
  use astra_store_sqlite::SqliteStore;
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  /// Always assigns the same archetype — pins down the canned-response path.
  struct FixedAssigner(Archetype);

  impl ArchetypeAssigner for FixedAssigner {
    fn assign(&self) -> Archetype { self.0 }
  }

  /// Always returns the same coordinates.
  struct FixedGeocoder;

  impl Geocoder for FixedGeocoder {
    fn geocode(&self, _place: &str) -> Coordinates {
      Coordinates { lat: 51.75, lng: -1.26 }
    }
  }

  async fn make_state(archetype: Archetype) -> AppState<SqliteStore> {
    AppState {
      store:    Arc::new(SqliteStore::open_in_memory().await.unwrap()),
      assigner: Arc::new(FixedAssigner(archetype)),
      geocoder: Arc::new(FixedGeocoder),
    }
  }

  async fn oneshot(
    state:  AppState<SqliteStore>,
    method: &str,
    uri:    &str,
    body:   &str,
  ) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let resp = api_router(state).oneshot(req).await.unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let json = if bytes.is_empty() {
      serde_json::Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  fn submission() -> serde_json::Value {
    serde_json::json!({
      "name":       "Alice Liddell",
      "birthday":   "1990-03-25",
      "birthplace": "Oxford",
      "jobTitle":   "Archivist",
    })
  }

  // ── Diagnostic ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn test_endpoint_reports_liveness() {
    let state = make_state(Archetype::Generator).await;
    let (status, json) = oneshot(state, "GET", "/test", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Server is running!");
  }

  // ── Submission ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn valid_submission_returns_created_profile() {
    let state = make_state(Archetype::Projector).await;
    let (status, json) = oneshot(
      state.clone(),
      "POST",
      "/user",
      &submission().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["userId"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Alice Liddell");
    assert_eq!(json["sunSign"], "Aries");
    assert_eq!(json["hdType"], "Projector");
    assert_eq!(
      json["chatResponse"],
      guidance(SunSign::Aries, Archetype::Projector)
    );

    // One row persisted, coordinates from the geocoder.
    let rows = state.store.list_profiles().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].profile_id, json["userId"].as_i64().unwrap());
    assert_eq!(rows[0].sun_sign, SunSign::Aries);
    assert_eq!(rows[0].lat, Some(51.75));
    assert_eq!(rows[0].lng, Some(-1.26));
  }

  #[tokio::test]
  async fn submission_sign_is_one_of_the_twelve() {
    let state = make_state(Archetype::Generator).await;
    let (status, json) =
      oneshot(state, "POST", "/user", &submission().to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let label = json["sunSign"].as_str().unwrap();
    let sign = SunSign::from_label(label).unwrap();
    assert!(SunSign::ALL.contains(&sign), "{label}");
  }

  #[tokio::test]
  async fn capricorn_wraparound_classifies_across_new_year() {
    let state = make_state(Archetype::Generator).await;
    let mut body = submission();
    body["birthday"] = "1985-12-25".into();

    let (status, json) =
      oneshot(state, "POST", "/user", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["sunSign"], "Capricorn");
  }

  #[tokio::test]
  async fn leap_day_classifies_as_pisces() {
    let state = make_state(Archetype::Generator).await;
    let mut body = submission();
    body["birthday"] = "2000-02-29".into();

    let (status, json) =
      oneshot(state, "POST", "/user", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["sunSign"], "Pisces");
  }

  // ── Validation ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn omitting_any_field_is_rejected_without_a_write() {
    for field in ["name", "birthday", "birthplace", "jobTitle"] {
      let state = make_state(Archetype::Generator).await;
      let mut body = submission();
      body.as_object_mut().unwrap().remove(field);

      let (status, json) =
        oneshot(state.clone(), "POST", "/user", &body.to_string()).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
      assert!(json["message"].is_string(), "{field}");
      assert!(
        state.store.list_profiles().await.unwrap().is_empty(),
        "{field}"
      );
    }
  }

  #[tokio::test]
  async fn whitespace_only_field_is_rejected() {
    let state = make_state(Archetype::Generator).await;
    let mut body = submission();
    body["name"] = "   ".into();

    let (status, _) =
      oneshot(state.clone(), "POST", "/user", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.store.list_profiles().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn unparseable_birthday_is_rejected() {
    for bad in ["not-a-date", "1990-02-30", "25/03/1990"] {
      let state = make_state(Archetype::Generator).await;
      let mut body = submission();
      body["birthday"] = bad.into();

      let (status, json) =
        oneshot(state.clone(), "POST", "/user", &body.to_string()).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
      assert!(
        json["message"].as_str().unwrap().contains("birthday"),
        "{bad}: {json}"
      );
      assert!(state.store.list_profiles().await.unwrap().is_empty());
    }
  }

  // ── Reads ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_user_returns_persisted_profile() {
    let state = make_state(Archetype::Reflector).await;
    let (_, created) = oneshot(
      state.clone(),
      "POST",
      "/user",
      &submission().to_string(),
    )
    .await;
    let id = created["userId"].as_i64().unwrap();

    let (status, json) =
      oneshot(state, "GET", &format!("/user/{id}"), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["profile_id"].as_i64(), Some(id));
    assert_eq!(json["name"], "Alice Liddell");
    assert_eq!(json["sun_sign"], "Aries");
    assert_eq!(json["archetype"], "Reflector");
    assert_eq!(json["lat"].as_f64(), Some(51.75));
  }

  #[tokio::test]
  async fn get_missing_user_returns_404() {
    let state = make_state(Archetype::Generator).await;
    let (status, _) = oneshot(state, "GET", "/user/999", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn users_lists_every_submission() {
    let state = make_state(Archetype::Generator).await;

    oneshot(state.clone(), "POST", "/user", &submission().to_string()).await;
    let mut second = submission();
    second["name"] = "Bob".into();
    oneshot(state.clone(), "POST", "/user", &second.to_string()).await;

    let (status, json) = oneshot(state, "GET", "/users", "").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Alice Liddell");
    assert_eq!(rows[1]["name"], "Bob");
  }
}
