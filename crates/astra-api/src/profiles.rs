//! Handlers for the submission and profile read endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/user` | Body: [`SubmitBody`]; returns 201 + [`SubmitResponse`] |
//! | `GET`  | `/user/:id` | Full persisted profile; 404 if not found |
//! | `GET`  | `/users` | All persisted profiles |

use astra_core::{
  archetype::Archetype,
  profile::{NewProfile, Profile, ProfileInput},
  response::guidance,
  sign::SunSign,
  store::ProfileStore,
};
use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Submit ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /user`.
///
/// Fields default to empty strings so an omitted field reaches validation
/// (and its 400) instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub birthday:   String,
  #[serde(default)]
  pub birthplace: String,
  #[serde(default)]
  pub job_title:  String,
}

impl From<SubmitBody> for ProfileInput {
  fn from(b: SubmitBody) -> Self {
    ProfileInput {
      name:       b.name,
      birthday:   b.birthday,
      birthplace: b.birthplace,
      job_title:  b.job_title,
    }
  }
}

/// Success payload for `POST /user`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
  pub user_id:       i64,
  pub name:          String,
  pub sun_sign:      SunSign,
  pub hd_type:       Archetype,
  pub chat_response: String,
}

/// `POST /user` — validate, derive, persist, respond.
///
/// The pipeline is linear: classify the sign, assign an archetype, resolve
/// the guidance text, fabricate coordinates, insert the profile. Validation
/// failure leaves the store untouched.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<SubmitBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ProfileStore + Clone,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let draft = ProfileInput::from(body)
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let sun_sign = SunSign::from_date(draft.birthday);
  let archetype = state.assigner.assign();
  let chat_response = guidance(sun_sign, archetype);

  tracing::debug!(birthplace = %draft.birthplace, "geocoding birthplace");
  let coords = state.geocoder.geocode(&draft.birthplace);

  let profile = state
    .store
    .insert_profile(NewProfile {
      name:       draft.name,
      birthday:   draft.birthday,
      birthplace: draft.birthplace,
      job_title:  draft.job_title,
      sun_sign,
      archetype,
      lat:        Some(coords.lat),
      lng:        Some(coords.lng),
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((
    StatusCode::CREATED,
    Json(SubmitResponse {
      user_id:       profile.profile_id,
      name:          profile.name,
      sun_sign,
      hd_type:       archetype,
      chat_response,
    }),
  ))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /user/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Profile>, ApiError>
where
  S: ProfileStore + Clone,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let profile = state
    .store
    .get_profile(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("profile {id} not found")))?;
  Ok(Json(profile))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Profile>>, ApiError>
where
  S: ProfileStore + Clone,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let profiles = state
    .store
    .list_profiles()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(profiles))
}
