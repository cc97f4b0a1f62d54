//! The `ProfileStore` trait.
//!
//! Implemented by storage backends (e.g. `astra-store-sqlite`). Higher
//! layers (`astra-api`) depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::profile::{NewProfile, Profile};

/// Abstraction over a profile store backend.
///
/// The store is append-only: profiles are inserted and read, never updated
/// or deleted. All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ProfileStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new profile and return the stored row. The store assigns
  /// `profile_id` (unique, monotonically increasing) and `created_at`.
  fn insert_profile(
    &self,
    input: NewProfile,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + '_;

  /// Retrieve a profile by identifier. Returns `None` if not found.
  fn get_profile(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// List all profiles in insertion order.
  fn list_profiles(
    &self,
  ) -> impl Future<Output = Result<Vec<Profile>, Self::Error>> + Send + '_;
}
