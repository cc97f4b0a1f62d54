//! Birthplace coordinates and the `Geocoder` capability.

use rand::Rng as _;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub lat: f64,
  pub lng: f64,
}

/// Capability for resolving a place name to coordinates.
///
/// Synchronous and infallible because the shipped implementation fabricates
/// values locally. A real geocoding backend would make this an async,
/// fallible call with its own timeout and retry policy.
pub trait Geocoder: Send + Sync {
  fn geocode(&self, place: &str) -> Coordinates;
}

/// Stand-in for a real geocoding service: uniform random coordinates,
/// regardless of the place name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGeocoder;

impl Geocoder for MockGeocoder {
  fn geocode(&self, _place: &str) -> Coordinates {
    let mut rng = rand::thread_rng();
    Coordinates {
      lat: rng.gen_range(-90.0..90.0),
      lng: rng.gen_range(-180.0..180.0),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mock_coordinates_stay_in_range() {
    let geocoder = MockGeocoder;
    for _ in 0..1_000 {
      let c = geocoder.geocode("Oxford");
      assert!((-90.0..90.0).contains(&c.lat), "lat {}", c.lat);
      assert!((-180.0..180.0).contains(&c.lng), "lng {}", c.lng);
    }
  }
}
