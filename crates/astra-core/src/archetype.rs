//! Human design archetypes and the assignment capability.

use std::fmt;

use rand::Rng as _;
use serde::{Deserialize, Serialize};

// ─── Archetype ───────────────────────────────────────────────────────────────

/// One of the four human design types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
  Generator,
  Projector,
  Manifestor,
  Reflector,
}

impl Archetype {
  pub const ALL: [Archetype; 4] = [
    Archetype::Generator,
    Archetype::Projector,
    Archetype::Manifestor,
    Archetype::Reflector,
  ];

  /// The label stored in the database and sent over the wire.
  pub fn as_str(&self) -> &'static str {
    match self {
      Archetype::Generator => "Generator",
      Archetype::Projector => "Projector",
      Archetype::Manifestor => "Manifestor",
      Archetype::Reflector => "Reflector",
    }
  }

  /// Parse a stored label back into an archetype.
  pub fn from_label(s: &str) -> Option<Archetype> {
    match s {
      "Generator" => Some(Archetype::Generator),
      "Projector" => Some(Archetype::Projector),
      "Manifestor" => Some(Archetype::Manifestor),
      "Reflector" => Some(Archetype::Reflector),
      _ => None,
    }
  }
}

impl fmt::Display for Archetype {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Assignment capability ───────────────────────────────────────────────────

/// Capability for attaching an archetype to a new profile.
///
/// Object-safe so orchestration can hold an `Arc<dyn ArchetypeAssigner>` and
/// swap implementations without being touched.
pub trait ArchetypeAssigner: Send + Sync {
  fn assign(&self) -> Archetype;
}

/// Uniform random assignment — a stand-in until a real human design chart
/// computation (birth time + location) replaces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAssigner;

impl ArchetypeAssigner for RandomAssigner {
  fn assign(&self) -> Archetype {
    let idx = rand::thread_rng().gen_range(0..Archetype::ALL.len());
    Archetype::ALL[idx]
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
