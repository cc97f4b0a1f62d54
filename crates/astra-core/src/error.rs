//! Error types for `astra-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid birthday: {0:?}")]
  InvalidBirthday(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
