use std::io::{Error, ErrorKind};
use thiserror::Error as DeriveError;

pub fn humanize_error<E: std::error::Error>(e: E) -> Error {
  Error::new(ErrorKind::Other, format!("{}", e))
}

pub fn e<S: std::fmt::Display>(message: S) -> Error {
  Error::new(ErrorKind::Other, format!("{}", message))
}

// Input problems detected before any generation work starts. The variants hold
// the offending value as received, numeric or not.
#[derive(Clone, Debug, DeriveError, PartialEq)]
pub enum ValidationError {
  #[error("unknown style '{0}'")]
  UnknownStyle(String),

  #[error("length must be a number between 5 and 30, received '{0}'")]
  InvalidLength(String),

  #[error("count must be a number between 1 and 50, received '{0}'")]
  InvalidCount(String),
}
