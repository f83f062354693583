use log::warn;
use std::io::Error;

use crate::errors::ValidationError;
use crate::http::{Response, StatusCode};
use crate::interchange::http::ErrorPayload;

pub mod nicknames;

const GENERATION_FAILED: &'static str = "unable to generate nickname";
const INVALID_BODY: &'static str = "invalid request body";

pub fn invalid(error: ValidationError) -> Response {
  let payload = ErrorPayload {
    error: format!("{}", error),
  };

  Response::json(StatusCode::BAD_REQUEST, payload).unwrap_or_else(|_| Response::server_error())
}

pub fn invalid_body() -> Response {
  let payload = ErrorPayload {
    error: String::from(INVALID_BODY),
  };

  Response::json(StatusCode::BAD_REQUEST, payload).unwrap_or_else(|_| Response::server_error())
}

pub fn failed(original: Error) -> Response {
  warn!("request failed - {}", original);

  let payload = ErrorPayload {
    error: String::from(GENERATION_FAILED),
  };

  Response::json(StatusCode::INTERNAL_SERVER_ERROR, payload)
    .unwrap_or_else(|_| Response::server_error())
}

#[cfg(test)]
mod test {
  use super::{failed, invalid};
  use crate::errors::{self, ValidationError};
  use crate::http::StatusCode;

  #[test]
  fn validation_problems_are_client_errors() {
    let response = invalid(ValidationError::UnknownStyle(String::from("vaporwave")));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(format!("{}", response).contains("unknown style 'vaporwave'"));
  }

  #[test]
  fn unexpected_problems_are_server_errors() {
    let response = failed(errors::e("boom"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(format!("{}", response).contains("unable to generate nickname"));
  }
}
