extern crate http;

use http::header::{
  HeaderName, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
  ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS, CONTENT_LENGTH, CONTENT_TYPE,
};
pub use http::{header, Method, StatusCode, Uri};
pub use url::form_urlencoded as query;

use log::debug;
use std::io::Result;

pub type HeaderMap = Vec<(HeaderName, String)>;

#[derive(Debug)]
pub enum Payload {
  String(String),
  Empty,
}

impl Default for Payload {
  fn default() -> Self {
    Payload::Empty
  }
}

impl std::fmt::Display for Payload {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Payload::String(s) => write!(formatter, "{}", s),
      Payload::Empty => write!(formatter, ""),
    }
  }
}

impl Payload {
  pub fn len(&self) -> Option<usize> {
    match self {
      Payload::String(s) => Some(s.len()),
      Payload::Empty => None,
    }
  }
}

#[derive(Debug, Default)]
pub struct Response(StatusCode, HeaderMap, Payload);

impl Response {
  pub fn json<S: serde::Serialize>(code: StatusCode, data: S) -> Result<Self> {
    let body = serde_json::to_string(&data)?;
    let mut header_map = HeaderMap::default();
    debug!("building json response ({})", code);
    header_map.push((CONTENT_TYPE, "application/json".to_string()));
    Ok(Response(code, header_map, Payload::String(body)))
  }

  pub fn ok_json<S: serde::Serialize>(data: S) -> Result<Self> {
    Response::json(StatusCode::OK, data)
  }

  pub fn not_found() -> Response {
    Response(StatusCode::NOT_FOUND, HeaderMap::default(), Payload::Empty)
  }

  pub fn server_error() -> Response {
    Response(
      StatusCode::INTERNAL_SERVER_ERROR,
      HeaderMap::default(),
      Payload::Empty,
    )
  }

  pub fn status(&self) -> StatusCode {
    self.0
  }

  pub fn cors(self, origin: String) -> Self {
    let Response(code, mut header_map, body) = self;

    debug!("adding cors headers");
    header_map.push((ACCESS_CONTROL_ALLOW_ORIGIN, origin));
    header_map.push((ACCESS_CONTROL_ALLOW_HEADERS, CONTENT_TYPE.to_string()));
    header_map.push((ACCESS_CONTROL_REQUEST_HEADERS, CONTENT_TYPE.to_string()));
    header_map.push((ACCESS_CONTROL_ALLOW_METHODS, "post, get, options".to_string()));

    Response(code, header_map, body)
  }
}

impl std::fmt::Display for Response {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    let Response(code, header_map, body) = self;
    let lenh = body.len().map(|b| (CONTENT_LENGTH, format!("{}", b)));

    let headers = header_map
      .iter()
      .chain(lenh.iter())
      .map(|(v, k)| format!("{}: {}\r\n", v, k))
      .collect::<String>();

    write!(formatter, "HTTP/1.0 {}\r\n{}\r\n{}", code, headers, body)
  }
}

pub fn query_values<S: std::fmt::Display>(uri: &Uri, name: S) -> Vec<String> {
  let target = format!("{}", name);

  uri
    .query()
    .map(|source| {
      query::parse(source.as_bytes())
        .filter(|(key, _)| key == &target)
        .map(|(_, value)| String::from(value))
        .collect()
    })
    .unwrap_or_default()
}

pub fn query_value<S: std::fmt::Display>(uri: &Uri, name: S) -> Option<String> {
  query_values(uri, name).into_iter().next()
}
