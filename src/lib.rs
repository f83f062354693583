extern crate async_std;

pub mod configuration;
pub mod constants;
pub mod context;
pub mod errors;
pub mod http;
pub mod interchange;
pub mod nicknames;
pub mod routes;
pub mod version;

use async_std::io::{BufReader, Read as AsyncRead};
use async_std::net::{TcpListener, TcpStream};
use async_std::prelude::*;
use async_std::task;
use log::{debug, info, warn};
use std::io::{Error, ErrorKind, Result};
use std::marker::Unpin;

pub use crate::configuration::Configuration;
pub use crate::context::Context;
pub use crate::http::Response;

use crate::http::{header, Method, Uri};

const MAX_HEADER_COUNT: usize = 64;

#[derive(Debug)]
pub struct RequestHead {
  headers: header::HeaderMap,
  method: Method,
  path: String,
}

impl RequestHead {
  pub fn method(&self) -> &Method {
    &self.method
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn content_length(&self) -> usize {
    self
      .headers
      .get(header::CONTENT_LENGTH)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.trim().parse::<usize>().ok())
      .unwrap_or(0)
  }
}

#[cfg(test)]
impl RequestHead {
  pub(crate) fn test_sized(size: usize) -> Self {
    RequestHead::test_request(Method::GET, "/", size)
  }

  pub(crate) fn test_request(method: Method, path: &str, size: usize) -> Self {
    let mut headers = header::HeaderMap::new();
    let value = header::HeaderValue::from_str(&format!("{}", size)).expect("writable header");
    headers.insert(header::CONTENT_LENGTH, value);

    RequestHead {
      headers,
      method,
      path: String::from(path),
    }
  }
}

fn parse_header_name(raw_value: &str) -> Result<header::HeaderName> {
  header::HeaderName::from_bytes(raw_value.trim().as_bytes())
    .map_err(|_e| Error::from(ErrorKind::InvalidData))
}

fn parse_header_value(raw_value: &str) -> Result<header::HeaderValue> {
  header::HeaderValue::from_str(raw_value.trim()).map_err(|_e| Error::from(ErrorKind::InvalidData))
}

fn parse_header_line(line: &str) -> Result<(header::HeaderName, header::HeaderValue)> {
  let mut parts = line.splitn(2, ':');
  match (parts.next(), parts.next()) {
    (Some(left), Some(right)) => Ok((parse_header_name(left)?, parse_header_value(right)?)),
    _ => Err(Error::from(ErrorKind::InvalidData)),
  }
}

fn parse_method(raw_value: &str) -> Result<Method> {
  Method::from_bytes(raw_value.as_bytes()).map_err(|_e| Error::from(ErrorKind::InvalidData))
}

fn parse_request_line(line: &str) -> Result<(Method, String)> {
  let mut parts = line.split_whitespace();
  match (parts.next(), parts.next()) {
    (Some(left), Some(right)) => Ok((parse_method(left)?, String::from(right))),
    _ => Err(Error::from(ErrorKind::InvalidData)),
  }
}

async fn read_head<R>(reader: &mut BufReader<R>) -> Result<RequestHead>
where
  R: AsyncRead + Unpin,
{
  let mut request_line = String::new();

  if reader.read_line(&mut request_line).await? == 0 {
    return Err(Error::from(ErrorKind::UnexpectedEof));
  }

  let (method, path) = parse_request_line(&request_line)?;
  let mut headers = header::HeaderMap::new();

  for _ in 0..MAX_HEADER_COUNT {
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;

    if read == 0 || line.trim().is_empty() {
      let head = RequestHead {
        headers,
        method,
        path,
      };
      debug!("parsed request head - {} {}", head.method, head.path);
      return Ok(head);
    }

    let (name, value) = parse_header_line(&line)?;
    headers.insert(name, value);
  }

  Err(Error::from(ErrorKind::InvalidData))
}

pub async fn read_size_async<R>(reader: &mut R, size: usize) -> Result<Vec<u8>>
where
  R: AsyncRead + Unpin,
{
  let mut contents = vec![0u8; size];
  reader.read_exact(&mut contents).await?;
  Ok(contents)
}

async fn route<R>(head: &RequestHead, reader: &mut R, context: &Context) -> Result<Response>
where
  R: AsyncRead + Unpin,
{
  let uri = head.path().parse::<Uri>().map_err(errors::humanize_error)?;
  let segments = uri
    .path()
    .split('/')
    .filter(|part| !part.is_empty())
    .collect::<Vec<&str>>();

  match (head.method().as_str(), segments.as_slice()) {
    ("GET", ["nickname"]) => routes::nicknames::find(context, &uri).await,
    ("GET", ["nickname", style, length]) => {
      routes::nicknames::find_styled(context, &uri, *style, *length).await
    }
    ("POST", ["nickname"]) => routes::nicknames::create(context, reader).await,
    ("POST", ["nickname", "batch"]) => routes::nicknames::create_batch(context, reader).await,
    ("OPTIONS", _) => Ok(Response::default().cors(context.cors())),
    _ => {
      debug!("no route for {} {}", head.method(), head.path());
      Ok(Response::not_found().cors(context.cors()))
    }
  }
}

async fn handle(mut stream: TcpStream, configuration: Configuration) -> Result<()> {
  let mut reader = BufReader::new(stream.clone());
  let head = read_head(&mut reader).await?;

  let context = Context::builder()
    .configuration(&configuration)
    .for_request(&head)?;

  let response = match route(&head, &mut reader, &context).await {
    Ok(response) => response,
    Err(error) => routes::failed(error),
  };

  stream.write_all(format!("{}", response).as_bytes()).await?;
  stream.flush().await
}

pub async fn serve(configuration: Configuration) -> Result<()> {
  let listener = TcpListener::bind(configuration.addr.as_str()).await?;
  info!(
    "listener bound on '{}', entering accept loop",
    configuration.addr
  );
  let mut incoming = listener.incoming();

  while let Some(stream) = incoming.next().await {
    match stream {
      Ok(connection) => {
        let config = configuration.clone();

        task::spawn(async move {
          if let Err(error) = handle(connection, config).await {
            warn!("unable to handle connection - {}", error);
          }
        });
      }
      Err(error) => {
        warn!("invalid connection - {}", error);
        continue;
      }
    }
  }

  Ok(())
}
