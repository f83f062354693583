use async_std::io::Read as AsyncRead;
use log::{debug, warn};
use rand::thread_rng;
use serde::Deserialize;
use serde_json::from_slice as deserialize;
use std::io::Result;
use std::marker::Unpin;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::http::{query_value, Response, Uri};
use crate::interchange::http::{BatchEntry, GeneratedNickname, NicknameBatch};
use crate::nicknames::{self, GenerationOptions, Style};
use crate::routes;
use crate::{constants, read_size_async, Context};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratePayload {
  length: Option<i64>,
  style: Option<String>,

  #[serde(default)]
  with_numbers: bool,

  #[serde(default)]
  with_symbols: bool,

  #[serde(default)]
  mixed_case: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchPayload {
  count: Option<i64>,
  length: Option<i64>,
  style: Option<String>,

  #[serde(default)]
  with_numbers: bool,

  #[serde(default)]
  with_symbols: bool,

  #[serde(default)]
  mixed_case: bool,
}

fn flag(uri: &Uri, name: &str) -> bool {
  query_value(uri, name)
    .map(|value| value == "true")
    .unwrap_or(false)
}

fn single(context: &Context, length: i64, style: &str, options: &GenerationOptions) -> Result<Response> {
  let mut rng = thread_rng();

  let nickname = match nicknames::generate(&mut rng, length, style, options) {
    Ok(nickname) => nickname,
    Err(error) => {
      debug!("rejecting generation - {}", error);
      return Ok(routes::invalid(error).cors(context.cors()));
    }
  };

  let rating = nicknames::rate(&nickname, style, context.language());
  let payload = GeneratedNickname {
    length: nickname.chars().count(),
    nickname,
    style: String::from(style),
    rating,
  };

  Response::ok_json(payload).map(|response| response.cors(context.cors()))
}

// Route
// GET /nickname
pub async fn find(context: &Context, uri: &Uri) -> Result<Response> {
  let length = match query_value(uri, "length") {
    None => constants::DEFAULT_LENGTH,
    Some(raw) => match raw.parse::<i64>() {
      Ok(value) => value,
      Err(_) => {
        debug!("non-numeric length '{}' on query", raw);
        return Ok(routes::invalid(ValidationError::InvalidLength(raw)).cors(context.cors()));
      }
    },
  };

  let style = query_value(uri, "style").unwrap_or_else(|| String::from(constants::DEFAULT_STYLE));

  let options = GenerationOptions {
    with_numbers: flag(uri, "numbers"),
    with_symbols: flag(uri, "symbols"),
    mixed_case: flag(uri, "mixedCase"),
  };

  single(context, length, &style, &options)
}

// Route
// GET /nickname/<style>/<length>
pub async fn find_styled(context: &Context, uri: &Uri, style: &str, length: &str) -> Result<Response> {
  let length = match length.parse::<i64>() {
    Ok(value) => value,
    Err(_) => {
      debug!("non-numeric length '{}' on path", length);
      return Ok(
        routes::invalid(ValidationError::InvalidLength(String::from(length))).cors(context.cors()),
      );
    }
  };

  let options = GenerationOptions {
    with_numbers: flag(uri, "numbers"),
    with_symbols: flag(uri, "symbols"),
    mixed_case: flag(uri, "mixedCase"),
  };

  single(context, length, style, &options)
}

// Route
// POST /nickname
pub async fn create<R>(context: &Context, reader: &mut R) -> Result<Response>
where
  R: AsyncRead + Unpin,
{
  let contents = read_size_async(reader, context.pending()).await?;

  let payload = match deserialize::<GeneratePayload>(&contents) {
    Ok(payload) => payload,
    Err(error) => {
      warn!("unable to parse generation payload - {}", error);
      return Ok(routes::invalid_body().cors(context.cors()));
    }
  };

  let length = payload.length.unwrap_or(constants::DEFAULT_LENGTH);
  let style = payload
    .style
    .unwrap_or_else(|| String::from(constants::DEFAULT_STYLE));

  let options = GenerationOptions {
    with_numbers: payload.with_numbers,
    with_symbols: payload.with_symbols,
    mixed_case: payload.mixed_case,
  };

  single(context, length, &style, &options)
}

// Route
// POST /nickname/batch
pub async fn create_batch<R>(context: &Context, reader: &mut R) -> Result<Response>
where
  R: AsyncRead + Unpin,
{
  let contents = read_size_async(reader, context.pending()).await?;

  let payload = match deserialize::<BatchPayload>(&contents) {
    Ok(payload) => payload,
    Err(error) => {
      warn!("unable to parse batch payload - {}", error);
      return Ok(routes::invalid_body().cors(context.cors()));
    }
  };

  let count = match nicknames::validated_count(payload.count.unwrap_or(constants::DEFAULT_COUNT)) {
    Ok(count) => count,
    Err(error) => {
      debug!("rejecting batch - {}", error);
      return Ok(routes::invalid(error).cors(context.cors()));
    }
  };

  let length = payload.length.unwrap_or(constants::DEFAULT_LENGTH);
  let style = payload
    .style
    .unwrap_or_else(|| String::from(constants::DEFAULT_STYLE));

  // reject everything up front; batches are all-or-nothing
  if let Err(error) = Style::from_str(&style).map(|_| ()).and(nicknames::validated_length(length)) {
    debug!("rejecting batch - {}", error);
    return Ok(routes::invalid(error).cors(context.cors()));
  }

  let options = GenerationOptions {
    with_numbers: payload.with_numbers,
    with_symbols: payload.with_symbols,
    mixed_case: payload.mixed_case,
  };

  let mut rng = thread_rng();
  let mut entries = Vec::with_capacity(count);

  for _ in 0..count {
    let nickname = match nicknames::generate(&mut rng, length, &style, &options) {
      Ok(nickname) => nickname,
      Err(error) => return Ok(routes::invalid(error).cors(context.cors())),
    };

    let rating = nicknames::rate(&nickname, &style, context.language());
    entries.push(BatchEntry { nickname, rating });
  }

  let payload = NicknameBatch {
    count: entries.len(),
    style,
    nicknames: entries,
  };

  Response::ok_json(payload).map(|response| response.cors(context.cors()))
}

#[cfg(test)]
mod test {
  use async_std::task::block_on;

  use super::{create, create_batch, find, find_styled};
  use crate::http::{StatusCode, Uri};
  use crate::{Configuration, Context, RequestHead};

  fn context(pending: usize) -> Context {
    let head = RequestHead::test_sized(pending);
    Context::builder()
      .configuration(&Configuration::default())
      .for_request(&head)
      .expect("buildable context")
  }

  fn uri(source: &str) -> Uri {
    source.parse::<Uri>().expect("parseable uri")
  }

  #[test]
  fn find_defaults_to_ten_casual_characters() {
    block_on(async {
      let response = find(&context(0), &uri("/nickname")).await.expect("routable");
      assert_eq!(response.status(), StatusCode::OK);

      let rendered = format!("{}", response);
      assert!(rendered.contains("\"style\":\"casual\""));
      assert!(rendered.contains("\"nickname\":\""));
    });
  }

  #[test]
  fn find_rejects_unknown_styles() {
    block_on(async {
      let response = find(&context(0), &uri("/nickname?style=vaporwave"))
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      assert!(format!("{}", response).contains("unknown style 'vaporwave'"));
    });
  }

  #[test]
  fn find_rejects_non_numeric_lengths() {
    block_on(async {
      let response = find(&context(0), &uri("/nickname?length=abc"))
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      assert!(format!("{}", response).contains("received 'abc'"));
    });
  }

  #[test]
  fn find_rejects_out_of_range_lengths() {
    block_on(async {
      for raw in ["4", "31"].iter() {
        let target = format!("/nickname?length={}", raw);
        let response = find(&context(0), &uri(&target)).await.expect("routable");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      }
    });
  }

  #[test]
  fn find_pads_to_the_requested_length() {
    block_on(async {
      let response = find(&context(0), &uri("/nickname?length=30&numbers=true"))
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);
      assert!(format!("{}", response).contains("\"length\":30"));
    });
  }

  #[test]
  fn find_styled_reads_path_parameters() {
    block_on(async {
      let response = find_styled(&context(0), &uri("/nickname/epic/12"), "epic", "12")
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);
      assert!(format!("{}", response).contains("\"style\":\"epic\""));
    });
  }

  #[test]
  fn find_styled_rejects_bad_path_lengths() {
    block_on(async {
      let response = find_styled(&context(0), &uri("/nickname/epic/many"), "epic", "many")
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    });
  }

  #[test]
  fn create_reads_the_json_body() {
    block_on(async {
      let body = r#"{"length": 12, "style": "tech", "withNumbers": true}"#;
      let mut reader = body.as_bytes();
      let response = create(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);

      let rendered = format!("{}", response);
      assert!(rendered.contains("\"style\":\"tech\""));
      assert!(rendered.contains("\"length\":12"));
    });
  }

  #[test]
  fn create_rejects_malformed_bodies() {
    block_on(async {
      let body = "length=12&style=tech";
      let mut reader = body.as_bytes();
      let response = create(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      assert!(format!("{}", response).contains("invalid request body"));
    });
  }

  #[test]
  fn create_defaults_absent_fields() {
    block_on(async {
      let body = "{}";
      let mut reader = body.as_bytes();
      let response = create(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);
      assert!(format!("{}", response).contains("\"style\":\"casual\""));
    });
  }

  #[test]
  fn batch_produces_the_requested_count() {
    block_on(async {
      let body = r#"{"count": 50, "length": 8, "style": "fantasy", "withSymbols": true}"#;
      let mut reader = body.as_bytes();
      let response = create_batch(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);

      let rendered = format!("{}", response);
      assert!(rendered.contains("\"count\":50"));
      assert_eq!(rendered.matches("\"nickname\":").count(), 50);
    });
  }

  #[test]
  fn batch_rejects_out_of_range_counts() {
    block_on(async {
      for count in [0, 51].iter() {
        let body = format!("{{\"count\": {}}}", count);
        let mut reader = body.as_bytes();
        let response = create_batch(&context(body.len()), &mut reader)
          .await
          .expect("routable");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(format!("{}", response).contains("count must be a number"));
      }
    });
  }

  #[test]
  fn batch_rejects_unknown_styles_before_generating() {
    block_on(async {
      let body = r#"{"count": 3, "style": "vaporwave"}"#;
      let mut reader = body.as_bytes();
      let response = create_batch(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      assert!(format!("{}", response).contains("unknown style"));
    });
  }

  #[test]
  fn batch_defaults_to_five_entries() {
    block_on(async {
      let body = "{}";
      let mut reader = body.as_bytes();
      let response = create_batch(&context(body.len()), &mut reader)
        .await
        .expect("routable");
      assert_eq!(response.status(), StatusCode::OK);
      assert!(format!("{}", response).contains("\"count\":5"));
    });
  }
}
