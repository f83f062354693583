use serde::Serialize;

use crate::nicknames::Rating;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratedNickname {
  pub nickname: String,
  pub style: String,
  pub length: usize,
  pub rating: Rating,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchEntry {
  pub nickname: String,
  pub rating: Rating,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NicknameBatch {
  pub count: usize,
  pub style: String,
  pub nicknames: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ErrorPayload {
  pub error: String,
}

#[cfg(test)]
mod test {
  use super::GeneratedNickname;
  use crate::configuration::Language;
  use crate::nicknames::rate;

  #[test]
  fn single_payload_shape() {
    let payload = GeneratedNickname {
      nickname: String::from("CoolFox42"),
      style: String::from("casual"),
      length: 9,
      rating: rate("CoolFox42", "casual", Language::English),
    };

    let serialized = serde_json::to_string(&payload).expect("serializable");
    assert!(serialized.starts_with("{\"nickname\":\"CoolFox42\",\"style\":\"casual\",\"length\":9"));
    assert!(serialized.contains("\"rating\":{\"level\":"));
    assert!(serialized.contains("\"label\":"));
  }
}
