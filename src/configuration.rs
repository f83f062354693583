extern crate serde;

use log::warn;
use serde::Deserialize;
use std::fs::read;
use std::io::{Error, ErrorKind};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Language {
  English,
  Russian,
}

impl Default for Language {
  fn default() -> Self {
    Language::English
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Configuration {
  #[serde(default = "Configuration::default_addr")]
  pub addr: String,

  #[serde(default = "Configuration::default_cors_origin")]
  pub cors_origin: String,

  #[serde(default)]
  pub language: Language,
}

impl Configuration {
  fn default_addr() -> String {
    String::from("0.0.0.0:8080")
  }

  fn default_cors_origin() -> String {
    String::from("*")
  }
}

impl Default for Configuration {
  fn default() -> Self {
    Configuration {
      addr: Configuration::default_addr(),
      cors_origin: Configuration::default_cors_origin(),
      language: Language::default(),
    }
  }
}

impl FromStr for Configuration {
  type Err = Error;

  fn from_str(source: &str) -> Result<Self, Self::Err> {
    let result = serde_json::from_str::<Configuration>(
      String::from_utf8(read(source)?)
        .or(Err(Error::from(ErrorKind::InvalidData)))?
        .as_str(),
    );

    if let Err(e) = &result {
      warn!("unable to parse '{}': {:?}", source, e);
    }

    result.or(Err(Error::from(ErrorKind::InvalidData)))
  }
}
