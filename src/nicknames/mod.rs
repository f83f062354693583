use rand::Rng;
use serde::Deserialize;
use std::str::FromStr;

use crate::errors::ValidationError;

mod dictionary;
mod rating;

pub use dictionary::Dictionary;
pub use rating::{rate, Level, Rating};

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 30;

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
  Casual,
  Epic,
  Tech,
  Fantasy,
}

impl Style {
  pub fn as_str(&self) -> &'static str {
    match self {
      Style::Casual => "casual",
      Style::Epic => "epic",
      Style::Tech => "tech",
      Style::Fantasy => "fantasy",
    }
  }

  pub fn dictionary(&self) -> &'static Dictionary {
    match self {
      Style::Casual => &dictionary::CASUAL,
      Style::Epic => &dictionary::EPIC,
      Style::Tech => &dictionary::TECH,
      Style::Fantasy => &dictionary::FANTASY,
    }
  }

  pub fn base_score(&self) -> u32 {
    match self {
      Style::Casual => 15,
      Style::Epic => 25,
      Style::Tech => 20,
      Style::Fantasy => 22,
    }
  }
}

impl FromStr for Style {
  type Err = ValidationError;

  fn from_str(source: &str) -> Result<Self, Self::Err> {
    match source {
      "casual" => Ok(Style::Casual),
      "epic" => Ok(Style::Epic),
      "tech" => Ok(Style::Tech),
      "fantasy" => Ok(Style::Fantasy),
      other => Err(ValidationError::UnknownStyle(String::from(other))),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
  #[serde(default)]
  pub with_numbers: bool,

  #[serde(default)]
  pub with_symbols: bool,

  #[serde(default)]
  pub mixed_case: bool,
}

pub fn validated_length(candidate: i64) -> Result<usize, ValidationError> {
  match candidate {
    value if value >= MIN_LENGTH as i64 && value <= MAX_LENGTH as i64 => Ok(value as usize),
    value => Err(ValidationError::InvalidLength(format!("{}", value))),
  }
}

pub fn validated_count(candidate: i64) -> Result<usize, ValidationError> {
  match candidate {
    value if value >= MIN_COUNT as i64 && value <= MAX_COUNT as i64 => Ok(value as usize),
    value => Err(ValidationError::InvalidCount(format!("{}", value))),
  }
}

// Assembles a candidate from the style's word lists, trims it to the target
// and applies the optional digit/symbol padding and case scrambling, in that
// order. Padding only runs while the candidate is short of the target, so a
// call without padding flags may return fewer than `length` characters.
pub fn generate<R: Rng>(
  rng: &mut R,
  length: i64,
  style: &str,
  options: &GenerationOptions,
) -> Result<String, ValidationError> {
  let style = style.parse::<Style>()?;
  let length = validated_length(length)?;
  let dictionary = style.dictionary();

  let mut nickname = match rng.gen::<f64>() {
    roll if roll < 0.4 => format!("{}{}", dictionary.prefix(rng), dictionary.word(rng)),
    roll if roll < 0.7 => format!("{}{}", dictionary.word(rng), dictionary.suffix(rng)),
    _ => format!(
      "{}{}{}",
      dictionary.prefix(rng),
      dictionary.word(rng),
      dictionary.suffix(rng)
    ),
  };

  nickname.truncate(length);

  if options.with_numbers {
    while nickname.len() < length {
      nickname.push((b'0' + rng.gen_range(0..10u8)) as char);
    }
  }

  if options.with_symbols {
    while nickname.len() < length {
      nickname.push(if rng.gen_bool(0.5) { '_' } else { '-' });
    }
  }

  if options.mixed_case {
    nickname = nickname
      .chars()
      .map(|c| {
        if rng.gen_bool(0.5) {
          c.to_ascii_uppercase()
        } else {
          c.to_ascii_lowercase()
        }
      })
      .collect();
  }

  Ok(nickname)
}
