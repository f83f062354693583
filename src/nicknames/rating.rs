use serde::Serialize;
use std::str::FromStr;

use crate::configuration::Language;
use crate::nicknames::Style;

const DEFAULT_BASE_SCORE: u32 = 15;

const BORING_CEILING: u32 = 40;
const COOL_CEILING: u32 = 60;
const AWESOME_CEILING: u32 = 80;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
  Boring,
  Cool,
  Awesome,
  Legendary,
}

impl Level {
  fn from_score(score: u32) -> Self {
    match score {
      score if score < BORING_CEILING => Level::Boring,
      score if score < COOL_CEILING => Level::Cool,
      score if score < AWESOME_CEILING => Level::Awesome,
      _ => Level::Legendary,
    }
  }

  pub fn label(&self, language: Language) -> &'static str {
    match (self, language) {
      (Level::Boring, Language::English) => "Boring",
      (Level::Cool, Language::English) => "Cool",
      (Level::Awesome, Language::English) => "Awesome",
      (Level::Legendary, Language::English) => "Legendary",
      (Level::Boring, Language::Russian) => "Скучный",
      (Level::Cool, Language::Russian) => "Крутой",
      (Level::Awesome, Language::Russian) => "Потрясающий",
      (Level::Legendary, Language::Russian) => "Легендарный",
    }
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Rating {
  pub level: Level,
  pub label: &'static str,
}

// Unknown styles fall back to the casual base score instead of failing; the
// rater accepts anything the caller hands it.
fn score(nickname: &str, style: &str) -> u32 {
  let base = Style::from_str(style)
    .map(|known| known.base_score())
    .unwrap_or(DEFAULT_BASE_SCORE);

  let mut total = base + 2 * nickname.chars().count() as u32;

  if nickname.chars().any(|c| c.is_ascii_digit()) {
    total += 10;
  }

  if nickname.chars().any(|c| c == '_' || c == '-') {
    total += 15;
  }

  let has_upper = nickname.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = nickname.chars().any(|c| c.is_ascii_lowercase());

  if has_upper && has_lower {
    total += 10;
  }

  total
}

pub fn rate(nickname: &str, style: &str, language: Language) -> Rating {
  let level = Level::from_score(score(nickname, style));

  Rating {
    level,
    label: level.label(language),
  }
}
