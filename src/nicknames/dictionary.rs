use rand::Rng;

const CASUAL_PREFIXES: &'static str = include_str!("./data/casual-prefixes.txt");
const CASUAL_SUFFIXES: &'static str = include_str!("./data/casual-suffixes.txt");
const CASUAL_WORDS: &'static str = include_str!("./data/casual-words.txt");

const EPIC_PREFIXES: &'static str = include_str!("./data/epic-prefixes.txt");
const EPIC_SUFFIXES: &'static str = include_str!("./data/epic-suffixes.txt");
const EPIC_WORDS: &'static str = include_str!("./data/epic-words.txt");

const TECH_PREFIXES: &'static str = include_str!("./data/tech-prefixes.txt");
const TECH_SUFFIXES: &'static str = include_str!("./data/tech-suffixes.txt");
const TECH_WORDS: &'static str = include_str!("./data/tech-words.txt");

const FANTASY_PREFIXES: &'static str = include_str!("./data/fantasy-prefixes.txt");
const FANTASY_SUFFIXES: &'static str = include_str!("./data/fantasy-suffixes.txt");
const FANTASY_WORDS: &'static str = include_str!("./data/fantasy-words.txt");

// Word lists backing a single style. Each member is a newline separated file
// compiled into the binary.
#[derive(Debug)]
pub struct Dictionary {
  prefixes: &'static str,
  suffixes: &'static str,
  words: &'static str,
}

pub const CASUAL: Dictionary = Dictionary {
  prefixes: CASUAL_PREFIXES,
  suffixes: CASUAL_SUFFIXES,
  words: CASUAL_WORDS,
};

pub const EPIC: Dictionary = Dictionary {
  prefixes: EPIC_PREFIXES,
  suffixes: EPIC_SUFFIXES,
  words: EPIC_WORDS,
};

pub const TECH: Dictionary = Dictionary {
  prefixes: TECH_PREFIXES,
  suffixes: TECH_SUFFIXES,
  words: TECH_WORDS,
};

pub const FANTASY: Dictionary = Dictionary {
  prefixes: FANTASY_PREFIXES,
  suffixes: FANTASY_SUFFIXES,
  words: FANTASY_WORDS,
};

fn rand_line<R: Rng>(source: &'static str, rng: &mut R) -> &'static str {
  let entries = source
    .lines()
    .filter(|line| !line.is_empty())
    .collect::<Vec<&'static str>>();

  match entries.len() {
    0 => "",
    count => entries[rng.gen_range(0..count)],
  }
}

impl Dictionary {
  pub fn prefix<R: Rng>(&self, rng: &mut R) -> &'static str {
    rand_line(self.prefixes, rng)
  }

  pub fn suffix<R: Rng>(&self, rng: &mut R) -> &'static str {
    rand_line(self.suffixes, rng)
  }

  pub fn word<R: Rng>(&self, rng: &mut R) -> &'static str {
    rand_line(self.words, rng)
  }
}
