const GITHUB_SHA: Option<&'static str> = option_env!("GITHUB_SHA");
const MONIKER_VERSION: Option<&'static str> = option_env!("MONIKER_VERSION");

pub fn version() -> String {
  MONIKER_VERSION.or(GITHUB_SHA).unwrap_or("dev").to_string()
}
