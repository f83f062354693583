use std::io::Result;

use crate::configuration::Language;
use crate::{errors, Configuration, RequestHead};

// Request-scoped view of the service configuration plus whatever the request
// head promised is left on the wire.
pub struct Context {
  _config: Configuration,
  _pending: usize,
}

impl Context {
  pub fn builder() -> ContextBuilder {
    ContextBuilder::default()
  }

  pub fn config(&self) -> &Configuration {
    &self._config
  }

  pub fn cors(&self) -> String {
    self._config.cors_origin.clone()
  }

  pub fn language(&self) -> Language {
    self._config.language
  }

  pub fn pending(&self) -> usize {
    self._pending
  }
}

impl std::fmt::Debug for Context {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "Context<pending:{}>", self._pending)
  }
}

#[derive(Default)]
pub struct ContextBuilder {
  _config: Option<Configuration>,
}

impl ContextBuilder {
  pub fn configuration(self, config: &Configuration) -> Self {
    ContextBuilder {
      _config: Some(config.clone()),
    }
  }

  pub fn for_request(self, head: &RequestHead) -> Result<Context> {
    let _config = self
      ._config
      .ok_or(errors::e("missing configuration from context"))?;

    Ok(Context {
      _config,
      _pending: head.content_length(),
    })
  }
}
