// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Narrow seam over the Opsgenie Alert API (count + paged list) and its explicit configuration
// role: integration/opsgenie
// inputs: GenieConfig (api key + base url) supplied by the caller
// outputs: AlertApi trait, ListRequest, GenieError
// side_effects: None here; network calls live in `http`
// invariants:
// - Library code never reads the environment; credentials arrive via GenieConfig
// - ListRequest always sorts by createdAt; order is explicit
// errors: GenieError distinguishes transport, HTTP status, decode and configuration failures
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod http;
#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

use crate::model::Alert;

pub const GENIE_KEY_ENV: &str = "GENIEKEY";
pub const DEFAULT_API_URL: &str = "https://api.eu.opsgenie.com";

#[derive(Debug, Error)]
pub enum GenieError {
  #[error("missing Opsgenie API key (set GENIEKEY)")]
  MissingKey,

  #[error("request to {url} failed: {message}")]
  Transport { url: String, message: String },

  #[error("Opsgenie returned HTTP {code}: {body}")]
  Status { code: u16, body: String },

  #[error("decoding response from {url}")]
  Decode {
    url: String,
    #[source]
    source: std::io::Error,
  },
}

/// Credentials and endpoint for the Opsgenie API.
#[derive(Clone)]
pub struct GenieConfig {
  api_key: String,
  api_url: String,
}

impl GenieConfig {
  pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self, GenieError> {
    let api_key = api_key.into().trim().to_string();

    if api_key.is_empty() {
      return Err(GenieError::MissingKey);
    }

    Ok(Self {
      api_key,
      api_url: api_url.into().trim_end_matches('/').to_string(),
    })
  }

  pub fn api_key(&self) -> &str {
    &self.api_key
  }

  pub fn api_url(&self) -> &str {
    &self.api_url
  }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for GenieConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GenieConfig")
      .field("api_key", &"<redacted>")
      .field("api_url", &self.api_url)
      .finish()
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
  Asc,
  Desc,
}

impl SortOrder {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortOrder::Asc => "asc",
      SortOrder::Desc => "desc",
    }
  }
}

/// One page of the alert listing, always sorted by `createdAt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
  pub query: String,
  pub order: SortOrder,
  pub offset: u64,
  pub limit: u64,
}

impl ListRequest {
  pub const SORT_FIELD: &'static str = "createdAt";

  pub fn ascending(query: &str, offset: u64, limit: u64) -> Self {
    Self {
      query: query.to_string(),
      order: SortOrder::Asc,
      offset,
      limit,
    }
  }
}

// --- Trait seam for the Opsgenie API ---
pub trait AlertApi {
  /// Total number of alerts matching `query`.
  fn count(&self, query: &str) -> Result<u64, GenieError>;
  fn list(&self, req: &ListRequest) -> Result<Vec<Alert>, GenieError>;
}
