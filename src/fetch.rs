// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Retrieve every alert matching a SearchQuery: count first, then page through the listing
// role: processing/fetch
// inputs: AlertApi, Pacer, SearchQuery, output writer for progress text
// outputs: Vec<Alert> in ascending createdAt order
// side_effects: Progress lines on the writer; a fixed pause between page requests
// invariants:
// - list offsets are 0, page, 2*page, ... while offset < count
// - exactly one pause between consecutive list calls; none before the first or after the last
// - any API failure returns Err; already fetched pages are dropped
// errors: FetchError::Count / FetchError::List { offset } wrap the GenieError
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::time::Duration;

use chrono::SecondsFormat;
use thiserror::Error;

use crate::genie::{AlertApi, GenieError, ListRequest};
use crate::model::{Alert, SearchQuery};

pub const PAGE_SIZE: u64 = 100;
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum FetchError {
  #[error("counting alerts failed")]
  Count {
    #[source]
    source: GenieError,
  },

  #[error("listing alerts at offset {offset} failed")]
  List {
    offset: u64,
    #[source]
    source: GenieError,
  },

  #[error("writing progress output")]
  Output(#[from] std::io::Error),
}

/// Blocks between page requests.
pub trait Pacer {
  fn pause(&self, delay: Duration);
}

/// Sleeps the calling thread.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
  fn pause(&self, delay: Duration) {
    std::thread::sleep(delay);
  }
}

pub struct AlertFetcher<'a> {
  api: &'a dyn AlertApi,
  pacer: &'a dyn Pacer,
  page_size: u64,
  delay: Duration,
}

impl<'a> AlertFetcher<'a> {
  pub fn new(api: &'a dyn AlertApi, pacer: &'a dyn Pacer) -> Self {
    Self {
      api,
      pacer,
      page_size: PAGE_SIZE,
      delay: PAGE_DELAY,
    }
  }

  pub fn with_delay(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }

  pub fn fetch(&self, query: &SearchQuery, out: &mut dyn Write) -> Result<Vec<Alert>, FetchError> {
    let filter = query.to_query_string();
    log::debug!("alert filter: {}", filter);

    // Phase 1: total count
    let total = self
      .api
      .count(&filter)
      .map_err(|source| FetchError::Count { source })?;

    writeln!(
      out,
      "Found {} alerts between {} and {}",
      total,
      query.start.to_rfc3339_opts(SecondsFormat::Secs, true),
      query.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;

    // Phase 2: page through the listing
    // The count is remote input; grow with the pages actually received.
    let mut alerts: Vec<Alert> = Vec::new();
    let mut offset: u64 = 0;

    while offset < total {
      if offset > 0 {
        log::debug!("pausing {:?} before offset {}", self.delay, offset);
        self.pacer.pause(self.delay);
      }

      let req = ListRequest::ascending(&filter, offset, self.page_size);
      let page = self
        .api
        .list(&req)
        .map_err(|source| FetchError::List { offset, source })?;

      log::debug!("offset {} returned {} alerts", offset, page.len());
      alerts.extend(page);
      offset = offset.saturating_add(self.page_size);

      writeln!(out, "Fetched {}/{} alerts", alerts.len(), total)?;
    }

    Ok(alerts)
  }
}
