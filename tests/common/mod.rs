use std::cell::{Cell, RefCell};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use genie_report::fetch::Pacer;
use genie_report::genie::{AlertApi, GenieError, ListRequest};
use genie_report::model::Alert;

/// Serves alerts from memory; optionally fails the list call at one offset.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemoryApi {
  pub alerts: Vec<Alert>,
  pub fail_at_offset: Option<u64>,
  pub offsets: RefCell<Vec<u64>>,
  pub queries: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MemoryApi {
  pub fn new(alerts: Vec<Alert>) -> Self {
    Self {
      alerts,
      ..Default::default()
    }
  }
}

impl AlertApi for MemoryApi {
  fn count(&self, query: &str) -> Result<u64, GenieError> {
    self.queries.borrow_mut().push(query.to_string());
    Ok(self.alerts.len() as u64)
  }

  fn list(&self, req: &ListRequest) -> Result<Vec<Alert>, GenieError> {
    self.queries.borrow_mut().push(req.query.clone());
    self.offsets.borrow_mut().push(req.offset);

    if self.fail_at_offset == Some(req.offset) {
      return Err(GenieError::Status {
        code: 429,
        body: "rate limited".into(),
      });
    }
    let start = (req.offset as usize).min(self.alerts.len());
    let end = (start + req.limit as usize).min(self.alerts.len());
    Ok(self.alerts[start..end].to_vec())
  }
}

/// Counts pauses instead of sleeping.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingPacer {
  pub pauses: Cell<usize>,
}

impl Pacer for CountingPacer {
  fn pause(&self, _delay: Duration) {
    self.pauses.set(self.pauses.get() + 1);
  }
}

#[allow(dead_code)]
pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
}
