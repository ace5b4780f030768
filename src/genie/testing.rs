// In-memory AlertApi + Pacer used by unit tests. Records every call in order so
// tests can check how list calls and pacing pauses interleave.

use std::cell::RefCell;
use std::time::Duration;

use super::{AlertApi, GenieError, ListRequest};
use crate::fetch::Pacer;
use crate::model::Alert;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
  Count(String),
  List { offset: u64, limit: u64 },
  Pause(Duration),
}

#[derive(Default)]
pub(crate) struct FakeAlertApi {
  pub alerts: Vec<Alert>,
  pub total_override: Option<u64>,
  pub fail_count: bool,
  pub fail_at_offset: Option<u64>,
  pub calls: RefCell<Vec<Call>>,
}

impl FakeAlertApi {
  pub fn with_alerts(alerts: Vec<Alert>) -> Self {
    Self {
      alerts,
      ..Default::default()
    }
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }
}

impl AlertApi for FakeAlertApi {
  fn count(&self, query: &str) -> Result<u64, GenieError> {
    self.calls.borrow_mut().push(Call::Count(query.to_string()));

    if self.fail_count {
      return Err(GenieError::Status {
        code: 401,
        body: "unauthorized".into(),
      });
    }
    Ok(self.total_override.unwrap_or(self.alerts.len() as u64))
  }

  fn list(&self, req: &ListRequest) -> Result<Vec<Alert>, GenieError> {
    self.calls.borrow_mut().push(Call::List {
      offset: req.offset,
      limit: req.limit,
    });

    if self.fail_at_offset == Some(req.offset) {
      return Err(GenieError::Status {
        code: 500,
        body: "boom".into(),
      });
    }
    let start = (req.offset as usize).min(self.alerts.len());
    let end = (start + req.limit as usize).min(self.alerts.len());

    Ok(self.alerts[start..end].to_vec())
  }
}

impl Pacer for FakeAlertApi {
  fn pause(&self, delay: Duration) {
    self.calls.borrow_mut().push(Call::Pause(delay));
  }
}
