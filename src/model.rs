// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the alert model returned by Opsgenie and the search query used to select alerts
// role: model/types
// outputs: Alert/AlertTimes (serde, camelCase wire names), StatusFilter, SearchQuery
// invariants:
// - Alert times are unsigned milliseconds; missing report fields decode to 0 / ""
// - SearchQuery window is exclusive on both ends: createdAt>start and createdAt<end
// - StatusFilter::All never emits a status clause
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The `report` block Opsgenie attaches to each alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTimes {
  /// Milliseconds from creation to first acknowledgment.
  #[serde(default)]
  pub ack_time: u64,
  /// Milliseconds from creation to close.
  #[serde(default)]
  pub close_time: u64,
  #[serde(default)]
  pub acknowledged_by: String,
  #[serde(default)]
  pub closed_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
  pub created_at: DateTime<Utc>,
  #[serde(default)]
  pub report: AlertTimes,
}

impl Alert {
  pub fn new(created_at: DateTime<Utc>, ack_time: u64, close_time: u64, acknowledged_by: &str) -> Self {
    Self {
      created_at,
      report: AlertTimes {
        ack_time,
        close_time,
        acknowledged_by: acknowledged_by.to_string(),
        closed_by: String::new(),
      },
    }
  }

  /// Short responder name: the part of `acknowledgedBy` before the first `@`.
  /// Returns None when nobody acknowledged the alert.
  pub fn responder(&self) -> Option<&str> {
    let name = self
      .report
      .acknowledged_by
      .split('@')
      .next()
      .unwrap_or_default();

    if name.is_empty() {
      None
    } else {
      Some(name)
    }
  }
}

/// Status clause for the alert search. `all` disables the clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
  All,
  Only(String),
}

impl StatusFilter {
  pub fn clause(&self) -> Option<String> {
    match self {
      StatusFilter::All => None,
      StatusFilter::Only(status) => Some(format!("status: {}", status)),
    }
  }
}

impl FromStr for StatusFilter {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();

    if s.is_empty() || s.eq_ignore_ascii_case("all") {
      Ok(StatusFilter::All)
    } else {
      Ok(StatusFilter::Only(s.to_lowercase()))
    }
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StatusFilter::All => f.write_str("all"),
      StatusFilter::Only(status) => f.write_str(status),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
  pub start: DateTime<Utc>,
  pub end: DateTime<Utc>,
  pub status: StatusFilter,
}

impl SearchQuery {
  /// Window of `days` days ending `offset_days` days before `now`.
  pub fn for_days(now: DateTime<Utc>, days: u32, offset_days: u32, status: StatusFilter) -> Self {
    let end = now - Duration::days(i64::from(offset_days));
    let start = end - Duration::days(i64::from(days));

    Self { start, end, status }
  }

  /// Opsgenie search syntax, e.g. `status: closed and createdAt>1 and createdAt<2`.
  pub fn to_query_string(&self) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(3);

    if let Some(status) = self.status.clause() {
      clauses.push(status);
    }
    clauses.push(format!("createdAt>{}", self.start.timestamp_millis()));
    clauses.push(format!("createdAt<{}", self.end.timestamp_millis()));

    clauses.join(" and ")
  }
}
