// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve IANA zone names and split alerts into business-hours vs after-hours cohorts
// role: processing/partition
// inputs: Vec<Alert>, chrono_tz::Tz, start/end hours
// outputs: Partition { business, after }
// invariants:
// - hour-of-day in [start, end) local time => business; otherwise after
// - every input alert lands in exactly one cohort; input order preserved within each
// errors: resolve_zone fails on unknown zone names
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{anyhow, Result};
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::model::Alert;

pub const BUSINESS_START_HOUR: u32 = 9;
pub const BUSINESS_END_HOUR: u32 = 18;

/// Parse an IANA zone name such as `Europe/Amsterdam` or `UTC`.
pub fn resolve_zone(name: &str) -> Result<Tz> {
  name
    .trim()
    .parse::<Tz>()
    .map_err(|e| anyhow!("unknown time zone '{}': {}", name, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
  pub zone: Tz,
  pub start_hour: u32,
  pub end_hour: u32,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition {
  pub business: Vec<Alert>,
  pub after: Vec<Alert>,
}

impl BusinessHours {
  pub fn new(zone: Tz) -> Self {
    Self {
      zone,
      start_hour: BUSINESS_START_HOUR,
      end_hour: BUSINESS_END_HOUR,
    }
  }

  pub fn contains(&self, at: DateTime<Utc>) -> bool {
    let hour = at.with_timezone(&self.zone).hour();
    (self.start_hour..self.end_hour).contains(&hour)
  }

  pub fn partition(&self, alerts: Vec<Alert>) -> Partition {
    let (business, after): (Vec<Alert>, Vec<Alert>) = alerts.into_iter().partition(|a| self.contains(a.created_at));
    Partition { business, after }
  }

  pub fn label(&self) -> String {
    format!("{:02}:00-{:02}:00 {}", self.start_hour, self.end_hour, self.zone.name())
  }
}
