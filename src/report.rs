// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Compute MTTA/MTTR (and per-responder MTTA in blame mode) for one alert cohort and render it as text
// role: report/aggregate+render
// inputs: &[Alert], blame flag
// outputs: Option<ReportSummary>; plain-text report on a writer
// invariants:
// - empty cohort => None and a "No alerts found" line; no division happens
// - averages are integer-truncated
// - alerts without an acknowledger count toward overall sums but no responder
// - responders render in name order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::duration_fmt::human_readable;
use crate::model::Alert;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponderStats {
  pub total_ack: u128,
  pub count: u64,
}

impl ResponderStats {
  pub fn mean_ack(&self) -> u64 {
    if self.count == 0 {
      0
    } else {
      // A mean of u64 samples always fits back into u64.
      (self.total_ack / u128::from(self.count)) as u64
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
  pub count: u64,
  pub mean_ack: u64,
  pub mean_close: u64,
  /// Populated only in blame mode.
  pub responders: BTreeMap<String, ResponderStats>,
}

pub fn summarize(alerts: &[Alert], blame: bool) -> Option<ReportSummary> {
  if alerts.is_empty() {
    return None;
  }

  let mut total_ack: u128 = 0;
  let mut total_close: u128 = 0;
  let mut responders: BTreeMap<String, ResponderStats> = BTreeMap::new();

  for alert in alerts {
    total_ack += u128::from(alert.report.ack_time);
    total_close += u128::from(alert.report.close_time);

    if !blame {
      continue;
    }
    if let Some(name) = alert.responder() {
      let entry = responders.entry(name.to_string()).or_default();
      entry.total_ack += u128::from(alert.report.ack_time);
      entry.count += 1;
    }
  }

  let count = alerts.len() as u64;

  Some(ReportSummary {
    count,
    mean_ack: (total_ack / u128::from(count)) as u64,
    mean_close: (total_close / u128::from(count)) as u64,
    responders,
  })
}

pub fn render(summary: Option<&ReportSummary>, blame: bool, out: &mut dyn Write) -> io::Result<()> {
  let Some(s) = summary else {
    return writeln!(out, "No alerts found");
  };

  writeln!(out, "MTTA for {} alerts:", s.count)?;
  writeln!(out, "{}", human_readable(s.mean_ack))?;
  writeln!(out, "MTTR for {} alerts:", s.count)?;
  writeln!(out, "{}", human_readable(s.mean_close))?;

  if blame {
    writeln!(out)?;
    writeln!(out, "MTTA per responder:")?;

    for (name, r) in &s.responders {
      writeln!(out, " - {}: {} for {} alerts", name, human_readable(r.mean_ack()), r.count)?;
    }
  }

  Ok(())
}

/// Summarize and render one cohort.
pub fn write_report(alerts: &[Alert], blame: bool, out: &mut dyn Write) -> io::Result<()> {
  let summary = summarize(alerts, blame);
  render(summary.as_ref(), blame, out)
}
