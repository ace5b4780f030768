// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Single report-generation entry point: fetch -> (optional) business-hours split -> aggregate/render
// role: processing/orchestrator
// inputs: AlertApi, Pacer, SearchQuery, ReportOptions, output writer
// outputs: Plain-text report on the writer
// side_effects: Network calls through AlertApi; pacing pauses; writes to the writer
// invariants:
// - zone is resolved when ReportOptions is built, before any fetch
// - split runs render business hours first, then after hours
// errors: Fetch failures propagate with stage context; nothing is rendered after a failure
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use anyhow::{Context, Result};

use crate::fetch::{AlertFetcher, Pacer};
use crate::genie::AlertApi;
use crate::hours::{resolve_zone, BusinessHours};
use crate::model::SearchQuery;
use crate::report;

#[derive(Debug, Clone)]
pub struct ReportOptions {
  pub after_hours: bool,
  pub hours: BusinessHours,
  pub blame: bool,
}

impl ReportOptions {
  pub fn new(after_hours: bool, zone_name: &str, blame: bool) -> Result<Self> {
    let zone = resolve_zone(zone_name)?;

    Ok(Self {
      after_hours,
      hours: BusinessHours::new(zone),
      blame,
    })
  }
}

pub fn generate_report(
  api: &dyn AlertApi,
  pacer: &dyn Pacer,
  query: &SearchQuery,
  opts: &ReportOptions,
  out: &mut dyn Write,
) -> Result<()> {
  let alerts = AlertFetcher::new(api, pacer)
    .fetch(query, out)
    .context("fetching alerts from Opsgenie")?;

  writeln!(out)?;

  if !opts.after_hours {
    report::write_report(&alerts, opts.blame, out)?;
    return Ok(());
  }

  let split = opts.hours.partition(alerts);
  log::debug!(
    "split: {} business-hours, {} after-hours alerts",
    split.business.len(),
    split.after.len()
  );

  writeln!(out, "== Business hours ({}) ==", opts.hours.label())?;
  report::write_report(&split.business, opts.blame, out)?;
  writeln!(out)?;
  writeln!(out, "== After hours ==")?;
  report::write_report(&split.after, opts.blame, out)?;

  Ok(())
}
