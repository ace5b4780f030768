use anyhow::{anyhow, bail, Result};
use clap::Parser;

use crate::genie::DEFAULT_API_URL;
use crate::model::{SearchQuery, StatusFilter};
use crate::runner::ReportOptions;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "genie-report",
    version,
    about = "MTTA/MTTR incident-response report from Opsgenie alert history",
    long_about = None
)]
pub struct Cli {
  /// Amount of days the report should cover
  #[arg(long, default_value_t = 7)]
  pub days: u32,

  /// Shift the window back by this many days (0 = window ends now)
  #[arg(long, default_value_t = 0)]
  pub offset: u32,

  /// Alert status to report on, e.g. closed or open ("all" = no filter)
  #[arg(long, default_value = "all")]
  pub status: String,

  /// Report business hours (09:00-18:00 in --tz) and after hours separately
  #[arg(long)]
  pub after_hours: bool,

  /// IANA time zone used for the business-hours split
  #[arg(long, default_value = "UTC")]
  pub tz: String,

  /// Break MTTA down per acknowledging responder
  #[arg(long)]
  pub blame: bool,

  /// Opsgenie API base URL
  #[arg(long, env = "GENIE_API_URL", default_value = DEFAULT_API_URL)]
  pub api_url: String,

  /// Debug logging to stderr (RUST_LOG overrides)
  #[arg(short, long)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant the window is anchored to (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub days: u32,
  pub query: SearchQuery,
  pub options: ReportOptions,
  pub api_url: String,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  if cli.days == 0 {
    bail!("--days must be at least 1");
  }

  // Zone errors are configuration errors: surface them before credentials or network.
  let options = ReportOptions::new(cli.after_hours, &cli.tz, cli.blame)?;

  let now_override = match cli.now_override.as_deref() {
    Some(raw) => Some(util::parse_now_override(Some(raw)).ok_or_else(|| {
      anyhow!("invalid --now-override '{}': expected RFC3339 or %Y-%m-%dT%H:%M:%S", raw)
    })?),
    None => None,
  };
  let now = util::effective_now(now_override);
  let status: StatusFilter = cli.status.parse()?;
  let query = SearchQuery::for_days(now, cli.days, cli.offset, status);

  Ok(EffectiveConfig {
    days: cli.days,
    query,
    options,
    api_url: cli.api_url,
  })
}
