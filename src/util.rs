// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for "now" handling, logging setup, and man page rendering
// role: utilities/helpers
// inputs: Optional RFC3339 override strings; clap CommandFactory; verbosity flag
// outputs: UTC instants, man page text
// side_effects: init_logging installs the global env_logger
// invariants:
// - effective_now returns the override when present, else the wall clock
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use clap::CommandFactory;

/// Parse a `--now-override` string. Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z)
/// or a naive timestamp `%Y-%m-%dT%H:%M:%S` taken as UTC.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .map(|ndt| ndt.and_utc())
      })
  })
}

/// Returns the effective "now" given an optional override.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Install env_logger; `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
