use anyhow::{Context, Result};
use clap::Parser;

use genie_report::cli::{normalize, Cli};
use genie_report::fetch::ThreadPacer;
use genie_report::genie::http::GenieHttpApi;
use genie_report::genie::{GenieConfig, GENIE_KEY_ENV};
use genie_report::{runner, util};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging(cli.verbose);

  // Phase 1: normalize CLI (zone + window)
  let cfg = normalize(cli)?;

  // Phase 2: credentials and client
  let api_key = std::env::var(GENIE_KEY_ENV).unwrap_or_default();
  let genie = GenieConfig::new(api_key, cfg.api_url.clone()).context("configuring Opsgenie client")?;
  log::debug!("using {:?}", genie);
  let api = GenieHttpApi::new(genie);

  // Phase 3: fetch, split, report
  println!("Preparing Opsgenie report for {} days...", cfg.days);
  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  runner::generate_report(&api, &ThreadPacer, &cfg.query, &cfg.options, &mut out)
}
