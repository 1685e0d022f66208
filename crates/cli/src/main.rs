// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod session;

use cake_collate::Model;
use cake_collate_domain::today_in_timezone;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use session::{SessionSummary, TodaySource, run_session};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use time::Date;
use time::macros::format_description;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// CakeCollate - track cake orders from a JSON-lines session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session file with one JSON request per line. Reads stdin when absent.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Fixed date (YYYY-MM-DD) to validate every request against
    #[arg(long, value_parser = parse_today)]
    today: Option<Date>,

    /// IANA timezone used to derive today's date when --today is absent
    #[arg(long, default_value = "UTC")]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn today_source(&self) -> Result<TodaySource> {
        if let Some(date) = self.today {
            return Ok(TodaySource::Fixed(date));
        }
        today_in_timezone(&self.timezone)
            .wrap_err_with(|| format!("invalid --timezone '{}'", self.timezone))?;
        Ok(TodaySource::Timezone(self.timezone.clone()))
    }
}

fn parse_today(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .init();

    let today: TodaySource = args.today_source()?;
    info!(?today, "Starting CakeCollate session");

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file: std::fs::File = std::fs::File::open(path)
                .wrap_err_with(|| format!("failed to open session file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let mut model: Model = Model::new();
    let mut stdout: std::io::StdoutLock<'static> = std::io::stdout().lock();
    let summary: SessionSummary = run_session(&mut model, input, &mut stdout, &today)?;

    if summary.rejected > 0 {
        info!(rejected = summary.rejected, "Some requests were rejected");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_today_accepts_iso_date() {
        assert_eq!(parse_today("2021-12-20"), Ok(date!(2021 - 12 - 20)));
        assert!(parse_today("20/12/2021").is_err());
    }

    #[test]
    fn test_fixed_today_wins_over_timezone() {
        let args: Args = Args::parse_from([
            "cake-collate",
            "--today",
            "2021-12-20",
            "--timezone",
            "Nowhere/Land",
        ]);

        assert_eq!(
            args.today_source().unwrap(),
            TodaySource::Fixed(date!(2021 - 12 - 20))
        );
    }

    #[test]
    fn test_unknown_timezone_is_rejected_up_front() {
        let args: Args = Args::parse_from(["cake-collate", "--timezone", "Nowhere/Land"]);

        assert!(args.today_source().is_err());
    }

    #[test]
    fn test_args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
