mod app;
mod config;
mod error;
mod events;
mod logger;
mod router;
mod session;
mod state;
mod ui;

use anyhow::Result;
use app::{App, StartOptions};
use clap::{App as Cli, Arg};
use config::Config;
use log::LevelFilter;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml and session.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fresh")
                .long("fresh")
                .help("Start at Home instead of the last shown destination"),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("Most verbose level shown in the log pane")
                .possible_values(&LOG_LEVELS)
                .default_value("info"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let log_level = matches
        .value_of("log-level")
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    App::start(
        config,
        StartOptions {
            fresh: matches.is_present("fresh"),
            log_level,
        },
    )
}
