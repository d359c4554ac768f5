use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

use etsigs::commands;
use etsigs::core::config::{AccessCode, FetchConfig, Sensor, DEFAULT_BASE_URL, DEFAULT_VERSION};
use etsigs::utils::output::Reporter;

/// Retrieves and unpacks the latest ET rules.
///
/// Fetches ETOPEN by default, or ETPRO when an oinkcode is given.
#[derive(Parser, Debug)]
#[clap(name = "etsigs")]
#[clap(disable_version_flag = true)]
pub struct Cli {
    /// Directory to download to
    #[clap(
        short,
        long,
        default_value = ".",
        value_name = "/path/to/download/directory"
    )]
    output: PathBuf,

    /// Your ETPRO oinkcode
    #[clap(short = 'k', long, default_value = "", value_name = "OINKCODE")]
    oinkcode: String,

    /// Use the Snort versions of the ruleset (as opposed to the Suricata versions)
    #[clap(long)]
    snort: bool,

    /// The version of the ruleset you want to download
    #[clap(long, default_value = DEFAULT_VERSION, value_name = DEFAULT_VERSION)]
    version: String,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,

    /// Disable coloured status output
    #[clap(long)]
    no_color: bool,
}

impl Cli {
    fn into_config(self) -> FetchConfig {
        FetchConfig {
            destination: self.output,
            version: self.version,
            sensor: Sensor::from_snort_flag(self.snort),
            access_code: AccessCode::parse(&self.oinkcode),
            base_url: DEFAULT_BASE_URL.to_string(),
            color: !self.no_color && std::io::stderr().is_terminal(),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(config: &FetchConfig, reporter: &mut Reporter<std::io::Stderr>) -> Result<()> {
    let summary = commands::fetch::fetch_rules(config, reporter)
        .with_context(|| format!("Could not fetch \"{}\" rules", config.edition()))?;

    log::debug!(
        "Unpacked {} entries ({} bytes) from {} into {}",
        summary.extraction.entries,
        summary.bytes,
        summary.url,
        summary.extraction.destination.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    let mut reporter = Reporter::stderr(config.color);

    if let Err(e) = run(&config, &mut reporter) {
        reporter.failure(format_args!("{e:#}"));
        std::process::exit(1);
    }
}
