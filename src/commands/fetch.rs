use crate::core::config::{Edition, FetchConfig};
use crate::core::download::{HttpClient, RulesClient};
use crate::core::extract::{self, ExtractionReport};
use crate::error::Result;
use crate::utils::fs;
use crate::utils::output::Reporter;
use std::io::Write;

#[derive(Debug)]
pub struct FetchSummary {
    pub edition: Edition,
    /// Requested URL with any oinkcode masked.
    pub url: String,
    pub bytes: usize,
    pub extraction: ExtractionReport,
}

/// Downloads the configured ruleset over HTTPS and unpacks it.
pub fn fetch_rules<W: Write>(
    config: &FetchConfig,
    reporter: &mut Reporter<W>,
) -> Result<FetchSummary> {
    fetch_with(config, &HttpClient::new(), reporter)
}

/// Build URL, GET, validate, decompress, unpack. Any error ends the run
/// where it happened; nothing is retried.
pub fn fetch_with<C, W>(
    config: &FetchConfig,
    client: &C,
    reporter: &mut Reporter<W>,
) -> Result<FetchSummary>
where
    C: RulesClient + ?Sized,
    W: Write,
{
    let edition = config.edition();
    reporter.info(format_args!("Getting \"{edition}\" rules..."));

    let url = config.url();
    let display_url = config.redacted_url();
    log::debug!("Requesting {display_url}");

    let body = client.get(&url, &display_url)?;
    reporter.success(format_args!("Got \"{edition}\" rules!"));

    let destination = fs::resolve_destination(&config.destination)?;
    log::debug!("Resolved destination {}", destination.display());

    let target = match extract::peek_first_entry(&body) {
        Some(name) => destination.join(name),
        None => {
            log::debug!("Could not read archive member list before extraction");
            destination.clone()
        }
    };
    reporter.info(format_args!(
        "Extracting rules to \"{}\"...",
        target.display()
    ));

    let extraction = extract::extract_tar_gz(&body, &destination)?;
    reporter.success("Rules successfully extracted!");

    Ok(FetchSummary {
        edition,
        url: display_url,
        bytes: body.len(),
        extraction,
    })
}
