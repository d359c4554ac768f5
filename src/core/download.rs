use crate::error::{FetchError, Result};
use std::io::Read;

const USER_AGENT: &str = concat!("etsigs/", env!("CARGO_PKG_VERSION"));

/// One blocking GET returning the whole response body.
///
/// `display_url` is what errors and logs may show; it differs from `url`
/// when the path carries an oinkcode.
pub trait RulesClient {
    fn get(&self, url: &str, display_url: &str) -> Result<Vec<u8>>;
}

/// `ureq`-backed client. No timeout and no retries: a stalled server blocks the run.
pub struct HttpClient {
    agent: ureq::Agent,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl RulesClient for HttpClient {
    fn get(&self, url: &str, display_url: &str) -> Result<Vec<u8>> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| map_ureq_error(display_url, e))?;

        // read_to_vec() caps bodies at 10MB; ETPRO bundles can exceed that.
        let mut body = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Transport {
                url: display_url.to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("Received {} bytes from {display_url}", body.len());
        Ok(body)
    }
}

fn map_ureq_error(url: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(status) => FetchError::Rejected {
            url: url.to_string(),
            status,
        },
        other => FetchError::Transport {
            url: url.to_string(),
            reason: other.to_string(),
        },
    }
}
