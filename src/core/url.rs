//! Ruleset URL composition.
//!
//! Layout: `{base}/{oinkcode|open}/{sensor}-{version}/{emerging|etpro}.rules.tar.gz`.

use crate::core::config::{AccessCode, Edition, FetchConfig, Sensor};

const OPEN_CODE_SLOT: &str = "open";
const REDACTED_CODE_SLOT: &str = "<oinkcode>";

pub fn ruleset_url(
    base_url: &str,
    access_code: Option<&AccessCode>,
    sensor: Sensor,
    version: &str,
) -> String {
    let code = access_code.map_or(OPEN_CODE_SLOT, AccessCode::as_str);
    format_url(base_url, code, access_code, sensor, version)
}

/// Same URL with the oinkcode masked, for logs and error messages.
pub fn redacted_ruleset_url(
    base_url: &str,
    access_code: Option<&AccessCode>,
    sensor: Sensor,
    version: &str,
) -> String {
    let code = if access_code.is_some() {
        REDACTED_CODE_SLOT
    } else {
        OPEN_CODE_SLOT
    };
    format_url(base_url, code, access_code, sensor, version)
}

fn format_url(
    base_url: &str,
    code: &str,
    access_code: Option<&AccessCode>,
    sensor: Sensor,
    version: &str,
) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let ruleset = Edition::from_access_code(access_code).ruleset_tag();
    format!(
        "{base}/{code}/{sensor}-{version}/{ruleset}.rules.tar.gz",
        sensor = sensor.tag()
    )
}

impl FetchConfig {
    pub fn url(&self) -> String {
        ruleset_url(
            &self.base_url,
            self.access_code.as_ref(),
            self.sensor,
            &self.version,
        )
    }

    pub fn redacted_url(&self) -> String {
        redacted_ruleset_url(
            &self.base_url,
            self.access_code.as_ref(),
            self.sensor,
            &self.version,
        )
    }
}
