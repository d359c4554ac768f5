use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://rules.emergingthreats.net";
pub const DEFAULT_VERSION: &str = "5.0.0";

/// Which IDS engine the ruleset is packaged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sensor {
    #[default]
    Suricata,
    Snort,
}

impl Sensor {
    pub fn from_snort_flag(snort: bool) -> Self {
        if snort {
            Sensor::Snort
        } else {
            Sensor::Suricata
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Sensor::Suricata => "suricata",
            Sensor::Snort => "snort",
        }
    }
}

/// ETPRO oinkcode. Never printed; `Debug` is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(AccessCode(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCode(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Open,
    Pro,
}

impl Edition {
    pub fn from_access_code(code: Option<&AccessCode>) -> Self {
        match code {
            Some(_) => Edition::Pro,
            None => Edition::Open,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Edition::Open => "ETOPEN",
            Edition::Pro => "ETPRO",
        }
    }

    pub fn ruleset_tag(self) -> &'static str {
        match self {
            Edition::Open => "emerging",
            Edition::Pro => "etpro",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub destination: PathBuf,
    pub version: String,
    pub sensor: Sensor,
    pub access_code: Option<AccessCode>,
    pub base_url: String,
    pub color: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            destination: PathBuf::from("."),
            version: DEFAULT_VERSION.to_string(),
            sensor: Sensor::default(),
            access_code: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            color: true,
        }
    }
}

impl FetchConfig {
    pub fn edition(&self) -> Edition {
        Edition::from_access_code(self.access_code.as_ref())
    }

    pub fn with_access_code(mut self, raw: &str) -> Self {
        self.access_code = AccessCode::parse(raw);
        self
    }
}
