#![deny(unsafe_code)]

use std::collections::BTreeSet;

/// Date format applied to every `date` field when the configuration
/// does not override it. One format per run; there is no per-field
/// format.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reference list of accepted country codes.
///
/// Fixed in this version; not user-configurable.
const COUNTRY_CODES: &[&str] = &[
    "AR", "BR", "CL", "CO", "CR", "CU", "DO", "EC", "ES", "SV", "GT", "HT", "HN", "JM", "MX", "NI",
    "PA", "PY", "PE", "PR", "UY", "VE",
];

/// Run-wide validation options.
///
/// These are explicit inputs to the engine rather than ambient state,
/// so the checks stay independently testable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationOptions {
    /// chrono format string date cells must match exactly.
    pub date_format: String,
    /// Values accepted by the `country_code` check.
    pub country_codes: BTreeSet<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            country_codes: COUNTRY_CODES.iter().map(|code| (*code).to_string()).collect(),
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_country_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_valid_country_code(&self, code: &str) -> bool {
        self.country_codes.contains(code)
    }
}
