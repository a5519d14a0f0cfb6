//! Environment configuration.

use packforge_core::Tariff;

pub const TARIFF_VAR: &str = "PACKFORGE_TARIFF";
pub const OUTPUT_VAR: &str = "PACKFORGE_OUTPUT";

/// Tariff code used when `PACKFORGE_TARIFF` is unset or unparsable.
pub const DEFAULT_TARIFF_CODE: i32 = 1;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub tariff: Tariff,
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tariff: Tariff::from_code(DEFAULT_TARIFF_CODE),
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Bad values fall back to
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TARIFF_VAR) {
            match raw.trim().parse::<i32>() {
                Ok(code) => config.tariff = Tariff::from_code(code),
                Err(_) => tracing::warn!(
                    value = %raw,
                    "{TARIFF_VAR} is not an integer; using tariff code {DEFAULT_TARIFF_CODE}"
                ),
            }
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "text" => config.output = OutputFormat::Text,
                "json" => config.output = OutputFormat::Json,
                _ => tracing::warn!(value = %raw, "{OUTPUT_VAR} must be text or json; using text"),
            }
        }

        config
    }
}
