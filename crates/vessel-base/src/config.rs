use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const CAPTURE_PANICS_VAR: &str = "VESSEL_CAPTURE_PANICS";
pub const TRACE_CAPTURES_VAR: &str = "VESSEL_TRACE_CAPTURES";

static CURRENT: OnceLock<CaptureConfig> = OnceLock::new();

/// Controls what the `Attempt` capture boundary traps and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// Trap panics raised inside computations. When off, only returned errors are captured
    /// and panics unwind through the caller. A trapped panic still passes through the
    /// process panic hook, which prints to stderr unless it has been replaced.
    #[serde(default = "default_capture_panics")]
    pub capture_panics: bool,
    /// Emit a `tracing` debug event every time a panic or a returned error is captured.
    #[serde(default)]
    pub trace_captures: bool,
}

fn default_capture_panics() -> bool {
    true
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_panics: default_capture_panics(),
            trace_captures: false,
        }
    }
}

impl CaptureConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the capture flags through `lookup`; unset variables keep their defaults.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CAPTURE_PANICS_VAR) {
            config.capture_panics = parse_flag(CAPTURE_PANICS_VAR, &value)?;
        }
        if let Some(value) = lookup(TRACE_CAPTURES_VAR) {
            config.trace_captures = parse_flag(TRACE_CAPTURES_VAR, &value)?;
        }
        Ok(config)
    }

    /// The process-wide configuration: whatever was installed, otherwise the environment.
    pub fn current() -> &'static CaptureConfig {
        CURRENT.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                tracing::warn!("{err}; using default capture config");
                Self::default()
            })
        })
    }

    /// Fixes the process-wide configuration. Only the first call (before any capture) wins.
    pub fn install(config: CaptureConfig) -> Result<(), ConfigError> {
        CURRENT
            .set(config)
            .map_err(|_| ConfigError::AlreadyInstalled)
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
