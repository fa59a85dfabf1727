//! Furl configuration file handling

use anyhow::{Context, Result};
use furl_core::scroll::ScrollConfig;
use furl_header::{DismissPolicy, HeaderMetrics, HeaderVariant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "furl.toml";

/// Upper bound on the frames of one simulated gesture
pub const MAX_FRAMES: usize = 100_000;

/// Top-level Furl configuration (furl.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FurlConfig {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub metrics: HeaderMetrics,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Which header to mount
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HeaderConfig {
    #[serde(default)]
    pub variant: HeaderVariant,
    #[serde(default)]
    pub dismiss_policy: DismissPolicy,
}

/// Simulated scroll gesture
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Frame interval in milliseconds
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f32,
    #[serde(default)]
    pub from: f32,
    #[serde(default = "default_to")]
    pub to: f32,
    /// Offset change per frame; the sign is taken from `from -> to`
    #[serde(default = "default_step")]
    pub step: f32,
    /// Tap the search icon on the first frame at or past this offset
    #[serde(default)]
    pub search_at: Option<f32>,
}

fn default_frame_ms() -> f32 {
    16.0
}

fn default_to() -> f32 {
    -120.0
}

fn default_step() -> f32 {
    10.0
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            from: 0.0,
            to: default_to(),
            step: default_step(),
            search_at: None,
        }
    }
}

impl SessionConfig {
    /// Offset change per frame, signed toward `to`
    pub fn signed_step(&self) -> f32 {
        if self.to < self.from {
            -self.step.abs()
        } else {
            self.step.abs()
        }
    }

    /// Whole steps between `from` and `to`
    pub fn step_count(&self) -> f64 {
        ((f64::from(self.to) - f64::from(self.from)) / f64::from(self.signed_step())).floor()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            anyhow::bail!("[session] frame_ms must be positive, got {}", self.frame_ms);
        }
        if !(self.step.is_finite() && self.step != 0.0) {
            anyhow::bail!("[session] step must be non-zero, got {}", self.step);
        }
        let offsets = [
            ("from", Some(self.from)),
            ("to", Some(self.to)),
            ("search_at", self.search_at),
        ];
        for (field, value) in offsets {
            if let Some(value) = value {
                if !value.is_finite() {
                    anyhow::bail!("[session] {} must be a finite offset, got {}", field, value);
                }
            }
        }
        if self.step_count() >= MAX_FRAMES as f64 {
            anyhow::bail!(
                "[session] {} -> {} in steps of {} exceeds {} frames",
                self.from,
                self.to,
                self.step,
                MAX_FRAMES
            );
        }
        Ok(())
    }
}

impl FurlConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `furl.toml` in the current
    /// directory is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE),
            Some(path) => path.to_path_buf(),
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        if !config_path.exists() {
            anyhow::bail!("No config file at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load {}", config_path.display()))
    }

    /// Parse and validate a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FurlConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.metrics.validate().context("Invalid [metrics]")?;
        self.scroll.validate().context("Invalid [scroll]")?;
        self.session.validate()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
