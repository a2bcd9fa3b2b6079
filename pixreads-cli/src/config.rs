//! Configuration handling for the pixreads CLI
//!
//! Supports loading configuration from pixreads.toml files with CLI argument
//! overrides. Fragmentation defaults are domain-tuned; change them only if
//! the downstream rendering changes too.

use anyhow::{Context, Result};
use pixreads_core::{FragmentParams, ScanParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fragment: FragmentConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentConfig {
    /// Nominal fragment step length in reference units
    #[serde(default = "default_step_len")]
    pub step_len: u64,

    /// Fragments at or below this length are dropped
    #[serde(default = "default_min_len")]
    pub min_len: u64,

    /// Half-width of the uniform jitter applied to fragment ends
    #[serde(default = "default_end_jitter")]
    pub end_jitter: f64,

    /// Standard deviation of the Gaussian score jitter
    #[serde(default = "default_score_sd")]
    pub score_sd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Horizontal OFF pixels bridged between ON pixels on a row
    #[serde(default = "default_tolerance")]
    pub tolerance: usize,

    /// Row sampling modulus
    #[serde(default = "default_modulus")]
    pub modulus: usize,
}

// Default value functions
fn default_step_len() -> u64 { 65 }
fn default_min_len() -> u64 { 4 }
fn default_end_jitter() -> f64 { 10.0 }
fn default_score_sd() -> f64 { 3.0 }
fn default_tolerance() -> usize { 1 }
fn default_modulus() -> usize { 5 }

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            step_len: default_step_len(),
            min_len: default_min_len(),
            end_jitter: default_end_jitter(),
            score_sd: default_score_sd(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            modulus: default_modulus(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find pixreads.toml in current directory
                let default_path = PathBuf::from("pixreads.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: pixreads.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    pub fn fragment_params(&self) -> FragmentParams {
        FragmentParams {
            step_len: self.fragment.step_len,
            min_len: self.fragment.min_len,
            end_jitter: self.fragment.end_jitter,
            score_sd: self.fragment.score_sd,
        }
    }

    /// Scan parameters, with CLI overrides applied when given.
    pub fn scan_params(&self, tolerance: Option<usize>, modulus: Option<usize>) -> ScanParams {
        ScanParams {
            tolerance: tolerance.unwrap_or(self.scan.tolerance),
            modulus: modulus.unwrap_or(self.scan.modulus),
        }
    }
}
