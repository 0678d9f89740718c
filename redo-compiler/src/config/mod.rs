//! Compiler configuration loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! output_dir: "build/generated"
//! system_model_file: "systemModel.hpp"
//! scheduler_file: "scheduler.hpp"
//! ```
//!
//! Every key is optional.  Command-line flags override values read here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Mirrors the file layout; unknown keys are rejected so typos surface early.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompilerConfigFile {
    output_dir: Option<PathBuf>,
    system_model_file: Option<String>,
    scheduler_file: Option<String>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// Where the two generated artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Directory receiving both artifacts.
    pub output_dir: PathBuf,
    /// File name of the system-model header inside `output_dir`.
    pub system_model_file: String,
    /// File name of the scheduler header inside `output_dir`.
    pub scheduler_file: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            system_model_file: String::from("systemModel.hpp"),
            scheduler_file: String::from("scheduler.hpp"),
        }
    }
}

impl CompilerConfig {
    /// Parses `path`, filling absent keys from [`CompilerConfig::default`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading compiler configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        // serde_yaml maps an empty document to unit, not to an empty mapping
        let file: CompilerConfigFile = if content.trim().is_empty() {
            CompilerConfigFile::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?
        };

        let defaults = Self::default();
        let config = Self {
            output_dir: file.output_dir.unwrap_or(defaults.output_dir),
            system_model_file: file.system_model_file.unwrap_or(defaults.system_model_file),
            scheduler_file: file.scheduler_file.unwrap_or(defaults.scheduler_file),
        };

        debug!(
            "  output_dir: {} | system model: {} | scheduler: {}",
            config.output_dir.display(),
            config.system_model_file,
            config.scheduler_file,
        );

        Ok(config)
    }

    /// Full path of the system-model artifact.
    pub fn system_model_path(&self) -> PathBuf {
        self.output_dir.join(&self.system_model_file)
    }

    /// Full path of the scheduler artifact.
    pub fn scheduler_path(&self) -> PathBuf {
        self.output_dir.join(&self.scheduler_file)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
