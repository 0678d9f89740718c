/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Compilation pipeline.
//!
//! ```text
//! model file ─► Model ─► validate ─► emit::system_model ─► systemModel.hpp
//!                                 └► policy::compile ──┬─► scheduler template ─► scheduler.hpp
//!                                                      └─► use_file contents ──► scheduler.hpp
//! ```
//!
//! Every phase runs in memory first; the artifacts are written only once
//! both are complete, so a failing run leaves the output directory as it was.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::CompilerConfig;
use crate::emit;
use crate::error::CompileError;
use crate::model::Model;
use crate::policy::{self, CompiledPolicy};
use crate::template::SchedulerTemplate;
use crate::validate::validate;

// ── Results ───────────────────────────────────────────────────────────────────

/// The scheduler artifact before any file access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerArtifact {
    /// Fully rendered `scheduler.hpp`.
    Generated(String),
    /// Copy this file verbatim instead (path as written in the model).
    External(PathBuf),
}

/// In-memory result of [`Compiler::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub system_model: String,
    pub scheduler: SchedulerArtifact,
}

/// Final text of both artifacts, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub system_model: String,
    pub scheduler: String,
}

/// Where [`Compiler::compile_file`] wrote the artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub system_model: PathBuf,
    pub scheduler: PathBuf,
}

// ── Compiler ──────────────────────────────────────────────────────────────────

/// Drives validation, emission and translation for one model at a time.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Validate `model` and produce both artifacts in memory.
    ///
    /// # Errors
    /// The first failing phase aborts: validation reports every violation it
    /// found, emission and translation stop at their first problem.
    pub fn compile(&self, model: &Model) -> Result<Artifacts, CompileError> {
        validate(model)?;

        let system_model = emit::system_model(model)?.render();

        let scheduler = match policy::compile(&model.scheduler)? {
            CompiledPolicy::Generated(body) => {
                SchedulerArtifact::Generated(SchedulerTemplate::with_body(body).render())
            }
            CompiledPolicy::External(path) => SchedulerArtifact::External(path),
        };

        Ok(Artifacts {
            system_model,
            scheduler,
        })
    }

    /// Load and compile the model at `input` without writing anything.
    ///
    /// A relative `use_file` path is resolved against the directory of
    /// `input` and its contents become the scheduler artifact.
    pub fn check_file(&self, input: &Path) -> Result<Output> {
        let model = Model::load_from_file(input)?;
        let artifacts = self
            .compile(&model)
            .with_context(|| format!("Failed to compile {}", input.display()))?;

        let scheduler = match artifacts.scheduler {
            SchedulerArtifact::Generated(text) => text,
            SchedulerArtifact::External(file) => {
                let path = resolve_use_file(input, &file);
                info!("imported file: {}", path.display());
                fs::read_to_string(&path)
                    .with_context(|| format!("Cannot open scheduler file: {}", path.display()))?
            }
        };

        Ok(Output {
            system_model: artifacts.system_model,
            scheduler,
        })
    }

    /// Load, compile and write both artifacts into the configured output
    /// directory (created if missing).
    pub fn compile_file(&self, input: &Path) -> Result<WrittenFiles> {
        let output = self.check_file(input)?;
        self.write(&output)
    }

    fn write(&self, output: &Output) -> Result<WrittenFiles> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create output directory: {}", dir.display()))?;

        let files = WrittenFiles {
            system_model: self.config.system_model_path(),
            scheduler: self.config.scheduler_path(),
        };

        // Both artifacts are staged before either replaces its destination.
        // An unpersisted stage file is removed when dropped.
        let system_model = stage(dir, &files.system_model, &output.system_model)?;
        let scheduler = stage(dir, &files.scheduler, &output.scheduler)?;

        scheduler
            .persist(&files.scheduler)
            .map_err(|e| e.error)
            .with_context(|| format!("Cannot write {}", files.scheduler.display()))?;
        system_model
            .persist(&files.system_model)
            .map_err(|e| e.error)
            .with_context(|| format!("Cannot write {}", files.system_model.display()))?;

        info!(path = %files.system_model.display(), bytes = output.system_model.len(), "System model written");
        info!(path = %files.scheduler.display(), bytes = output.scheduler.len(), "Scheduler written");

        Ok(files)
    }
}

/// Write `text` to a temporary file in `dir`, destined for `dest`.
fn stage(dir: &Path, dest: &Path, text: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Cannot create temporary file for {}", dest.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Cannot write {}", dest.display()))?;
    Ok(file)
}

/// `file` as named by a `use_file` command, relative to the model's directory.
fn resolve_use_file(input: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match input.parent() {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
