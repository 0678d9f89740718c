/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use redo_compiler::{Compiler, CompilerConfig};

// ── CLI argument definition ───────────────────────────────────────────────────

/// ReDo scheduling-policy compiler.
///
/// Example:
///   redoc model.yaml -o build/generated
///   redoc model.json --check
#[derive(Debug, Parser)]
#[command(
    name = "redoc",
    version,
    about = "ReDo compiler – emits systemModel.hpp and scheduler.hpp from a parsed ReDo model",
    long_about = None,
)]
struct Cli {
    /// Parsed ReDo model (YAML, or JSON with a `.json` extension).
    input: PathBuf,

    /// Path to the YAML compiler configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Directory receiving the generated headers.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// File name of the generated system model.
    #[arg(long = "model-out")]
    model_out: Option<String>,

    /// File name of the generated scheduler.
    #[arg(long = "scheduler-out")]
    scheduler_out: Option<String>,

    /// Validate and translate only; write nothing.
    #[arg(long = "check", default_value_t = false)]
    check: bool,
}

impl Cli {
    /// Config file values, overridden by any flag given on the command line.
    fn compiler_config(&self) -> Result<CompilerConfig> {
        let mut config = match &self.config {
            Some(path) => CompilerConfig::load_from_file(path)?,
            None => CompilerConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(name) = &self.model_out {
            config.system_model_file = name.clone();
        }
        if let Some(name) = &self.scheduler_out {
            config.scheduler_file = name.clone();
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.compiler_config()?;

    info!(
        input         = %cli.input.display(),
        output_dir    = %config.output_dir.display(),
        system_model  = %config.system_model_file,
        scheduler     = %config.scheduler_file,
        check         = cli.check,
        "Configuration"
    );

    let compiler = Compiler::new(config);
    if cli.check {
        check(&compiler, &cli.input)
    } else {
        let written = compiler.compile_file(&cli.input)?;
        info!(
            "Generated {} and {}",
            written.system_model.display(),
            written.scheduler.display()
        );
        Ok(())
    }
}

fn check(compiler: &Compiler, input: &Path) -> Result<()> {
    let output = compiler.check_file(input)?;
    info!(
        system_model_bytes = output.system_model.len(),
        scheduler_bytes = output.scheduler.len(),
        "{} compiles cleanly, nothing written",
        input.display()
    );
    Ok(())
}
