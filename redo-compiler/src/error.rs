/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use thiserror::Error;

use crate::emit::EmitError;
use crate::policy::PolicyError;
use crate::validate::ValidationError;

/// Failure of an in-memory compilation.
///
/// Loading the model and writing the artifacts are I/O concerns and are
/// reported through `anyhow` by [`Compiler::compile_file`](crate::compiler::Compiler::compile_file).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("semantic validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("system model emission failed: {0}")]
    Emit(#[from] EmitError),

    #[error("scheduler translation failed: {0}")]
    Policy(#[from] PolicyError),
}
