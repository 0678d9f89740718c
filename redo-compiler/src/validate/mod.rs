/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Semantic validator.
//!
//! Checks the global rules a parse tree must satisfy before anything is
//! emitted:
//!
//! 1. a dense time model cannot be combined with the `all` event flag;
//! 2. at most one ready-queue declaration at the top level;
//! 3. at most one current-time declaration at the top level;
//! 4. ready-queue and current-time names differ (when both are declared);
//! 5. no declared variable reuses either of those names;
//! 6. every workload item's processor names a declared resource.
//!
//! All checks run; the result lists every violation.  Validation is a pure
//! read of the [`Model`].

pub mod error;

pub use error::{ValidationError, Violation};

use tracing::{debug, error};

use crate::model::{Command, Model, TimeModel};

/// Validate `model`, returning every broken rule on failure.
pub fn validate(model: &Model) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_time_model(model, &mut violations);
    check_declarations(&model.scheduler.commands, &mut violations);
    check_resource_refs(model, &mut violations);

    if violations.is_empty() {
        debug!("Semantic validation passed");
        return Ok(());
    }

    for v in &violations {
        error!(violation = %v, "Semantic rule violated");
    }
    Err(ValidationError { violations })
}

// ── Rule 1 ────────────────────────────────────────────────────────────────────

fn check_time_model(model: &Model, out: &mut Vec<Violation>) {
    if model.time_model() == TimeModel::Dense && model.events.all {
        out.push(Violation::DenseTimeWithAllEvents);
    }
}

// ── Rules 2-5 ─────────────────────────────────────────────────────────────────

fn check_declarations(commands: &[Command], out: &mut Vec<Violation>) {
    let mut queue_names: Vec<&str> = Vec::new();
    let mut time_names: Vec<&str> = Vec::new();

    for c in commands {
        match c {
            Command::ReadyQueueDeclaration { name } => queue_names.push(name),
            Command::CurrentTimeDeclaration { name } => time_names.push(name),
            _ => {}
        }
    }

    if queue_names.len() > 1 {
        out.push(Violation::DuplicateReadyQueue {
            count: queue_names.len(),
        });
    }
    if time_names.len() > 1 {
        out.push(Violation::DuplicateCurrentTime {
            count: time_names.len(),
        });
    }

    for q in &queue_names {
        if time_names.contains(q) {
            out.push(Violation::QueueTimeNameClash {
                name: q.to_string(),
            });
        }
    }

    let mut var_names = Vec::new();
    collect_variable_names(commands, &mut var_names);

    for var in var_names {
        if queue_names.contains(&var) {
            out.push(Violation::VariableNamedLikeReadyQueue {
                name: var.to_string(),
            });
        }
        if time_names.contains(&var) {
            out.push(Violation::VariableNamedLikeCurrentTime {
                name: var.to_string(),
            });
        }
    }
}

/// Declared variable names at every nesting level, in source order.
fn collect_variable_names<'a>(commands: &'a [Command], out: &mut Vec<&'a str>) {
    for c in commands {
        match c {
            Command::VariableDeclaration(decl) => out.push(&decl.var.name),
            Command::IfStatement(stmt) => {
                collect_variable_names(&stmt.then_branch, out);
                collect_variable_names(&stmt.else_branch, out);
            }
            _ => {}
        }
    }
}

// ── Rule 6 ────────────────────────────────────────────────────────────────────

fn check_resource_refs(model: &Model, out: &mut Vec<Violation>) {
    for item in &model.workloads {
        let resource = item.processor();
        if !model.resources.iter().any(|r| r.name == resource) {
            out.push(Violation::UnknownResource {
                item: item.name().to_string(),
                resource: resource.to_string(),
            });
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
