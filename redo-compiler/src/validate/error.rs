/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Error types for the semantic validator.
//!
//! * [`Violation`]: one broken rule, with the names involved.
//! * [`ValidationError`]: every violation found in one model.  The
//!   validator runs all checks before reporting, so a user fixing a model
//!   sees the whole list at once.

use std::fmt;

use thiserror::Error;

// ── Violations ────────────────────────────────────────────────────────────────

/// A single semantic rule broken by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `time_model: dense` combined with the `all` event flag.
    DenseTimeWithAllEvents,

    /// More than one `ready_queue_declaration` at the top level.
    DuplicateReadyQueue { count: usize },

    /// More than one `current_time_declaration` at the top level.
    DuplicateCurrentTime { count: usize },

    /// The ready queue and the current time share a name.
    QueueTimeNameClash { name: String },

    /// A declared variable reuses the ready-queue name.
    VariableNamedLikeReadyQueue { name: String },

    /// A declared variable reuses the current-time name.
    VariableNamedLikeCurrentTime { name: String },

    /// A workload item names a processor that is not declared.
    UnknownResource { item: String, resource: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DenseTimeWithAllEvents => {
                write!(f, "dense time model does not support all events")
            }

            Violation::DuplicateReadyQueue { count } => write!(
                f,
                "only one ready queue is allowed ({} declared)",
                count
            ),

            Violation::DuplicateCurrentTime { count } => write!(
                f,
                "only one current time variable is allowed ({} declared)",
                count
            ),

            Violation::QueueTimeNameClash { name } => write!(
                f,
                "ready queue and current time variable must have different names ('{}')",
                name
            ),

            Violation::VariableNamedLikeReadyQueue { name } => write!(
                f,
                "ready queue and variable must have different names ('{}')",
                name
            ),

            Violation::VariableNamedLikeCurrentTime { name } => write!(
                f,
                "current time variable and variable must have different names ('{}')",
                name
            ),

            Violation::UnknownResource { item, resource } => write!(
                f,
                "workload '{}' references undeclared resource '{}'",
                item, resource
            ),
        }
    }
}

// ── Aggregate error ───────────────────────────────────────────────────────────

/// Returned by [`validate`](super::validate) when at least one rule is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} semantic rule violation(s): {}", .violations.len(), join(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns `true` if `violation` is among the reported ones.
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
