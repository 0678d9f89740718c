/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! If/else block lowering.
//!
//! ```text
//! <indent>if (<test>) {
//! <indent>\t<then-branch>
//! <indent>} else {          (only if the else-branch is non-empty)
//! <indent>\t<else-branch>
//! <indent>}
//! ```

use super::error::PolicyError;
use super::{operation, queue, Flow, PolicyCompiler, CURRENT_TIME};
use crate::model::{Condition, Expression, IfStatement};

impl PolicyCompiler {
    pub(super) fn if_statement(&mut self, stmt: &IfStatement, indent: &str) -> Result<Flow, PolicyError> {
        let test = condition(&stmt.condition)?;
        let inner = format!("{indent}\t");

        self.emit(indent, format!("if ({test}) {{"));
        if let sub @ Flow::Substitute(_) = self.commands(&stmt.then_branch, &inner)? {
            return Ok(sub);
        }

        if !stmt.else_branch.is_empty() {
            self.emit(indent, "} else {");
            if let sub @ Flow::Substitute(_) = self.commands(&stmt.else_branch, &inner)? {
                return Ok(sub);
            }
        }

        self.emit(indent, "}");
        Ok(Flow::Continue)
    }
}

/// `lhs op rhs`, or the bare `lhs` as a truthiness test.
fn condition(cond: &Condition) -> Result<String, PolicyError> {
    let lhs = operand(&cond.lhs)?;
    match (cond.specifier, &cond.rhs) {
        (Some(op), Some(rhs)) => Ok(format!("{lhs} {op} {}", operand(rhs)?)),
        (None, None) => Ok(lhs),
        _ => Err(PolicyError::MalformedCondition),
    }
}

/// Condition operands are limited to queue accessors, plain values and the
/// current time.
fn operand(expr: &Expression) -> Result<String, PolicyError> {
    match expr {
        Expression::QueueFunction { function } => queue::accessor(function, "in a condition"),
        Expression::VariableValue(v) => Ok(operation::value(v)),
        Expression::CurrentTime => Ok(CURRENT_TIME.to_string()),
        other => Err(PolicyError::InvalidConditionOperand {
            kind: other.kind_name(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
