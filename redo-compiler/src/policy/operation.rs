/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Expression lowering for right-hand sides and operation chains.
//!
//! An [`Operation`] chain leans right and is emitted flat, left to right,
//! without adding parentheses: the tree shape the parser produced is the
//! only precedence information, and it is preserved as is.
//!
//! ```text
//! Operation(x, "+", Operation(None, "-", y))   ──►   "x + - y"
//! ```

use super::error::PolicyError;
use super::{queue, CURRENT_TIME};
use crate::model::{Expression, Operation, TaskAccessor, Value, VariableValue};
use crate::template::quote;

/// Lower an operation node (and everything to its right).
pub(super) fn lower(op: &Operation) -> Result<String, PolicyError> {
    let operator = op.operator.trim();

    let lhs = match op.lhs.as_deref() {
        None => None,
        Some(Expression::Operation(_)) => {
            return Err(PolicyError::NestedLeftOperand {
                operator: operator.to_string(),
            })
        }
        Some(lhs) => Some(term(lhs)?),
    };
    let rhs = term(&op.rhs)?;

    match (lhs, operator.is_empty()) {
        // chain tail: a bare operand
        (None, true) => Ok(rhs),
        // unary-prefixed leaf
        (None, false) => Ok(format!("{operator} {rhs}")),
        (Some(_), true) => Err(PolicyError::MissingOperator),
        (Some(lhs), false) => Ok(format!("{lhs} {operator} {rhs}")),
    }
}

/// Lower any value-producing expression.
pub(super) fn term(expr: &Expression) -> Result<String, PolicyError> {
    match expr {
        Expression::QueueFunction { function } => queue::scalar(function),
        Expression::CurrentTime => Ok(CURRENT_TIME.to_string()),
        Expression::ResourceFunction { resource } => {
            Ok(format!("availableResources.find({})->second", quote(resource)))
        }
        Expression::TaskFunction { function, task } => Ok(task_function(*function, task)),
        Expression::Operation(op) => lower(op),
        Expression::VariableValue(v) => Ok(value(v)),
    }
}

/// Per-task timing query.
pub(super) fn task_function(function: TaskAccessor, task: &str) -> String {
    match function {
        TaskAccessor::NextDeadline => {
            format!("getNextDeadline({}, {CURRENT_TIME})", quote(task))
        }
        TaskAccessor::Wcet => {
            format!("segmentsByID.at(getJobID({})).getMaximalCost()", quote(task))
        }
    }
}

/// A variable name as is, or a literal with text quoted.
pub(super) fn value(v: &VariableValue) -> String {
    match v {
        VariableValue::Ref(name) => name.clone(),
        VariableValue::Literal(lit) => literal(lit),
    }
}

pub(super) fn literal(v: &Value) -> String {
    match v {
        Value::Text(s) => quote(s),
        other => other.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
