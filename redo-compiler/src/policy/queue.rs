/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Ready-queue accessor lowering.
//!
//! Two views of the same accessor set:
//!
//! * [`accessor`]: the call itself (`readyQueue.front()`), for conditions,
//!   returns and statements.  Element accessors are allowed here.
//! * [`scalar`]: a value that may be stored or computed with.  Element
//!   accessors are rejected: a queue element is never copied into a variable.

use super::error::PolicyError;
use super::{CURRENT_TIME, READY_QUEUE};
use crate::model::{QueueFunction, SortKey, Value, VariableValue};

/// Lower `f` to its zero-argument call (or `at(index)`).
///
/// `context` names the position for the error message.
pub(super) fn accessor(f: &QueueFunction, context: &'static str) -> Result<String, PolicyError> {
    let call = match f {
        QueueFunction::Length => "length()".to_string(),
        QueueFunction::Empty => "empty()".to_string(),
        QueueFunction::Front => "front()".to_string(),
        QueueFunction::Back => "back()".to_string(),
        QueueFunction::At { index: i } => format!("at({})", index(i)?),
        QueueFunction::FrontWcet => {
            return Err(PolicyError::UnsupportedQueueFunction {
                function: f.name(),
                context,
            })
        }
    };
    Ok(format!("{READY_QUEUE}.{call}"))
}

/// Lower `f` as a value-producing expression.
///
/// `empty` is accepted alongside `length` and `front().wcet`: it yields a
/// plain `bool`, so storing it copies no queue element.
pub(super) fn scalar(f: &QueueFunction) -> Result<String, PolicyError> {
    match f {
        QueueFunction::Length | QueueFunction::Empty => accessor(f, "as a value"),
        QueueFunction::FrontWcet => Ok(format!(
            "segmentsByID.find({READY_QUEUE}.front())->second.getMaximalCost()"
        )),
        QueueFunction::Front | QueueFunction::Back | QueueFunction::At { .. } => {
            Err(PolicyError::CannotCopyQueueObject { function: f.name() })
        }
    }
}

/// `readyQueue.sort(...)` statement text (without the trailing `;`).
pub(super) fn sort(key: SortKey) -> String {
    match key {
        SortKey::Laxity => format!("{READY_QUEUE}.sort(sortKey::laxity, {CURRENT_TIME})"),
        other => format!("{READY_QUEUE}.sort(sortKey::{})", other.as_str()),
    }
}

/// Index of `at(index)`: a variable name or an integer literal.
///
/// Bounds are checked by the engine at run time.
fn index(v: &VariableValue) -> Result<String, PolicyError> {
    match v {
        VariableValue::Ref(name) => Ok(name.clone()),
        VariableValue::Literal(Value::Int(i)) => Ok(i.to_string()),
        VariableValue::Literal(other) => Err(PolicyError::IndexNotInteger {
            found: other.to_string(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
