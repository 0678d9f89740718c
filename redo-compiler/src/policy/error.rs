/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use thiserror::Error;

/// Translation failure in the scheduler policy compiler.
///
/// Each variant aborts the whole compilation; nothing is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// `at(index)` with an index that is neither an integer literal nor a
    /// variable reference.
    #[error("index must be an integer, got `{found}`")]
    IndexNotInteger { found: String },

    /// A queue element (`front`, `back`, `at`) used where a scalar value is
    /// required.  Only derived properties such as `front().wcet` may be stored.
    #[error("cannot copy ready queue objects: `{function}` yields a queue element")]
    CannotCopyQueueObject { function: &'static str },

    /// A queue function that has no translation in this position.
    #[error("queue function `{function}` is not supported {context}")]
    UnsupportedQueueFunction {
        function: &'static str,
        context: &'static str,
    },

    /// A return naming both a variable and a queue function.
    #[error("cannot return value: return names both variable '{variable}' and a queue function")]
    InvalidReturn { variable: String },

    /// An operand kind that conditions cannot evaluate directly.
    #[error("invalid expression in condition: a {kind} must be bound to a variable first")]
    InvalidConditionOperand { kind: &'static str },

    /// A relational operator without a right-hand side, or the reverse.
    #[error("invalid condition: relational operator and right-hand side must appear together")]
    MalformedCondition,

    /// An operation whose left operand is itself an operation.
    #[error("invalid operation: the left operand of `{operator}` cannot itself be an operation")]
    NestedLeftOperand { operator: String },

    /// A binary operation with an empty operator.
    #[error("invalid operation: missing operator between operands")]
    MissingOperator,
}
