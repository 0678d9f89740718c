/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler command and expression trees.
//!
//! Every node kind is a variant of a closed enum, so each translator in
//! [`crate::policy`] matches exhaustively over what the grammar can produce.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use super::Value;

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// The user's scheduler decision procedure: an ordered command sequence.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scheduler {
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// One scheduler statement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Names the ready queue.  Emits nothing.
    ReadyQueueDeclaration { name: String },
    /// Names the current-time value.  Emits nothing.
    CurrentTimeDeclaration { name: String },
    QueueCommand(QueueCommand),
    Return(ReturnCommand),
    VariableDeclaration(VariableDeclaration),
    VariableAssignment(VariableAssignment),
    /// Replace the whole scheduler artifact with the contents of `file`.
    UseFile { file: PathBuf },
    IfStatement(IfStatement),
}

// ── Queue ─────────────────────────────────────────────────────────────────────

/// Ready-queue sort keys understood by the runtime's `sortKey` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    ArrivalMin,
    ArrivalMax,
    CostMin,
    CostMax,
    Deadline,
    Priority,
    Period,
    /// Depends on the current time.
    Laxity,
}

impl SortKey {
    /// Enumerator name inside `sortKey::`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::ArrivalMin => "arrival_min",
            SortKey::ArrivalMax => "arrival_max",
            SortKey::CostMin => "cost_min",
            SortKey::CostMax => "cost_max",
            SortKey::Deadline => "deadline",
            SortKey::Priority => "priority",
            SortKey::Period => "period",
            SortKey::Laxity => "laxity",
        }
    }
}

/// A ready-queue accessor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum QueueFunction {
    Length,
    Empty,
    Front,
    Back,
    At { index: VariableValue },
    /// The fixed compound accessor `front().wcet`.
    #[serde(rename = "front().wcet", alias = "front_wcet")]
    FrontWcet,
}

impl QueueFunction {
    /// Source-level name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            QueueFunction::Length => "length",
            QueueFunction::Empty => "empty",
            QueueFunction::Front => "front",
            QueueFunction::Back => "back",
            QueueFunction::At { .. } => "at",
            QueueFunction::FrontWcet => "front().wcet",
        }
    }
}

/// A queue operation used as a statement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueueCommand {
    Sort { key: SortKey },
    Call {
        #[serde(alias = "func")]
        function: QueueFunction,
    },
}

// ── Return ────────────────────────────────────────────────────────────────────

/// `return x;`, `return queue.front();` or a bare `return;` (no job chosen).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ReturnCommand {
    #[serde(default, alias = "value")]
    pub variable: Option<String>,
    #[serde(default, alias = "func")]
    pub queue: Option<QueueFunction>,
}

// ── Variables ─────────────────────────────────────────────────────────────────

/// A declared variable: name plus the source-level type tag (`int`, `string`, …).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypedVariable {
    pub name: String,
    #[serde(rename = "type", alias = "var_type")]
    pub declared_type: String,
}

impl TypedVariable {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }

    pub fn is_string(&self) -> bool {
        self.declared_type == "string"
    }

    /// Type name in the target language.
    pub fn target_type(&self) -> &str {
        match self.declared_type.as_str() {
            "string" => "std::string",
            "time" => "Time",
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub var: TypedVariable,
    /// `None` declares an uninitialised variable.
    #[serde(default)]
    pub rhs: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableAssignment {
    #[serde(rename = "ref")]
    pub target: String,
    pub rhs: Expression,
}

/// A variable reference or a literal: exactly one of the two.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawVariableValue")]
pub enum VariableValue {
    Ref(String),
    Literal(Value),
}

#[derive(Deserialize)]
struct RawVariableValue {
    #[serde(default, rename = "ref")]
    reference: Option<String>,
    #[serde(default)]
    value: Option<Value>,
}

impl TryFrom<RawVariableValue> for VariableValue {
    type Error = String;

    fn try_from(raw: RawVariableValue) -> Result<Self, Self::Error> {
        match (raw.reference, raw.value) {
            (Some(name), None) => Ok(VariableValue::Ref(name)),
            (None, Some(value)) => Ok(VariableValue::Literal(value)),
            (Some(_), Some(_)) => Err("variable value carries both `ref` and `value`".into()),
            (None, None) => Err("variable value carries neither `ref` nor `value`".into()),
        }
    }
}

// ── Expressions ───────────────────────────────────────────────────────────────

/// Per-task timing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAccessor {
    NextDeadline,
    Wcet,
}

/// Binary expression node.  `lhs == None` marks a unary-prefixed leaf.
///
/// Chains lean right: `a + b - c` arrives as `a + (b - (c))`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub lhs: Option<Box<Expression>>,
    #[serde(default)]
    pub operator: String,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    QueueFunction {
        #[serde(alias = "func")]
        function: QueueFunction,
    },
    CurrentTime,
    ResourceFunction { resource: String },
    TaskFunction {
        #[serde(alias = "func")]
        function: TaskAccessor,
        task: String,
    },
    Operation(Operation),
    VariableValue(VariableValue),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::VariableValue(VariableValue::Ref(name.into()))
    }

    pub fn literal(value: Value) -> Self {
        Expression::VariableValue(VariableValue::Literal(value))
    }

    pub fn queue(function: QueueFunction) -> Self {
        Expression::QueueFunction { function }
    }

    pub fn operation(lhs: Option<Expression>, operator: impl Into<String>, rhs: Expression) -> Self {
        Expression::Operation(Operation {
            lhs: lhs.map(Box::new),
            operator: operator.into(),
            rhs: Box::new(rhs),
        })
    }

    /// Node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::QueueFunction { .. } => "queue function",
            Expression::CurrentTime => "current-time function",
            Expression::ResourceFunction { .. } => "resource function",
            Expression::TaskFunction { .. } => "task function",
            Expression::Operation(_) => "operation",
            Expression::VariableValue(_) => "variable value",
        }
    }
}

// ── Conditionals ──────────────────────────────────────────────────────────────

/// Relational operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Relation {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        })
    }
}

/// `lhs specifier rhs`, or a truthiness test of `lhs` when both
/// `specifier` and `rhs` are absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub lhs: Expression,
    #[serde(default)]
    pub specifier: Option<Relation>,
    #[serde(default)]
    pub rhs: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IfStatement {
    pub condition: Condition,
    #[serde(default, alias = "then_commands")]
    pub then_branch: Vec<Command>,
    #[serde(default, alias = "else_commands")]
    pub else_branch: Vec<Command>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
