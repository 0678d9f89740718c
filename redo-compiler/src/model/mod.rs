/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Parse-tree types for one ReDo program.
//!
//! The grammar and its parser live outside this crate.  The parser hands us
//! its tree serialised as YAML (default) or JSON, which is deserialised
//! straight into the types below:
//!
//! ```text
//! parser ──(model.yaml / model.json)──►  Model  ──►  validate  ──►  emit / policy
//!                                          ↑ read-only from here on
//! ```
//!
//! The expected YAML layout is:
//! ```yaml
//! time_model: discrete
//! events: [arrival, completion]
//! resources:
//!   - { name: p1, cores: 4 }
//! workloads:
//!   - { type: task, name: T1, jitter: 0, period: 100, cost: {low: 2, up: 5},
//!       deadline: 100, processor: p1, priority: 1 }
//! scheduler:
//!   commands:
//!     - { kind: ready_queue_declaration, name: rq }
//!     - { kind: return, queue: { name: front } }
//! ```
//!
//! Nothing here is mutated after loading.  Node shapes the grammar cannot
//! produce (unknown kinds, a `variable_value` with both `ref` and `value`)
//! are rejected by serde while loading.

pub mod command;

pub use command::{
    Command, Condition, Expression, IfStatement, Operation, QueueCommand, QueueFunction,
    Relation, ReturnCommand, Scheduler, SortKey, TaskAccessor, TypedVariable,
    VariableAssignment, VariableDeclaration, VariableValue,
};

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

// ── Scalars ───────────────────────────────────────────────────────────────────

/// A numeric model field (timing, cost, priority).
///
/// Discrete-time models use integers; dense-time models may carry fractions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            // `{:?}` keeps the fractional part (`2.0`, not `2`).
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// A literal value as written in the source program.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns `true` for a text literal.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

/// Bare textual form: numbers and booleans as written, text without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// Closed numeric range `[low, up]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Interval {
    pub low: Number,
    pub up: Number,
}

impl Interval {
    pub fn new(low: impl Into<Number>, up: impl Into<Number>) -> Self {
        Self {
            low: low.into(),
            up: up.into(),
        }
    }
}

// ── Time model & events ───────────────────────────────────────────────────────

/// Time domain of the simulated system.  An absent choice means discrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeModel {
    Dense,
    #[default]
    Discrete,
}

/// Built-in event flags plus the ordered custom event times.
///
/// Deserialised from the flat list the grammar produces, e.g.
/// `[arrival, completion, 50, "2*period"]`: the keywords `all`, `arrival`
/// and `completion` set flags, everything else is a custom time expression
/// kept in source order and passed through to the runtime unevaluated.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct EventSet {
    pub all: bool,
    pub arrival: bool,
    pub completion: bool,
    pub custom: Vec<String>,
}

impl From<Vec<Value>> for EventSet {
    fn from(entries: Vec<Value>) -> Self {
        let mut set = EventSet::default();
        for entry in entries {
            match entry {
                Value::Text(ref s) if s == "all" => set.all = true,
                Value::Text(ref s) if s == "arrival" => set.arrival = true,
                Value::Text(ref s) if s == "completion" => set.completion = true,
                other => set.custom.push(other.to_string()),
            }
        }
        set
    }
}

// ── Resources & workload ──────────────────────────────────────────────────────

/// A named processor / core group.
///
/// Position in [`Model::resources`] is the resource's numeric id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(alias = "ncores", alias = "core_count")]
    pub cores: u32,
}

/// Periodic task.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskItem {
    pub name: String,
    pub jitter: Number,
    pub period: Number,
    pub cost: Interval,
    pub deadline: Number,
    /// Name of the hosting [`Resource`].
    pub processor: String,
    #[serde(default = "default_priority")]
    pub priority: Number,
}

/// One-shot job with an arrival window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobItem {
    pub name: String,
    pub arrival: Interval,
    pub cost: Interval,
    pub deadline: Number,
    /// Name of the hosting [`Resource`].
    pub processor: String,
    #[serde(default = "default_priority")]
    pub priority: Number,
}

fn default_priority() -> Number {
    Number::Int(0)
}

/// A unit of work bound to a processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkloadItem {
    Task(TaskItem),
    Job(JobItem),
}

impl WorkloadItem {
    pub fn name(&self) -> &str {
        match self {
            WorkloadItem::Task(t) => &t.name,
            WorkloadItem::Job(j) => &j.name,
        }
    }

    /// Name of the resource this item runs on.
    pub fn processor(&self) -> &str {
        match self {
            WorkloadItem::Task(t) => &t.processor,
            WorkloadItem::Job(j) => &j.processor,
        }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// Root of the parse tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub time_model: Option<TimeModel>,
    #[serde(default)]
    pub events: EventSet,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub workloads: Vec<WorkloadItem>,
    #[serde(default)]
    pub scheduler: Scheduler,
}

impl Model {
    /// The effective time model (absent ⇒ discrete).
    pub fn time_model(&self) -> TimeModel {
        self.time_model.unwrap_or_default()
    }

    /// Parse a model from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse YAML model")
    }

    /// Parse a model from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse JSON model")
    }

    /// Read and parse the model file at `path`.
    ///
    /// The format is chosen by extension: `.json` is JSON, anything else is
    /// YAML (JSON is valid YAML, so the fallback also accepts it).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not describe a
    /// well-formed parse tree.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading ReDo model from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open model file: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let model = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
        .with_context(|| format!("Invalid model file: {}", path.display()))?;

        debug!(
            time_model = ?model.time_model(),
            resources = model.resources.len(),
            workloads = model.workloads.len(),
            commands = model.scheduler.commands.len(),
            "Model loaded"
        );

        Ok(model)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
