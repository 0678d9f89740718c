/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! System-model emitter.
//!
//! Renders the time model, events, resources and workload of a [`Model`]
//! into the five slots of the [`SystemModelTemplate`]:
//!
//! | Slot | Content |
//! |---|---|
//! | `TimeModel` | `typedef discreteTime time;` or `typedef denseTime time;` |
//! | `Events` | one `events<time>(all, arrival, completion, {custom…})` call |
//! | `Resources` | one `processors.emplace_back` per resource, ids 0.. |
//! | `Tasks` | one `tasks.emplace_back` per task |
//! | `Jobs` | one `segments.emplace_back` per job |
//!
//! Tasks and jobs share one id counter, assigned in workload order.  A
//! workload item's processor is emitted as the position of the named
//! resource in declaration order.  Field values are passed through
//! unchecked; malformed values surface when the engine is compiled.

use thiserror::Error;
use tracing::debug;

use crate::model::{EventSet, Interval, JobItem, Model, Resource, TaskItem, TimeModel, WorkloadItem};
use crate::template::{quote, ModelSlot, SystemModelTemplate};

const INDENT: &str = "\t\t";

/// Failure while rendering the system model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A workload item names a processor that is not declared.
    #[error("workload '{item}' references undeclared resource '{resource}'")]
    UnknownResource { item: String, resource: String },
}

/// Render `model` into a filled system-model template.
pub fn system_model(model: &Model) -> Result<SystemModelTemplate, EmitError> {
    let mut t = SystemModelTemplate::system_model();

    t.set(ModelSlot::TimeModel, time_model(model.time_model()));
    t.set(ModelSlot::Events, events(&model.events));
    t.set(ModelSlot::Resources, resources(&model.resources));

    let (tasks, jobs) = workload(model)?;
    t.set(ModelSlot::Tasks, tasks);
    t.set(ModelSlot::Jobs, jobs);

    Ok(t)
}

fn time_model(model: TimeModel) -> String {
    let typedef = match model {
        TimeModel::Dense => "denseTime",
        TimeModel::Discrete => "discreteTime",
    };
    format!("\ttypedef {typedef} time;\n\n")
}

fn events(events: &EventSet) -> String {
    let custom = events
        .custom
        .iter()
        .map(|e| format!("time({e})"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{INDENT}systemEvents = events<time>({}, {}, {}, {{{custom}}});\n",
        events.all, events.arrival, events.completion
    )
}

fn resources(resources: &[Resource]) -> String {
    resources
        .iter()
        .enumerate()
        .map(|(id, r)| {
            format!(
                "{INDENT}processors.emplace_back({}, {id}, {});\n",
                quote(&r.name),
                r.cores
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Returns the `(tasks, jobs)` slot texts.
fn workload(model: &Model) -> Result<(String, String), EmitError> {
    let mut tasks = String::new();
    let mut jobs = String::new();

    for (id, item) in model.workloads.iter().enumerate() {
        let processor = resource_index(&model.resources, item)?;
        match item {
            WorkloadItem::Task(t) => {
                debug!(task = %t.name, id, processor, "Emitting task");
                tasks.push_str(&format!("{INDENT}{}\n", task_statement(t, id, processor)));
            }
            WorkloadItem::Job(j) => {
                debug!(job = %j.name, id, processor, "Emitting job");
                jobs.push_str(&format!("{INDENT}{}\n", job_statement(j, id, processor)));
            }
        }
    }

    Ok((tasks, jobs))
}

/// Position of the item's processor in resource declaration order.
fn resource_index(resources: &[Resource], item: &WorkloadItem) -> Result<usize, EmitError> {
    resources
        .iter()
        .position(|r| r.name == item.processor())
        .ok_or_else(|| EmitError::UnknownResource {
            item: item.name().to_string(),
            resource: item.processor().to_string(),
        })
}

fn task_statement(t: &TaskItem, id: usize, processor: usize) -> String {
    format!(
        "tasks.emplace_back({}, {id}, {}, {}, {}, {}, {processor}, {});",
        quote(&t.name),
        t.jitter,
        t.period,
        interval(&t.cost),
        t.deadline,
        t.priority,
    )
}

fn job_statement(j: &JobItem, id: usize, processor: usize) -> String {
    // The `0` is the job index within its task: a job is its own single instance.
    format!(
        "segments.emplace_back({}, {id}, 0, {}, {}, {}, {processor}, {});",
        quote(&j.name),
        interval(&j.arrival),
        interval(&j.cost),
        j.deadline,
        j.priority,
    )
}

fn interval(i: &Interval) -> String {
    format!("Interval<time>({}, {})", i.low, i.up)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
