/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Template assembler.
//!
//! The simulation engine is built from two C++ headers with fixed layouts.
//! Each layout is an ordered list of [`Line`]s; a [`Line::Slot`] marks an
//! insertion point that the emitters fill with generated text.
//!
//! ```text
//! SystemModelTemplate  ── TimeModel / Events / Resources / Tasks / Jobs ──►  systemModel.hpp
//! SchedulerTemplate    ── Body ───────────────────────────────────────────►  scheduler.hpp
//! ```
//!
//! A slot that was never filled renders as nothing.

mod text;

use std::collections::BTreeMap;

/// One line of a fixed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<S: 'static> {
    Text(&'static str),
    Slot(S),
}

/// Insertion points of the system-model header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModelSlot {
    TimeModel,
    Events,
    Resources,
    Tasks,
    Jobs,
}

/// Insertion points of the scheduler header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchedulerSlot {
    Body,
}

/// A fixed template plus the text assigned to its slots.
#[derive(Debug, Clone)]
pub struct Template<S: Ord + Copy + 'static> {
    lines: &'static [Line<S>],
    filled: BTreeMap<S, String>,
}

impl<S: Ord + Copy + 'static> Template<S> {
    fn new(lines: &'static [Line<S>]) -> Self {
        Self {
            lines,
            filled: BTreeMap::new(),
        }
    }

    /// Replace the text of `slot`.
    pub fn set(&mut self, slot: S, text: impl Into<String>) {
        self.filled.insert(slot, text.into());
    }

    /// Text currently held by `slot` (empty if unset).
    pub fn slot(&self, slot: S) -> &str {
        self.filled.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// Concatenate all lines, substituting slots.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines {
            match line {
                Line::Text(t) => out.push_str(t),
                Line::Slot(s) => out.push_str(self.slot(*s)),
            }
        }
        out
    }
}

/// The `systemModel.hpp` template.
pub type SystemModelTemplate = Template<ModelSlot>;

/// The `scheduler.hpp` template.
pub type SchedulerTemplate = Template<SchedulerSlot>;

impl SystemModelTemplate {
    pub fn system_model() -> Self {
        Template::new(text::SYSTEM_MODEL)
    }
}

impl SchedulerTemplate {
    pub fn scheduler() -> Self {
        Template::new(text::SCHEDULER)
    }

    /// Scheduler header with `body` as the user-defined decision procedure.
    pub fn with_body(body: impl Into<String>) -> Self {
        let mut t = Self::scheduler();
        t.set(SchedulerSlot::Body, body);
        t
    }
}

/// C++ string literal for `s`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
