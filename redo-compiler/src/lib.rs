/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! ReDo compiler backend
//!
//! Validates a parsed ReDo model and emits the two C++ headers consumed by
//! the discrete-event simulation engine.
//!
//! ```text
//! lib.rs
//! ├── model/      – parse-tree types + YAML/JSON loader
//! ├── validate/   – semantic rules checked before any emission
//! ├── emit/       – system-model emitter (time model, events, resources, workload)
//! ├── policy/     – scheduler command tree → callScheduler() body
//! ├── template/   – fixed header layouts with insertion slots
//! ├── config/     – output location configuration
//! ├── compiler    – pipeline driver and artifact writing
//! └── error       – top-level compile error
//! ```

pub mod compiler;
pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod policy;
pub mod template;
pub mod validate;

pub use compiler::{Artifacts, Compiler, Output, SchedulerArtifact, WrittenFiles};
pub use config::CompilerConfig;
pub use error::CompileError;
pub use model::Model;
