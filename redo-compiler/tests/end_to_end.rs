/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! File-level compilation: model file in, two headers out.

use std::fs;
use std::path::Path;

use redo_compiler::{Compiler, CompilerConfig};
use tempfile::TempDir;

// ── Test helpers ──────────────────────────────────────────────────────────────

const SINGLE_TASK_MODEL: &str = r#"
time_model: discrete
events: [arrival, completion]
resources:
  - { name: p1, cores: 4 }
workloads:
  - { type: task, name: T1, jitter: 0, period: 100, cost: [2, 5], deadline: 100, processor: p1, priority: 1 }
scheduler:
  commands:
    - { kind: ready_queue_declaration, name: rq }
    - { kind: return, queue: { name: front } }
"#;

fn write_model(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn compiler_into(out: &Path) -> Compiler {
    Compiler::new(CompilerConfig {
        output_dir: out.to_path_buf(),
        ..Default::default()
    })
}

/// Lines between the user-defined marker and the trailing fallback return.
fn scheduler_body(scheduler: &str) -> String {
    let start = scheduler
        .find("// user defined scheduling algorithm\n")
        .expect("marker present")
        + "// user defined scheduling algorithm\n".len();
    let end = scheduler[start..]
        .rfind("\n\t\treturn std::nullopt;\n")
        .expect("fallback present")
        + start;
    scheduler[start..end].to_string()
}

// ── Generated artifacts ───────────────────────────────────────────────────────

#[test]
fn single_task_model_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_model(&dir, "model.yaml", SINGLE_TASK_MODEL);
    let out = dir.path().join("out");

    let written = compiler_into(&out).compile_file(&input).unwrap();

    let system_model = fs::read_to_string(&written.system_model).unwrap();
    assert!(system_model.contains("\ttypedef discreteTime time;\n"));
    assert!(system_model.contains("systemEvents = events<time>(false, true, true, {});"));
    assert_eq!(system_model.matches("processors.emplace_back(").count(), 1);
    assert!(system_model.contains("processors.emplace_back(\"p1\", 0, 4);"));
    assert_eq!(system_model.matches("tasks.emplace_back(").count(), 1);
    assert!(system_model
        .contains("tasks.emplace_back(\"T1\", 0, 0, 100, Interval<time>(2, 5), 100, 0, 1);"));
    assert!(!system_model.contains("segments.emplace_back("));

    let scheduler = fs::read_to_string(&written.scheduler).unwrap();
    assert_eq!(scheduler_body(&scheduler), "\t\treturn readyQueue.front();\n");
}

#[test]
fn json_model_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"{
        "resources": [ { "name": "cpu", "cores": 2 } ],
        "workloads": [
            { "type": "job", "name": "J1", "arrival": { "low": 0, "up": 10 },
              "cost": { "low": 1, "up": 3 }, "deadline": 50, "processor": "cpu", "priority": 2 }
        ],
        "scheduler": { "commands": [
            { "kind": "queue_command", "op": "sort", "key": "laxity" },
            { "kind": "return", "queue": { "name": "front" } }
        ] }
    }"#;
    let input = write_model(&dir, "model.json", json);

    let output = Compiler::default().check_file(&input).unwrap();
    assert!(output.system_model.contains(
        "segments.emplace_back(\"J1\", 0, 0, Interval<time>(0, 10), Interval<time>(1, 3), 50, 0, 2);"
    ));
    assert_eq!(
        scheduler_body(&output.scheduler),
        "\t\treadyQueue.sort(sortKey::laxity, currentTime);\n\t\treturn readyQueue.front();\n"
    );
}

#[test]
fn conditional_policy_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = r#"
resources: [ { name: p1, cores: 1 } ]
scheduler:
  commands:
    - { kind: current_time_declaration, name: now }
    - { kind: variable_declaration, var: { name: n, type: int },
        rhs: { kind: queue_function, function: { name: length } } }
    - kind: if_statement
      condition:
        lhs: { kind: variable_value, ref: n }
        specifier: ">"
        rhs: { kind: variable_value, value: 1 }
      then_branch:
        - { kind: queue_command, op: sort, key: deadline }
        - { kind: return, queue: { name: front } }
      else_branch:
        - { kind: return, queue: { name: back } }
"#;
    let input = write_model(&dir, "policy.yaml", yaml);
    let output = Compiler::default().check_file(&input).unwrap();

    assert_eq!(
        scheduler_body(&output.scheduler),
        "\t\tint n = readyQueue.length();\n\
         \t\tif (n > 1) {\n\
         \t\t\treadyQueue.sort(sortKey::deadline);\n\
         \t\t\treturn readyQueue.front();\n\
         \t\t} else {\n\
         \t\t\treturn readyQueue.back();\n\
         \t\t}\n"
    );
}

// ── use_file ──────────────────────────────────────────────────────────────────

#[test]
fn use_file_copies_external_scheduler_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let custom = "// hand-written scheduler\n#pragma once\n";
    fs::write(dir.path().join("custom.hpp"), custom).unwrap();

    let yaml = r#"
scheduler:
  commands:
    - { kind: queue_command, op: sort, key: priority }
    - { kind: use_file, file: custom.hpp }
    - { kind: return, queue: { name: back } }
"#;
    let input = write_model(&dir, "model.yaml", yaml);
    let out = dir.path().join("gen");

    let written = compiler_into(&out).compile_file(&input).unwrap();
    assert_eq!(fs::read_to_string(&written.scheduler).unwrap(), custom);
    assert!(fs::read_to_string(&written.system_model)
        .unwrap()
        .contains("namespace model {"));
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn validation_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = r#"
time_model: dense
events: [all]
scheduler:
  commands:
    - { kind: ready_queue_declaration, name: rq }
    - { kind: ready_queue_declaration, name: rq2 }
"#;
    let input = write_model(&dir, "bad.yaml", yaml);
    let out = dir.path().join("out");

    let err = compiler_into(&out).compile_file(&input).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("dense time model does not support all events"));
    assert!(msg.contains("only one ready queue is allowed"));
    assert!(!out.exists());
}

#[test]
fn translation_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = r#"
scheduler:
  commands:
    - { kind: variable_declaration, var: { name: j, type: int },
        rhs: { kind: queue_function, function: { name: front } } }
"#;
    let input = write_model(&dir, "bad.yaml", yaml);
    let out = dir.path().join("out");

    let err = compiler_into(&out).compile_file(&input).unwrap_err();
    assert!(format!("{err:#}").contains("cannot copy ready queue objects"));
    assert!(!out.exists());
}

#[test]
fn structurally_invalid_model_is_rejected_while_loading() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = r#"
scheduler:
  commands:
    - { kind: variable_assignment, ref: x, rhs: { kind: variable_value, ref: y, value: 1 } }
"#;
    let input = write_model(&dir, "bad.yaml", yaml);
    let err = Compiler::default().check_file(&input).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid model file"));
}
