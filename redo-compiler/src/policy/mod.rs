/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler policy compiler.
//!
//! Lowers the scheduler's command tree into the statement block that becomes
//! the body of `scheduler<Time>::callScheduler()`.
//!
//! ```text
//! commands ──► dispatch ─┬─ queue command ─────────┐
//!                        ├─ return ────────────────┤
//!                        ├─ declaration/assignment ┼──► body (one growing String)
//!                        ├─ if / else (recursive) ─┤
//!                        └─ use_file ──────────────┴──► External(path), stop
//! ```
//!
//! Statements are appended strictly in source order.  Nesting depth is
//! carried explicitly as the indentation prefix passed down each recursive
//! call; the body starts at two tabs and each `if` level adds one.
//!
//! Any [`PolicyError`] aborts the whole translation.

pub mod error;

mod condition;
mod operation;
mod queue;
mod variable;

pub use error::PolicyError;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::model::{Command, QueueCommand, QueueFunction, ReturnCommand, Scheduler};

// ── Target vocabulary ─────────────────────────────────────────────────────────

/// Ready-queue parameter of `callScheduler()`.
pub(crate) const READY_QUEUE: &str = "readyQueue";

/// Current-time parameter of `callScheduler()`.
pub(crate) const CURRENT_TIME: &str = "currentTime";

/// Indentation of top-level body statements.
const BODY_INDENT: &str = "\t\t";

// ── Result ────────────────────────────────────────────────────────────────────

/// Outcome of compiling one scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledPolicy {
    /// Statement block for the scheduler template's body slot.
    Generated(String),
    /// A `use_file` command was reached: the named file replaces the whole
    /// scheduler artifact.
    External(PathBuf),
}

/// Translate `scheduler` into its statement block.
pub fn compile(scheduler: &Scheduler) -> Result<CompiledPolicy, PolicyError> {
    let mut compiler = PolicyCompiler::default();

    match compiler.commands(&scheduler.commands, BODY_INDENT)? {
        Flow::Continue => {
            debug!(statements = compiler.statements, "Scheduler body generated");
            Ok(CompiledPolicy::Generated(compiler.body))
        }
        Flow::Substitute(path) => {
            info!(
                file = %path.display(),
                "use_file reached, scheduler will be imported from file"
            );
            Ok(CompiledPolicy::External(path))
        }
    }
}

// ── Compiler state ────────────────────────────────────────────────────────────

/// Whether translation of the remaining commands goes on.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Substitute(PathBuf),
}

/// Body builder threaded through the recursive translators.
#[derive(Debug, Default)]
struct PolicyCompiler {
    body: String,
    statements: usize,
}

impl PolicyCompiler {
    /// Translate `commands` in order at nesting prefix `indent`.
    fn commands(&mut self, commands: &[Command], indent: &str) -> Result<Flow, PolicyError> {
        for c in commands {
            match c {
                // Names only; the template fixes the runtime parameter names.
                Command::ReadyQueueDeclaration { .. } | Command::CurrentTimeDeclaration { .. } => {}
                Command::QueueCommand(q) => self.queue_command(q, indent)?,
                Command::Return(r) => self.return_command(r, indent)?,
                Command::VariableDeclaration(d) => self.declaration(d, indent)?,
                Command::VariableAssignment(a) => self.assignment(a, indent)?,
                Command::UseFile { file } => return Ok(Flow::Substitute(file.clone())),
                Command::IfStatement(s) => {
                    if let sub @ Flow::Substitute(_) = self.if_statement(s, indent)? {
                        return Ok(sub);
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Append one statement line.
    fn emit(&mut self, indent: &str, statement: impl AsRef<str>) {
        let statement = statement.as_ref();
        debug!(depth = indent.len(), statement, "emit");
        self.body.push_str(indent);
        self.body.push_str(statement);
        self.body.push('\n');
        self.statements += 1;
    }

    fn queue_command(&mut self, command: &QueueCommand, indent: &str) -> Result<(), PolicyError> {
        const CONTEXT: &str = "as a statement";

        let statement = match command {
            QueueCommand::Sort { key } => queue::sort(*key),
            QueueCommand::Call {
                function: f @ (QueueFunction::Length | QueueFunction::At { .. }),
            } => queue::accessor(f, CONTEXT)?,
            QueueCommand::Call { function } => {
                return Err(PolicyError::UnsupportedQueueFunction {
                    function: function.name(),
                    context: CONTEXT,
                })
            }
        };
        self.emit(indent, format!("{statement};"));
        Ok(())
    }

    fn return_command(&mut self, command: &ReturnCommand, indent: &str) -> Result<(), PolicyError> {
        let statement = match (&command.variable, &command.queue) {
            (Some(var), None) => format!("return {var};"),
            (None, Some(f)) => format!("return {};", queue::accessor(f, "in a return")?),
            (None, None) => "return std::nullopt;".to_string(),
            (Some(var), Some(_)) => {
                return Err(PolicyError::InvalidReturn {
                    variable: var.clone(),
                })
            }
        };
        self.emit(indent, statement);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Condition, Expression, IfStatement, Relation, SortKey, TypedVariable, Value,
        VariableAssignment, VariableDeclaration, VariableValue,
    };

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn body(commands: Vec<Command>) -> String {
        match compile(&Scheduler { commands }).unwrap() {
            CompiledPolicy::Generated(body) => body,
            other => panic!("expected generated body, got {other:?}"),
        }
    }

    fn compile_err(commands: Vec<Command>) -> PolicyError {
        compile(&Scheduler { commands }).unwrap_err()
    }

    fn sort(key: SortKey) -> Command {
        Command::QueueCommand(QueueCommand::Sort { key })
    }

    fn call(function: QueueFunction) -> Command {
        Command::QueueCommand(QueueCommand::Call { function })
    }

    fn ret_queue(f: QueueFunction) -> Command {
        Command::Return(ReturnCommand {
            variable: None,
            queue: Some(f),
        })
    }

    fn ret_var(name: &str) -> Command {
        Command::Return(ReturnCommand {
            variable: Some(name.into()),
            queue: None,
        })
    }

    fn ret_none() -> Command {
        Command::Return(ReturnCommand::default())
    }

    fn declare(name: &str, ty: &str, rhs: Option<Expression>) -> Command {
        Command::VariableDeclaration(VariableDeclaration {
            var: TypedVariable::new(name, ty),
            rhs,
        })
    }

    fn assign(target: &str, rhs: Expression) -> Command {
        Command::VariableAssignment(VariableAssignment {
            target: target.into(),
            rhs,
        })
    }

    fn if_else(condition: Condition, then_branch: Vec<Command>, else_branch: Vec<Command>) -> Command {
        Command::IfStatement(IfStatement {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn truthy(lhs: Expression) -> Condition {
        Condition {
            lhs,
            specifier: None,
            rhs: None,
        }
    }

    fn use_file(path: &str) -> Command {
        Command::UseFile { file: path.into() }
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    #[test]
    fn empty_scheduler_has_empty_body() {
        assert_eq!(body(vec![]), "");
    }

    #[test]
    fn declarations_of_queue_and_time_emit_nothing() {
        let out = body(vec![
            Command::ReadyQueueDeclaration { name: "rq".into() },
            Command::CurrentTimeDeclaration { name: "now".into() },
            ret_queue(QueueFunction::Front),
        ]);
        assert_eq!(out, "\t\treturn readyQueue.front();\n");
    }

    #[test]
    fn statements_keep_source_order() {
        let out = body(vec![
            sort(SortKey::Priority),
            declare("n", "int", Some(Expression::queue(QueueFunction::Length))),
            ret_var("n"),
        ]);
        assert_eq!(
            out,
            "\t\treadyQueue.sort(sortKey::priority);\n\
             \t\tint n = readyQueue.length();\n\
             \t\treturn n;\n"
        );
    }

    // ── Queue commands ────────────────────────────────────────────────────────

    #[test]
    fn queue_statements() {
        let out = body(vec![
            sort(SortKey::Deadline),
            sort(SortKey::Laxity),
            call(QueueFunction::Length),
            call(QueueFunction::At {
                index: VariableValue::Ref("i".into()),
            }),
            call(QueueFunction::At {
                index: VariableValue::Literal(Value::Int(1)),
            }),
        ]);
        assert_eq!(
            out,
            "\t\treadyQueue.sort(sortKey::deadline);\n\
             \t\treadyQueue.sort(sortKey::laxity, currentTime);\n\
             \t\treadyQueue.length();\n\
             \t\treadyQueue.at(i);\n\
             \t\treadyQueue.at(1);\n"
        );
    }

    #[test]
    fn queue_statement_with_string_index_fails() {
        let err = compile_err(vec![call(QueueFunction::At {
            index: VariableValue::Literal(Value::Text("x".into())),
        })]);
        assert!(matches!(err, PolicyError::IndexNotInteger { .. }));
    }

    #[test]
    fn bare_front_statement_is_unsupported() {
        let err = compile_err(vec![call(QueueFunction::Front)]);
        assert_eq!(
            err,
            PolicyError::UnsupportedQueueFunction {
                function: "front",
                context: "as a statement",
            }
        );
    }

    // ── Return ────────────────────────────────────────────────────────────────

    #[test]
    fn return_forms() {
        let out = body(vec![
            ret_var("chosen"),
            ret_queue(QueueFunction::Back),
            ret_queue(QueueFunction::At {
                index: VariableValue::Literal(Value::Int(0)),
            }),
            ret_none(),
        ]);
        assert_eq!(
            out,
            "\t\treturn chosen;\n\
             \t\treturn readyQueue.back();\n\
             \t\treturn readyQueue.at(0);\n\
             \t\treturn std::nullopt;\n"
        );
    }

    #[test]
    fn return_with_both_variable_and_queue_fails() {
        let err = compile_err(vec![Command::Return(ReturnCommand {
            variable: Some("x".into()),
            queue: Some(QueueFunction::Front),
        })]);
        assert_eq!(err, PolicyError::InvalidReturn { variable: "x".into() });
    }

    // ── Conditionals ──────────────────────────────────────────────────────────

    #[test]
    fn if_without_else() {
        let out = body(vec![if_else(
            truthy(Expression::queue(QueueFunction::Empty)),
            vec![ret_none()],
            vec![],
        )]);
        assert_eq!(
            out,
            "\t\tif (readyQueue.empty()) {\n\
             \t\t\treturn std::nullopt;\n\
             \t\t}\n"
        );
    }

    #[test]
    fn if_else_markers_match_outer_indentation() {
        let cond = Condition {
            lhs: Expression::CurrentTime,
            specifier: Some(Relation::Ge),
            rhs: Some(Expression::literal(Value::Int(10))),
        };
        let out = body(vec![if_else(
            cond,
            vec![ret_queue(QueueFunction::Front)],
            vec![ret_queue(QueueFunction::Back)],
        )]);
        assert_eq!(
            out,
            "\t\tif (currentTime >= 10) {\n\
             \t\t\treturn readyQueue.front();\n\
             \t\t} else {\n\
             \t\t\treturn readyQueue.back();\n\
             \t\t}\n"
        );
    }

    #[test]
    fn nested_ifs_indent_one_level_per_depth() {
        let inner = if_else(
            truthy(Expression::variable("b")),
            vec![ret_var("x")],
            vec![ret_var("y")],
        );
        let outer = if_else(
            truthy(Expression::variable("a")),
            vec![inner],
            vec![if_else(truthy(Expression::variable("c")), vec![ret_none()], vec![])],
        );
        let out = body(vec![outer, ret_none()]);
        assert_eq!(
            out,
            "\t\tif (a) {\n\
             \t\t\tif (b) {\n\
             \t\t\t\treturn x;\n\
             \t\t\t} else {\n\
             \t\t\t\treturn y;\n\
             \t\t\t}\n\
             \t\t} else {\n\
             \t\t\tif (c) {\n\
             \t\t\t\treturn std::nullopt;\n\
             \t\t\t}\n\
             \t\t}\n\
             \t\treturn std::nullopt;\n"
        );
    }

    #[test]
    fn deep_nesting_round_trips() {
        let mut command = ret_none();
        for _ in 0..6 {
            command = if_else(truthy(Expression::variable("x")), vec![command], vec![]);
        }
        let out = body(vec![command]);
        let deepest = format!("{}return std::nullopt;\n", "\t".repeat(8));
        assert!(out.contains(&deepest));
        assert!(out.ends_with("\t\t}\n"));
        assert_eq!(out.matches("if (x) {").count(), 6);
        assert_eq!(out.lines().filter(|l| l.trim() == "}").count(), 6);
    }

    // ── use_file ──────────────────────────────────────────────────────────────

    #[test]
    fn use_file_stops_translation() {
        let result = compile(&Scheduler {
            commands: vec![
                sort(SortKey::Deadline),
                use_file("custom.hpp"),
                // never translated, so its error never surfaces
                call(QueueFunction::Front),
            ],
        })
        .unwrap();
        assert_eq!(result, CompiledPolicy::External(PathBuf::from("custom.hpp")));
    }

    #[test]
    fn use_file_inside_branch_substitutes_whole_scheduler() {
        let result = compile(&Scheduler {
            commands: vec![
                if_else(
                    truthy(Expression::variable("a")),
                    vec![ret_none()],
                    vec![use_file("nested.hpp")],
                ),
                ret_none(),
            ],
        })
        .unwrap();
        assert_eq!(result, CompiledPolicy::External(PathBuf::from("nested.hpp")));
    }

    #[test]
    fn error_before_use_file_still_aborts() {
        let err = compile_err(vec![call(QueueFunction::Back), use_file("custom.hpp")]);
        assert!(matches!(err, PolicyError::UnsupportedQueueFunction { .. }));
    }

    // ── Variables (through dispatch) ──────────────────────────────────────────

    #[test]
    fn assignment_inside_branch_is_indented() {
        let out = body(vec![if_else(
            truthy(Expression::variable("a")),
            vec![assign("b", Expression::CurrentTime)],
            vec![],
        )]);
        assert_eq!(out, "\t\tif (a) {\n\t\t\tb = currentTime;\n\t\t}\n");
    }
}
