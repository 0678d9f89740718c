/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Variable declarations and assignments.

use super::error::PolicyError;
use super::operation;
use super::{PolicyCompiler, CURRENT_TIME};
use crate::model::{Expression, VariableAssignment, VariableDeclaration, VariableValue};
use crate::template::quote;

impl PolicyCompiler {
    pub(super) fn declaration(
        &mut self,
        decl: &VariableDeclaration,
        indent: &str,
    ) -> Result<(), PolicyError> {
        let statement = declaration(decl)?;
        self.emit(indent, statement);
        Ok(())
    }

    pub(super) fn assignment(
        &mut self,
        assign: &VariableAssignment,
        indent: &str,
    ) -> Result<(), PolicyError> {
        let rhs = operation::term(&assign.rhs)?;
        self.emit(indent, format!("{} = {rhs};", assign.target));
        Ok(())
    }
}

fn declaration(decl: &VariableDeclaration) -> Result<String, PolicyError> {
    let var = &decl.var;

    let Some(rhs) = &decl.rhs else {
        return Ok(format!("{} {};", var.target_type(), var.name));
    };

    let init = match rhs {
        // The current time always has the engine's time type.
        Expression::CurrentTime => return Ok(format!("Time {} = {CURRENT_TIME};", var.name)),
        // A string-typed variable quotes whatever literal it is given.
        Expression::VariableValue(VariableValue::Literal(v)) if var.is_string() => {
            quote(&v.to_string())
        }
        Expression::VariableValue(VariableValue::Literal(v)) => v.to_string(),
        other => operation::term(other)?,
    };
    Ok(format!("{} {} = {init};", var.target_type(), var.name))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
