//! Clause builder and DIMACS I/O: the header line `p cnf <nvars> <nclauses>`,
//! one clause per line as space-separated signed integers terminated by
//! `0`, and a result reader for a solver's `s`/`v` lines.

use crate::error::{EncodeError, Result};
use crate::model::registry::Literal;
use std::io::{BufRead, Write};

pub type Clause = Vec<Literal>;

/// Accumulates CNF clauses and renders/parses the DIMACS wire format.
#[derive(Debug, Default)]
pub struct ClauseBuilder {
    clauses: Vec<Clause>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clause(&mut self, clause: Clause) {
        debug_assert!(!clause.is_empty(), "empty clause is trivially unsatisfiable");
        self.clauses.push(clause);
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Writes `p cnf <var_count> <clause_count>` followed by one line per
    /// clause, each terminated by a literal `0`.
    pub fn write_dimacs<W: Write>(&self, w: &mut W, var_count: u32) -> Result<()> {
        writeln!(w, "p cnf {} {}", var_count, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(w, "{} ", lit)?;
            }
            writeln!(w, "0")?;
        }
        Ok(())
    }
}

/// Outcome of a DIMACS result stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatStatus {
    Satisfiable,
    Unsatisfiable,
}

#[derive(Debug, Clone)]
pub struct SolverResult {
    pub status: SatStatus,
    pub assignment: Assignment,
}

/// Parses a solver's result stream: an `s SATISFIABLE`/`s UNSATISFIABLE`
/// line, and on the satisfiable branch, one or more `v` lines listing the
/// signed literal assignment terminated by a `0`.
pub fn read_dimacs_result<R: BufRead>(r: R, var_count: u32) -> Result<SolverResult> {
    let mut status = None;
    let mut assignment = Assignment::new();
    for line in r.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if let Some(rest) = line.strip_prefix('s') {
            let rest = rest.trim();
            status = Some(match rest {
                "SATISFIABLE" => SatStatus::Satisfiable,
                "UNSATISFIABLE" => SatStatus::Unsatisfiable,
                other => return Err(EncodeError::io("dimacs", format!("unrecognized status line: {other}"))),
            });
        } else if let Some(rest) = line.strip_prefix('v') {
            for tok in rest.split_whitespace() {
                let lit: i64 = tok
                    .parse()
                    .map_err(|_| EncodeError::io("dimacs", format!("malformed literal: {tok}")))?;
                if lit == 0 {
                    continue;
                }
                let var = lit.unsigned_abs() as u32;
                assignment.set(var, lit > 0);
            }
        } else {
            return Err(EncodeError::io("dimacs", format!("unrecognized result line: {line}")));
        }
    }
    let status = status.ok_or_else(|| EncodeError::io("dimacs", "result stream has no status line"))?;
    if status == SatStatus::Satisfiable && !assignment.is_total(var_count) {
        return Err(EncodeError::io(
            "dimacs",
            format!("satisfiable result assigns {} of {} variables", assignment.len(), var_count),
        ));
    }
    Ok(SolverResult { status, assignment })
}

/// A variable assignment, used both to verify a solver's reported
/// certificate and, in tests, to hand-check a candidate assignment against
/// generated clauses without running a solver.
#[derive(Debug, Clone, Default)]
pub struct Assignment(std::collections::HashMap<u32, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: u32, value: bool) {
        self.0.insert(var, value);
    }

    pub fn get(&self, var: u32) -> Option<bool> {
        self.0.get(&var).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_total(&self, var_count: u32) -> bool {
        self.0.len() as u32 == var_count
    }

    /// The truth value of a signed literal under this assignment.
    pub fn value_of(&self, lit: Literal) -> Option<bool> {
        self.get(lit.unsigned_abs()).map(|v| if lit > 0 { v } else { !v })
    }

    pub fn satisfies_clause(&self, clause: &[Literal]) -> bool {
        clause.iter().any(|&lit| self.value_of(lit) == Some(true))
    }

    pub fn satisfies(&self, clauses: &[Clause]) -> bool {
        clauses.iter().all(|c| self.satisfies_clause(c))
    }
}
