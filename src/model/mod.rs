//! The SAT model: a `VariableRegistry` and a `ClauseBuilder` bundled behind
//! one facade so encoders don't have to thread both through every call.

pub mod clause;
pub mod registry;

pub use clause::{Assignment, Clause, ClauseBuilder, SatStatus, SolverResult, read_dimacs_result};
pub use registry::{Literal, VarKey, VariableRegistry};

use crate::error::Result;

#[derive(Debug, Default)]
pub struct SatModel {
    pub registry: VariableRegistry,
    pub clauses: ClauseBuilder,
}

impl SatModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var_count(&self) -> u32 {
        self.registry.var_count()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.clause_count()
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.add_clause(clause);
    }

    pub fn add_rel(&mut self, i: usize, j: usize) -> Result<()> {
        self.registry.add_rel(i, j)
    }
    pub fn get_rel(&self, i: usize, j: usize, positive: bool) -> Result<Literal> {
        self.registry.get_rel(i, j, positive)
    }

    pub fn add_page(&mut self, edge: usize, page: usize) -> Result<()> {
        self.registry.add_page(edge, page)
    }
    pub fn get_page(&self, edge: usize, page: usize, positive: bool) -> Result<Literal> {
        self.registry.get_page(edge, page, positive)
    }

    pub fn add_track(&mut self, vertex: usize, track: usize) -> Result<()> {
        self.registry.add_track(vertex, track)
    }
    pub fn get_track(&self, vertex: usize, track: usize, positive: bool) -> Result<Literal> {
        self.registry.get_track(vertex, track, positive)
    }

    pub fn add_same_page(&mut self, e1: usize, e2: usize) -> Result<()> {
        self.registry.add_same_page(e1, e2)
    }
    pub fn get_same_page(&self, e1: usize, e2: usize, positive: bool) -> Result<Literal> {
        self.registry.get_same_page(e1, e2, positive)
    }

    pub fn add_same_track(&mut self, v1: usize, v2: usize) -> Result<()> {
        self.registry.add_same_track(v1, v2)
    }
    pub fn get_same_track(&self, v1: usize, v2: usize, positive: bool) -> Result<Literal> {
        self.registry.get_same_track(v1, v2, positive)
    }

    pub fn add_adj(&mut self, i: usize, j: usize) -> Result<()> {
        self.registry.add_adj(i, j)
    }
    pub fn get_adj(&self, i: usize, j: usize, positive: bool) -> Result<Literal> {
        self.registry.get_adj(i, j, positive)
    }

    pub fn add_page_type(&mut self, page: usize) -> Result<()> {
        self.registry.add_page_type(page)
    }
    pub fn get_page_type(&self, page: usize, positive: bool) -> Result<Literal> {
        self.registry.get_page_type(page, positive)
    }

    pub fn add_father(&mut self, page: usize, edge: usize, side: usize) -> Result<()> {
        self.registry.add_father(page, edge, side)
    }
    pub fn get_father(&self, page: usize, edge: usize, side: usize, positive: bool) -> Result<Literal> {
        self.registry.get_father(page, edge, side, positive)
    }

    pub fn add_ancestor(&mut self, page: usize, i: usize, j: usize) -> Result<()> {
        self.registry.add_ancestor(page, i, j)
    }
    pub fn get_ancestor(&self, page: usize, i: usize, j: usize, positive: bool) -> Result<Literal> {
        self.registry.get_ancestor(page, i, j, positive)
    }

    pub fn add_root(&mut self, page: usize, vertex: usize) -> Result<()> {
        self.registry.add_root(page, vertex)
    }
    pub fn get_root(&self, page: usize, vertex: usize, positive: bool) -> Result<Literal> {
        self.registry.get_root(page, vertex, positive)
    }

    pub fn add_vertex_page(&mut self, vertex: usize, page: usize) -> Result<()> {
        self.registry.add_vertex_page(vertex, page)
    }
    pub fn get_vertex_page(&self, vertex: usize, page: usize, positive: bool) -> Result<Literal> {
        self.registry.get_vertex_page(vertex, page, positive)
    }
}
