//! Variable registry: allocates and looks up SAT variables by structural key.
//!
//! The `Rel` key normalizes its operand pair and flips polarity when the
//! operands were swapped, since "i precedes j" and "j precedes i" are
//! negations of each other.

use crate::error::{EncodeError, Result};
use std::collections::HashMap;

/// A signed DIMACS literal: positive means "this variable is true".
pub type Literal = i32;

/// A structural key identifying one SAT variable. Two equal keys (after the
/// normalization each constructor performs) always resolve to the same
/// variable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKey {
    /// Spine-order relation between two vertices, `i < j`. The only family
    /// whose polarity flips when the key is normalized: `rel(i, j, true)`
    /// and `rel(j, i, false)` name the same literal.
    Rel(usize, usize),
    /// Edge `e` is on page `p`.
    Page(usize, usize),
    /// Vertex `v` is on track `t`.
    Track(usize, usize),
    /// Derived "edges e1 < e2 share a page" variable.
    SamePage(usize, usize),
    /// Derived "vertices v1 < v2 share a track" variable (forward
    /// implication only, see `encode::tracks`).
    SameTrack(usize, usize),
    /// Directed adjacency helper variable for the `adjacent` feature:
    /// "i is adjacent to j", not normalized (asymmetric).
    Adj(usize, usize),
    /// Per-page type selector for `MixedPages` (`true` = stack page).
    PageType(usize),
    /// Tree father-direction variable: edge `e` on page `p`, `side` selects
    /// which endpoint is the parent (`0` = first endpoint, `1` = second).
    Father(usize, usize, usize),
    /// Tree ancestor variable: on page `p`, vertex `i` is an ancestor of
    /// vertex `j`. Not normalized: `Ancestor(p, i, j)` and `Ancestor(p, j, i)`
    /// are distinct variables related by an explicit antisymmetry clause.
    Ancestor(usize, usize, usize),
    /// Vertex `v` is a tree root on page `p`.
    Root(usize, usize),
    /// Vertex `v` has at least one incident edge on page `p` (local-`ℓ`).
    VertexPage(usize, usize),
}

/// Allocates and looks up SAT variables by structural key.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    next_id: u32,
    vars: HashMap<VarKey, u32>,
}

fn signed(id: u32, positive: bool) -> Literal {
    if positive {
        id as Literal
    } else {
        -(id as Literal)
    }
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var_count(&self) -> u32 {
        self.next_id
    }

    /// Allocates a fresh variable id with no associated key. Used by
    /// callers that manage their own bookkeeping outside `VarKey`.
    pub fn fresh(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn insert(&mut self, key: VarKey, component: &'static str) -> Result<u32> {
        if self.vars.contains_key(&key) {
            return Err(EncodeError::internal(component, format!("duplicate variable key {key:?}")));
        }
        let id = self.fresh();
        self.vars.insert(key, id);
        Ok(id)
    }

    fn lookup(&self, key: &VarKey, component: &'static str) -> Result<u32> {
        self.vars
            .get(key)
            .copied()
            .ok_or_else(|| EncodeError::internal(component, format!("missing variable key {key:?}")))
    }

    /// Normalizes `(i, j)` to `(min, max)`; for the `Rel` family (and only
    /// that family) swapping the key also flips the requested polarity,
    /// since `rel(i, j)` and `rel(j, i)` are logical negations of one
    /// another, not independent facts.
    fn normalize_rel(i: usize, j: usize, positive: bool) -> (VarKey, bool) {
        if i < j {
            (VarKey::Rel(i, j), positive)
        } else {
            (VarKey::Rel(j, i), !positive)
        }
    }

    fn normalize_pair(a: usize, b: usize, make: fn(usize, usize) -> VarKey) -> VarKey {
        if a < b {
            make(a, b)
        } else {
            make(b, a)
        }
    }

    pub fn add_rel(&mut self, i: usize, j: usize) -> Result<()> {
        if i >= j {
            return Err(EncodeError::internal("order encoder", format!("add_rel requires i < j, got ({i}, {j})")));
        }
        self.insert(VarKey::Rel(i, j), "order encoder").map(|_| ())
    }

    pub fn get_rel(&self, i: usize, j: usize, positive: bool) -> Result<Literal> {
        if i == j {
            return Err(EncodeError::internal("order encoder", format!("rel is undefined for i == j == {i}")));
        }
        let (key, positive) = Self::normalize_rel(i, j, positive);
        Ok(signed(self.lookup(&key, "order encoder")?, positive))
    }

    pub fn add_page(&mut self, edge: usize, page: usize) -> Result<()> {
        self.insert(VarKey::Page(edge, page), "page encoder").map(|_| ())
    }

    pub fn get_page(&self, edge: usize, page: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Page(edge, page), "page encoder")?, positive))
    }

    pub fn add_track(&mut self, vertex: usize, track: usize) -> Result<()> {
        self.insert(VarKey::Track(vertex, track), "track encoder").map(|_| ())
    }

    pub fn get_track(&self, vertex: usize, track: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Track(vertex, track), "track encoder")?, positive))
    }

    pub fn add_same_page(&mut self, e1: usize, e2: usize) -> Result<()> {
        if e1 == e2 {
            return Err(EncodeError::internal("page encoder", "same_page requires two distinct edges"));
        }
        let key = Self::normalize_pair(e1, e2, VarKey::SamePage);
        self.insert(key, "page encoder").map(|_| ())
    }

    pub fn get_same_page(&self, e1: usize, e2: usize, positive: bool) -> Result<Literal> {
        let key = Self::normalize_pair(e1, e2, VarKey::SamePage);
        Ok(signed(self.lookup(&key, "page encoder")?, positive))
    }

    pub fn add_same_track(&mut self, v1: usize, v2: usize) -> Result<()> {
        if v1 == v2 {
            return Err(EncodeError::internal("track encoder", "same_track requires two distinct vertices"));
        }
        let key = Self::normalize_pair(v1, v2, VarKey::SameTrack);
        self.insert(key, "track encoder").map(|_| ())
    }

    pub fn get_same_track(&self, v1: usize, v2: usize, positive: bool) -> Result<Literal> {
        let key = Self::normalize_pair(v1, v2, VarKey::SameTrack);
        Ok(signed(self.lookup(&key, "track encoder")?, positive))
    }

    pub fn add_adj(&mut self, i: usize, j: usize) -> Result<()> {
        self.insert(VarKey::Adj(i, j), "adjacency encoder").map(|_| ())
    }

    pub fn get_adj(&self, i: usize, j: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Adj(i, j), "adjacency encoder")?, positive))
    }

    pub fn add_page_type(&mut self, page: usize) -> Result<()> {
        self.insert(VarKey::PageType(page), "mixed-pages encoder").map(|_| ())
    }

    pub fn get_page_type(&self, page: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::PageType(page), "mixed-pages encoder")?, positive))
    }

    pub fn add_father(&mut self, page: usize, edge: usize, side: usize) -> Result<()> {
        self.insert(VarKey::Father(page, edge, side), "tree encoder").map(|_| ())
    }

    pub fn get_father(&self, page: usize, edge: usize, side: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Father(page, edge, side), "tree encoder")?, positive))
    }

    pub fn add_ancestor(&mut self, page: usize, i: usize, j: usize) -> Result<()> {
        self.insert(VarKey::Ancestor(page, i, j), "tree encoder").map(|_| ())
    }

    pub fn get_ancestor(&self, page: usize, i: usize, j: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Ancestor(page, i, j), "tree encoder")?, positive))
    }

    pub fn add_root(&mut self, page: usize, vertex: usize) -> Result<()> {
        self.insert(VarKey::Root(page, vertex), "tree encoder").map(|_| ())
    }

    pub fn get_root(&self, page: usize, vertex: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::Root(page, vertex), "tree encoder")?, positive))
    }

    pub fn add_vertex_page(&mut self, vertex: usize, page: usize) -> Result<()> {
        self.insert(VarKey::VertexPage(vertex, page), "local encoder").map(|_| ())
    }

    pub fn get_vertex_page(&self, vertex: usize, page: usize, positive: bool) -> Result<Literal> {
        Ok(signed(self.lookup(&VarKey::VertexPage(vertex, page), "local encoder")?, positive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_lookup_flips_polarity_on_swap() {
        let mut reg = VariableRegistry::new();
        reg.add_rel(1, 3).unwrap();
        let a = reg.get_rel(1, 3, true).unwrap();
        let b = reg.get_rel(3, 1, false).unwrap();
        assert_eq!(a, b);
        let c = reg.get_rel(3, 1, true).unwrap();
        assert_eq!(c, -a);
    }

    #[test]
    fn same_page_is_symmetric_without_flip() {
        let mut reg = VariableRegistry::new();
        reg.add_same_page(2, 5).unwrap();
        let a = reg.get_same_page(2, 5, true).unwrap();
        let b = reg.get_same_page(5, 2, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_key_is_an_error() {
        let mut reg = VariableRegistry::new();
        reg.add_rel(0, 1).unwrap();
        assert!(reg.add_rel(0, 1).is_err());
        assert!(reg.add_rel(1, 0).is_err());
    }

    #[test]
    fn missing_key_is_an_error() {
        let reg = VariableRegistry::new();
        assert!(reg.get_rel(0, 1, true).is_err());
    }

    #[test]
    fn ancestor_keys_are_directional() {
        let mut reg = VariableRegistry::new();
        reg.add_ancestor(0, 1, 2).unwrap();
        assert!(reg.get_ancestor(0, 2, 1, true).is_err());
        assert!(reg.get_ancestor(0, 1, 2, true).is_ok());
    }
}
