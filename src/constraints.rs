//! Side-channel constraints: caller-supplied extra facts layered on top of a
//! `Graph` before encoding. Required spine-order relations, page/track
//! restrictions, and grouping constraints a caller wants honored alongside
//! the structural layout rules.

use std::collections::{HashMap, HashSet};

/// A required spine-order relation: vertex `.0` must precede vertex `.1`.
pub type NodeRel = (usize, usize);

/// Two `rel` facts whose truth values must agree.
pub type SameRel = ((usize, usize), (usize, usize));

/// Extra, caller-supplied facts layered on top of a `Graph`. Every field
/// defaults empty; an encoding run with no custom constraints falls back to
/// the default symmetry breaker.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Vertex chosen to precede all others in the default stack symmetry
    /// breaker; ignored once any custom constraint below is non-empty.
    pub first_node: usize,
    pub node_rel: Vec<NodeRel>,
    pub same_rel: Vec<SameRel>,
    /// Edge index -> allowed page set.
    pub edge_pages: HashMap<usize, Vec<usize>>,
    pub same_page: Vec<(usize, usize)>,
    pub distinct_page: Vec<(usize, usize)>,
    /// `(k, edges)`: the listed edges must occupy at most `k` distinct
    /// pages; only `k ∈ {1, 2}` is supported.
    pub group_edge_pages: Vec<(usize, Vec<usize>)>,
    /// Vertex index -> allowed track set (`Track` flavor only).
    pub node_tracks: HashMap<usize, Vec<usize>>,
    /// Edges allowed to span more than one page.
    pub multi_page: HashSet<usize>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no custom constraint has been supplied, i.e. the default
    /// symmetry breaker should run.
    pub fn is_empty(&self) -> bool {
        self.node_rel.is_empty()
            && self.same_rel.is_empty()
            && self.edge_pages.is_empty()
            && self.same_page.is_empty()
            && self.distinct_page.is_empty()
            && self.group_edge_pages.is_empty()
            && self.node_tracks.is_empty()
    }
}
