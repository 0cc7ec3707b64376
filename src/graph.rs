//! Graph model: vertices, edges, labels, directions, and planar data. A
//! thin wrapper around a `petgraph::graph::UnGraph`, plus the side
//! information the encoder needs that petgraph has no opinion about.

use crate::error::{EncodeError, Result};
use petgraph::graph::UnGraph;
use std::collections::HashSet;

/// Clockwise neighbor order per vertex, face list, and outer face index.
/// The planar embedding data a handful of flavor/feature encoders consume.
#[derive(Debug, Clone)]
pub struct PlanarData {
    /// `clockwise_neighbors[v]` lists the neighbors of `v` in clockwise order
    /// around the embedding.
    pub clockwise_neighbors: Vec<Vec<usize>>,
    /// Each face as a cyclic sequence of vertices.
    pub faces: Vec<Vec<usize>>,
    /// Index into `faces` of the outer face.
    pub outer_face: usize,
}

/// An undirected simple graph with `V = {0, ..., n-1}` and an ordered, stable
/// edge sequence. No self-loops, no duplicate edges.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
    labels: Option<Vec<String>>,
    direction: Option<Vec<bool>>,
    planar: Option<PlanarData>,
}

impl Graph {
    /// Creates a graph on `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        let mut inner = UnGraph::with_capacity(n, 0);
        for _ in 0..n {
            inner.add_node(());
        }
        Graph { inner, labels: None, direction: None, planar: None }
    }

    /// Inserts an edge `(u, v)`. Edge indices are assigned in insertion
    /// order and never change afterwards, matching the invariant that an
    /// edge's index is its position in `E`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<usize> {
        let n = self.vertex_count();
        if u >= n || v >= n {
            return Err(EncodeError::input("graph", format!("vertex out of range: ({u}, {v})")));
        }
        if u == v {
            return Err(EncodeError::input("graph", format!("self-loop at vertex {u}")));
        }
        if self.find_edge_index(u, v).is_some() {
            return Err(EncodeError::input("graph", format!("duplicate edge ({u}, {v})")));
        }
        let (a, b) = if u < v { (u, v) } else { (v, u) };
        let idx = self
            .inner
            .add_edge(petgraph::graph::NodeIndex::new(a), petgraph::graph::NodeIndex::new(b), ());
        Ok(idx.index())
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns the normalized `(u, v)` pair (`u < v`) for edge `index`.
    pub fn edge(&self, index: usize) -> (usize, usize) {
        let (a, b) = self
            .inner
            .edge_endpoints(petgraph::graph::EdgeIndex::new(index))
            .expect("edge index in range");
        (a.index(), b.index())
    }

    /// All edges as `(index, (u, v))` pairs, in insertion order.
    pub fn edges(&self) -> Vec<(usize, (usize, usize))> {
        (0..self.edge_count()).map(|i| (i, self.edge(i))).collect()
    }

    pub fn find_edge_index(&self, u: usize, v: usize) -> Option<usize> {
        self.inner
            .find_edge(petgraph::graph::NodeIndex::new(u), petgraph::graph::NodeIndex::new(v))
            .map(|e| e.index())
    }

    /// Incident edge indices of `v`, sorted.
    pub fn incident_edges(&self, v: usize) -> Vec<usize> {
        use petgraph::visit::EdgeRef;
        let mut edges: Vec<usize> = self
            .inner
            .edges(petgraph::graph::NodeIndex::new(v))
            .map(|e| e.id().index())
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.inner.neighbors(petgraph::graph::NodeIndex::new(v)).map(|n| n.index()).collect()
    }

    pub fn degree(&self, v: usize) -> usize {
        self.inner.neighbors(petgraph::graph::NodeIndex::new(v)).count()
    }

    /// Attaches a vertex-label bijection. Must cover every vertex exactly
    /// once and contain no duplicate labels.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.vertex_count() {
            return Err(EncodeError::input(
                "graph",
                format!("expected {} labels, got {}", self.vertex_count(), labels.len()),
            ));
        }
        let unique: HashSet<&String> = labels.iter().collect();
        if unique.len() != labels.len() {
            return Err(EncodeError::input("graph", "vertex labels are not a bijection (duplicates)"));
        }
        self.labels = Some(labels);
        Ok(())
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn label_of(&self, v: usize) -> String {
        match &self.labels {
            Some(labels) => labels[v].clone(),
            None => v.to_string(),
        }
    }

    /// Attaches a per-edge direction flag: `true` means the stored `(u, v)`
    /// order matches the caller's intended direction, `false` means it is
    /// reversed.
    pub fn set_direction(&mut self, direction: Vec<bool>) -> Result<()> {
        if direction.len() != self.edge_count() {
            return Err(EncodeError::input(
                "graph",
                format!("expected {} direction flags, got {}", self.edge_count(), direction.len()),
            ));
        }
        self.direction = Some(direction);
        Ok(())
    }

    pub fn direction(&self) -> Option<&[bool]> {
        self.direction.as_deref()
    }

    pub fn set_planar(&mut self, planar: PlanarData) {
        self.planar = Some(planar);
    }

    pub fn planar(&self) -> Option<&PlanarData> {
        self.planar.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_indices_follow_insertion_order() {
        let mut g = Graph::new(4);
        let e0 = g.add_edge(0, 1).unwrap();
        let e1 = g.add_edge(2, 3).unwrap();
        let e2 = g.add_edge(0, 2).unwrap();
        assert_eq!((e0, e1, e2), (0, 1, 2));
        assert_eq!(g.edge(0), (0, 1));
        assert_eq!(g.edge(2), (0, 2));
    }

    #[test]
    fn rejects_self_loop() {
        let mut g = Graph::new(2);
        assert!(g.add_edge(0, 0).is_err());
    }

    #[test]
    fn rejects_duplicate_edge() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        assert!(g.add_edge(1, 0).is_err());
    }

    #[test]
    fn normalizes_edge_order() {
        let mut g = Graph::new(2);
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.edge(0), (0, 1));
    }

    #[test]
    fn labels_must_be_bijective() {
        let mut g = Graph::new(2);
        assert!(g.set_labels(vec!["a".into(), "a".into()]).is_err());
        assert!(g.set_labels(vec!["a".into(), "b".into()]).is_ok());
    }

    #[test]
    fn incident_edges_sorted() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.incident_edges(1), vec![0, 1]);
    }
}
