//! Directed feature: turns a graph's attached edge-direction sequence into
//! `node_rel` side-channel facts, so a directed edge's tail must precede
//! its head on the spine. This is pure graph preprocessing, not a clause
//! generator. The resulting facts are merged into `Constraints::node_rel`
//! before the symmetry/custom-constraint pass turns them into clauses.

use crate::error::{EncodeError, Result};
use crate::graph::Graph;

pub fn derive_node_rel(graph: &Graph) -> Result<Vec<(usize, usize)>> {
    let direction = graph
        .direction()
        .ok_or_else(|| EncodeError::input("directed feature", "directed requires a direction sequence on the graph"))?;
    let mut node_rel = Vec::with_capacity(direction.len());
    for (e, (u, v)) in graph.edges() {
        node_rel.push(if direction[e] { (u, v) } else { (v, u) });
    }
    Ok(node_rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_edges_marked_false() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        g.set_direction(vec![false]).unwrap();
        assert_eq!(derive_node_rel(&g).unwrap(), vec![(1, 0)]);
    }

    #[test]
    fn requires_direction_sequence() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        assert!(derive_node_rel(&g).is_err());
    }
}
