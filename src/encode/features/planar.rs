//! Planar separating-decomposition feature: for 2-stack layouts of a planar
//! graph, forbids four consecutive edges (in the planar clockwise order
//! around any vertex) from all landing on the same page. Consumes the
//! per-vertex cyclic planar-edge order stored in `graph::PlanarData`.

use crate::error::{EncodeError, Result};
use crate::graph::Graph;
use crate::model::SatModel;

pub fn encode_separating_decomposition(model: &mut SatModel, graph: &Graph, stacks: usize) -> Result<()> {
    if stacks != 2 {
        return Err(EncodeError::parameter("planar_split feature", "requires exactly 2 stacks"));
    }
    let planar = graph
        .planar()
        .ok_or_else(|| EncodeError::input("planar_split feature", "requires planar data attached to the graph"))?;

    for (v, neighbors) in planar.clockwise_neighbors.iter().enumerate() {
        let cyclic_edges: Vec<usize> = neighbors
            .iter()
            .map(|&u| graph.find_edge_index(v, u).expect("clockwise neighbor implies an edge"))
            .collect();
        let d = cyclic_edges.len();
        if d < 4 {
            continue;
        }
        for start in 0..d {
            let window: Vec<usize> = (0..4).map(|k| cyclic_edges[(start + k) % d]).collect();
            for page in 0..2 {
                let clause = window.iter().map(|&e| model.get_page(e, page, false)).collect::<Result<Vec<_>>>()?;
                model.add_clause(clause);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::pages::encode_pages;
    use crate::graph::PlanarData;

    #[test]
    fn encodes_without_error_on_a_degree_four_vertex() {
        let mut g = Graph::new(5);
        for v in 1..5 {
            g.add_edge(0, v).unwrap();
        }
        g.set_planar(PlanarData {
            clockwise_neighbors: vec![vec![1, 2, 3, 4], vec![0], vec![0], vec![0], vec![0]],
            faces: vec![],
            outer_face: 0,
        });
        let mut model = SatModel::new();
        encode_pages(&mut model, 4, 2, &Default::default()).unwrap();
        encode_separating_decomposition(&mut model, &g, 2).unwrap();
        assert!(model.clause_count() > 0);
    }

    #[test]
    fn requires_planar_data() {
        let g = Graph::new(3);
        let mut model = SatModel::new();
        assert!(encode_separating_decomposition(&mut model, &g, 2).is_err());
    }
}
