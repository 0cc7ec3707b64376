//! Star feature: forces every page to be a star forest. Any two edges
//! sharing a page through a common vertex `v` must both have `v` as their
//! leftmost endpoint. Strictly stronger than the plain queue "no nesting"
//! constraint, and meant for queue-style pages.

use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;
use itertools::Itertools;

pub fn encode_star(model: &mut SatModel, graph: &Graph) -> Result<()> {
    let n = graph.vertex_count();
    for v in 0..n {
        let neighbors = graph.neighbors(v);
        for (&u, &w) in neighbors.iter().tuple_combinations() {
            let e1 = graph.find_edge_index(v, u).expect("neighbor implies edge");
            let e2 = graph.find_edge_index(v, w).expect("neighbor implies edge");

            model.add_clause(vec![
                model.get_rel(u, v, false)?,
                model.get_rel(v, w, false)?,
                model.get_same_page(e1, e2, false)?,
            ]);
            model.add_clause(vec![
                model.get_rel(w, v, false)?,
                model.get_rel(v, u, false)?,
                model.get_same_page(e1, e2, false)?,
            ]);
            model.add_clause(vec![
                model.get_rel(u, v, false)?,
                model.get_rel(w, v, false)?,
                model.get_same_page(e1, e2, false)?,
            ]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::order::encode_order;
    use crate::encode::pages::encode_pages;

    #[test]
    fn encodes_a_star_center_without_error() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 3).unwrap();
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        encode_pages(&mut model, 3, 1, &Default::default()).unwrap();
        encode_star(&mut model, &g).unwrap();
        assert!(model.clause_count() > 0);
    }
}
