//! Dispersible feature: adjacent edges (sharing an endpoint) may never share
//! a page. Every page is a matching.

use crate::encode::flavors::common::edges_share_endpoint;
use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;

pub fn encode_dispersible(model: &mut SatModel, graph: &Graph) -> Result<()> {
    let edges = graph.edges();
    for &(i, e1) in &edges {
        for &(j, e2) in &edges {
            if j >= i {
                break;
            }
            if edges_share_endpoint(e1, e2) {
                model.add_clause(vec![model.get_same_page(j, i, false)?]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::pages::encode_pages;

    #[test]
    fn forbids_adjacent_edges_sharing_a_page() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let mut model = SatModel::new();
        encode_pages(&mut model, 2, 1, &Default::default()).unwrap();
        encode_dispersible(&mut model, &g).unwrap();
        // a single page forces both edges onto it, so the unit clause
        // forbidding that must be present.
        assert!(model.clauses.clauses().iter().any(|c| c.len() == 1));
    }
}
