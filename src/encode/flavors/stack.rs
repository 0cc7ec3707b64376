//! Stack layout: no two edges on the same page may cross.

use crate::encode::flavors::common::{crossing_quadruples, cross_clause, edges_share_endpoint};
use crate::encode::order::encode_order;
use crate::encode::pages::encode_pages;
use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;
use crate::params::Parameters;

pub fn encode(model: &mut SatModel, graph: &Graph, params: &Parameters, multi_page: &std::collections::HashSet<usize>) -> Result<()> {
    encode_order(model, graph.vertex_count())?;
    encode_pages(model, graph.edge_count(), params.page_count(), multi_page)?;

    let edges = graph.edges();
    for &(i, e1) in &edges {
        for &(j, e2) in &edges {
            if j >= i {
                break;
            }
            if edges_share_endpoint(e1, e2) {
                continue;
            }
            for (a, b, c, d) in crossing_quadruples(e1, e2) {
                model.add_clause(cross_clause(model, j, i, a, b, c, d)?);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Flavor;

    #[test]
    fn k4_on_two_stacks_has_no_self_contradicting_unit_clauses() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Stack, stacks: 2, ..Parameters::default() };
        let mut model = SatModel::new();
        encode(&mut model, &g, &params, &Default::default()).unwrap();
        assert!(model.clause_count() > 0);
        assert!(model.clauses.clauses().iter().all(|c| c.len() > 1 || !c.is_empty()));
    }
}
