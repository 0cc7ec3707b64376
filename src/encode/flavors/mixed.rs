//! Mixed layout: the first `stacks` pages behave as stack pages, the
//! remaining `queues` pages behave as queue pages.

use crate::encode::flavors::common::{crossing_quadruples, edges_share_endpoint, nesting_quadruples, order_literals};
use crate::encode::order::encode_order;
use crate::encode::pages::encode_pages;
use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;
use crate::params::Parameters;

pub fn encode(
    model: &mut SatModel,
    graph: &Graph,
    params: &Parameters,
    multi_page: &std::collections::HashSet<usize>,
) -> Result<()> {
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
            for p in 0..params.stacks {
                for (a, b, c, d) in crossing_quadruples(e1, e2) {
                    model.add_clause(page_guarded(model, j, i, p, order_literals(model, a, b, c, d)?)?);
                }
            }
            for p in params.stacks..(params.stacks + params.queues) {
                for (a, b, c, d) in nesting_quadruples(e1, e2) {
                    model.add_clause(page_guarded(model, j, i, p, order_literals(model, a, b, c, d)?)?);
                }
            }
        }
    }
    Ok(())
}

/// Prefixes `clause` with `page(e1,p,false) OR page(e2,p,false)`, so the
/// clause only bites when both edges actually share page `p`.
fn page_guarded(model: &SatModel, e1: usize, e2: usize, p: usize, mut clause: Vec<i32>) -> Result<Vec<i32>> {
    let mut guarded = vec![model.get_page(e1, p, false)?, model.get_page(e2, p, false)?];
    guarded.append(&mut clause);
    Ok(guarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Flavor;

    #[test]
    fn k4_mixed_one_stack_one_queue_encodes_without_error() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Mixed, stacks: 1, queues: 1, ..Parameters::default() };
        let mut model = SatModel::new();
        encode(&mut model, &g, &params, &Default::default()).unwrap();
        assert!(model.clause_count() > 0);
    }
}
