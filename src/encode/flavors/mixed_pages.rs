//! Mixed-pages layout: each of `mixed_pages` pages independently picks its
//! own type via a `page_type` variable (`true` = stack page, `false` = queue
//! page), generalizing the fixed stacks/queues split of the `mixed` flavor
//! to a per-page choice.

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
    let page_count = params.page_count();
    encode_order(model, graph.vertex_count())?;
    encode_pages(model, graph.edge_count(), page_count, multi_page)?;
    for p in 0..page_count {
        model.add_page_type(p)?;
    }

    let edges = graph.edges();
    for &(i, e1) in &edges {
        for &(j, e2) in &edges {
            if j >= i {
                break;
            }
            if edges_share_endpoint(e1, e2) {
                continue;
            }
            for p in 0..page_count {
                let page_guard = vec![model.get_page(j, p, false)?, model.get_page(i, p, false)?];

                for (a, b, c, d) in crossing_quadruples(e1, e2) {
                    let mut clause = page_guard.clone();
                    clause.push(model.get_page_type(p, false)?);
                    clause.extend(order_literals(model, a, b, c, d)?);
                    model.add_clause(clause);
                }
                for (a, b, c, d) in nesting_quadruples(e1, e2) {
                    let mut clause = page_guard.clone();
                    clause.push(model.get_page_type(p, true)?);
                    clause.extend(order_literals(model, a, b, c, d)?);
                    model.add_clause(clause);
                }
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
    fn encodes_without_error() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::MixedPages, mixed_pages: 2, ..Parameters::default() };
        let mut model = SatModel::new();
        encode(&mut model, &g, &params, &Default::default()).unwrap();
        assert!(model.clause_count() > 0);
    }
}
