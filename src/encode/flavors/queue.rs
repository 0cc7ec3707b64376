//! Queue layout: no two edges on the same page may nest. Strict mode
//! additionally forbids a shared endpoint from sitting strictly left (or
//! strictly right) of both edges' other endpoints on a shared page; both
//! guards are emitted rather than just one (see DESIGN.md).

use crate::encode::flavors::common::{cross_clause, edges_share_endpoint, nesting_quadruples};
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
                if params.strict {
                    encode_strict_guard(model, j, e2, i, e1)?;
                }
                continue;
            }
            for (a, b, c, d) in nesting_quadruples(e1, e2) {
                model.add_clause(cross_clause(model, j, i, a, b, c, d)?);
            }
        }
    }
    Ok(())
}

/// Forbids the vertex shared by `e1`/`e2` from sitting strictly left of, or
/// strictly right of, both edges' other endpoints while the edges share a
/// page.
fn encode_strict_guard(
    model: &mut SatModel,
    e1_idx: usize,
    e1: (usize, usize),
    e2_idx: usize,
    e2: (usize, usize),
) -> Result<()> {
    let shared = if e1.0 == e2.0 || e1.0 == e2.1 { e1.0 } else { e1.1 };
    let x = if e1.0 == shared { e1.1 } else { e1.0 };
    let y = if e2.0 == shared { e2.1 } else { e2.0 };

    model.add_clause(vec![
        model.get_same_page(e1_idx, e2_idx, false)?,
        model.get_rel(shared, x, false)?,
        model.get_rel(shared, y, false)?,
    ]);
    model.add_clause(vec![
        model.get_same_page(e1_idx, e2_idx, false)?,
        model.get_rel(x, shared, false)?,
        model.get_rel(y, shared, false)?,
    ]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Flavor;

    #[test]
    fn p4_on_one_queue_encodes_without_error() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        let params = Parameters { flavor: Flavor::Queue, queues: 1, ..Parameters::default() };
        let mut model = SatModel::new();
        encode(&mut model, &g, &params, &Default::default()).unwrap();
        assert!(model.clause_count() > 0);
    }

    #[test]
    fn strict_mode_adds_guards_for_adjacent_edges() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let params = Parameters { flavor: Flavor::Queue, queues: 1, strict: true, ..Parameters::default() };
        let mut model = SatModel::new();
        let mut lax = SatModel::new();
        let lax_params = Parameters { strict: false, ..params.clone() };
        encode(&mut model, &g, &params, &Default::default()).unwrap();
        encode(&mut lax, &g, &lax_params, &Default::default()).unwrap();
        assert!(model.clause_count() > lax.clause_count());
    }
}
