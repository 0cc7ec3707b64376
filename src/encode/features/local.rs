//! Local-`ℓ` feature: bounds, per vertex, how many distinct pages its
//! incident edges may spread across. Derives a `vertex_page` indicator from
//! the edge/page variables, then a pigeonhole clause over every
//! `(ℓ+1)`-subset of pages a vertex could touch, and a companion pigeonhole
//! over every `(ℓ+1)`-subset of a vertex's incident edges forcing two of
//! them to share a page.

use crate::error::{EncodeError, Result};
use crate::graph::Graph;
use crate::model::SatModel;
use itertools::Itertools;

/// Vertices of degree above this are rejected: the edge-subset pigeonhole
/// clause is exponential in `min(degree, ℓ+1)` choose `ℓ+1` and stops being
/// a reasonable encoding well before this.
const MAX_DEGREE: usize = 40;

pub fn encode_local(model: &mut SatModel, graph: &Graph, page_count: usize, l: usize) -> Result<()> {
    let n = graph.vertex_count();
    for v in 0..n {
        let degree = graph.degree(v);
        if degree > MAX_DEGREE {
            return Err(EncodeError::parameter(
                "local encoder",
                format!("vertex {v} has degree {degree} > {MAX_DEGREE}, local-l is impractical here"),
            ));
        }
    }

    for v in 0..n {
        for p in 0..page_count {
            model.add_vertex_page(v, p)?;
        }
    }

    for v in 0..n {
        let incident = graph.incident_edges(v);
        for p in 0..page_count {
            let mut clause = vec![model.get_vertex_page(v, p, false)?];
            for &e in &incident {
                clause.push(model.get_page(e, p, true)?);
            }
            model.add_clause(clause);

            for &e in &incident {
                model.add_clause(vec![model.get_page(e, p, false)?, model.get_vertex_page(v, p, true)?]);
            }
        }

        if page_count > l {
            for subset in (0..page_count).combinations(l + 1) {
                let clause = subset.iter().map(|&p| model.get_vertex_page(v, p, false)).collect::<Result<Vec<_>>>()?;
                model.add_clause(clause);
            }
        }

        if incident.len() > l {
            for subset in incident.iter().copied().combinations(l + 1) {
                let mut clause = Vec::new();
                for pair in subset.iter().copied().combinations(2) {
                    clause.push(model.get_same_page(pair[0], pair[1], true)?);
                }
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

    #[test]
    fn encodes_without_error() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 3).unwrap();
        let mut model = SatModel::new();
        encode_pages(&mut model, 3, 2, &Default::default()).unwrap();
        encode_local(&mut model, &g, 2, 1).unwrap();
        assert!(model.clause_count() > 0);
    }

    #[test]
    fn rejects_excessive_degree() {
        let n = 42;
        let mut g = Graph::new(n);
        for v in 1..n {
            g.add_edge(0, v).unwrap();
        }
        let mut model = SatModel::new();
        encode_pages(&mut model, n - 1, 2, &Default::default()).unwrap();
        assert!(encode_local(&mut model, &g, 2, 1).is_err());
    }
}
