//! Symmetry breaker and custom-constraint encoder.
//!
//! Applies the default breaker only when the caller supplied no side
//! constraints and `apply_break_id` isn't set to skip it; otherwise turns
//! whatever side constraints are present into clauses.

use crate::constraints::Constraints;
use crate::error::{EncodeError, Result};
use crate::graph::Graph;
use crate::model::SatModel;
use crate::params::{Flavor, Parameters};
use std::collections::HashMap;

pub fn encode_symmetry_and_custom(
    model: &mut SatModel,
    graph: &Graph,
    params: &Parameters,
    constraints: &mut Constraints,
) -> Result<()> {
    if constraints.is_empty() && !params.apply_break_id {
        apply_default_symmetry(graph, params, constraints);
        encode_automorphism(model, graph)?;
    }
    encode_node_rel(model, &constraints.node_rel)?;
    encode_same_rel(model, &constraints.same_rel)?;
    encode_edge_pages(model, graph, &constraints.edge_pages, params.page_count())?;
    encode_same_page(model, &constraints.same_page)?;
    encode_distinct_page(model, &constraints.distinct_page)?;
    encode_group_edge_pages(model, &constraints.group_edge_pages)?;
    encode_node_tracks(model, graph, &constraints.node_tracks, params)?;
    Ok(())
}

/// Groups vertices `{3, ..., n-1}` by identical sorted adjacency lists and
/// pins a canonical spine order within each group of size > 1. Grounded in
/// `encodeAutomorphismConstraints`.
fn encode_automorphism(model: &mut SatModel, graph: &Graph) -> Result<()> {
    let n = graph.vertex_count();
    if n < 4 {
        return Ok(());
    }
    let mut groups: HashMap<Vec<usize>, Vec<usize>> = HashMap::new();
    for v in 3..n {
        let mut adj = graph.neighbors(v);
        adj.sort_unstable();
        groups.entry(adj).or_default().push(v);
    }
    for mut members in groups.into_values() {
        if members.len() < 2 {
            continue;
        }
        members.sort_unstable();
        for w in members.windows(2) {
            model.add_clause(vec![model.get_rel(w[0], w[1], true)?]);
        }
    }
    Ok(())
}

fn apply_default_symmetry(graph: &Graph, params: &Parameters, constraints: &mut Constraints) {
    let n = graph.vertex_count();
    let first = constraints.first_node;
    for v in 0..n {
        if v != first {
            constraints.node_rel.push((first, v));
        }
    }

    let pin_one_two = n >= 3 && first != 1 && first != 2;

    match params.flavor {
        Flavor::Stack => {
            if pin_one_two {
                constraints.node_rel.push((1, 2));
            }
            if !params.dispersible {
                if graph.edge_count() >= 1 {
                    constraints.edge_pages.insert(0, vec![0]);
                }
                if graph.edge_count() >= 2 {
                    let pages = if params.stacks >= 2 { vec![0, 1] } else { vec![0] };
                    constraints.edge_pages.insert(1, pages);
                }
            }
        }
        Flavor::Queue => {
            if pin_one_two {
                constraints.node_rel.push((1, 2));
            }
            if !params.dispersible {
                if graph.edge_count() >= 1 {
                    constraints.edge_pages.insert(0, vec![0]);
                }
                if graph.edge_count() >= 2 {
                    let pages = if params.queues >= 2 { vec![0, 1] } else { vec![0] };
                    constraints.edge_pages.insert(1, pages);
                }
            }
        }
        Flavor::Track => {
            if pin_one_two {
                constraints.node_rel.push((1, 2));
            }
            for v in 0..n.min(params.tracks) {
                constraints.node_tracks.insert(v, (0..=v).collect());
            }
        }
        // Pages of different types are not interchangeable in a mixed
        // layout, so no edge can be pinned to a page without presupposing
        // its type. Only the spine pin applies.
        Flavor::Mixed | Flavor::MixedPages => {
            if pin_one_two {
                constraints.node_rel.push((1, 2));
            }
        }
    }
}

fn encode_node_rel(model: &mut SatModel, node_rel: &[(usize, usize)]) -> Result<()> {
    for &(i, j) in node_rel {
        model.add_clause(vec![model.get_rel(i, j, true)?]);
    }
    Ok(())
}

fn encode_same_rel(model: &mut SatModel, same_rel: &[((usize, usize), (usize, usize))]) -> Result<()> {
    for &((a, b), (c, d)) in same_rel {
        model.add_clause(vec![model.get_rel(a, b, false)?, model.get_rel(c, d, true)?]);
        model.add_clause(vec![model.get_rel(c, d, false)?, model.get_rel(a, b, true)?]);
    }
    Ok(())
}

fn encode_edge_pages(
    model: &mut SatModel,
    graph: &Graph,
    edge_pages: &HashMap<usize, Vec<usize>>,
    page_count: usize,
) -> Result<()> {
    for (&e, pages) in edge_pages {
        if e >= graph.edge_count() {
            return Err(EncodeError::constraint("custom constraints", format!("edge index {e} out of range")));
        }
        if pages.is_empty() || pages.iter().any(|&p| p >= page_count) {
            return Err(EncodeError::constraint("custom constraints", format!("invalid page set for edge {e}: {pages:?}")));
        }
        let clause = pages.iter().map(|&p| model.get_page(e, p, true)).collect::<Result<Vec<_>>>()?;
        model.add_clause(clause);
    }
    Ok(())
}

fn encode_same_page(model: &mut SatModel, same_page: &[(usize, usize)]) -> Result<()> {
    for &(e1, e2) in same_page {
        model.add_clause(vec![model.get_same_page(e1, e2, true)?]);
    }
    Ok(())
}

fn encode_distinct_page(model: &mut SatModel, distinct_page: &[(usize, usize)]) -> Result<()> {
    for &(e1, e2) in distinct_page {
        model.add_clause(vec![model.get_same_page(e1, e2, false)?]);
    }
    Ok(())
}

/// `(k, edges)` with `k ∈ {1, 2}`: the edges occupy at most `k` distinct
/// pages. `k == 1` pins every pair to the same page; `k == 2` imposes a
/// pigeonhole over every triple (at least two of any three must share a
/// page).
fn encode_group_edge_pages(model: &mut SatModel, groups: &[(usize, Vec<usize>)]) -> Result<()> {
    for (k, edges) in groups {
        match k {
            1 => {
                for i in 0..edges.len() {
                    for j in (i + 1)..edges.len() {
                        model.add_clause(vec![model.get_same_page(edges[i], edges[j], true)?]);
                    }
                }
            }
            2 => {
                if edges.len() <= 2 {
                    continue;
                }
                for i in 0..edges.len() {
                    for j in (i + 1)..edges.len() {
                        for l in (j + 1)..edges.len() {
                            model.add_clause(vec![
                                model.get_same_page(edges[i], edges[j], true)?,
                                model.get_same_page(edges[i], edges[l], true)?,
                                model.get_same_page(edges[j], edges[l], true)?,
                            ]);
                        }
                    }
                }
            }
            other => {
                return Err(EncodeError::constraint(
                    "custom constraints",
                    format!("group_edge_pages only supports k in {{1, 2}}, got {other}"),
                ));
            }
        }
    }
    Ok(())
}

fn encode_node_tracks(
    model: &mut SatModel,
    graph: &Graph,
    node_tracks: &HashMap<usize, Vec<usize>>,
    params: &Parameters,
) -> Result<()> {
    for (&v, tracks) in node_tracks {
        if v >= graph.vertex_count() {
            return Err(EncodeError::constraint("custom constraints", format!("vertex index {v} out of range")));
        }
        if tracks.is_empty() || tracks.iter().any(|&t| t >= params.tracks) {
            return Err(EncodeError::constraint("custom constraints", format!("invalid track set for vertex {v}: {tracks:?}")));
        }
        let clause = tracks.iter().map(|&t| model.get_track(v, t, true)).collect::<Result<Vec<_>>>()?;
        model.add_clause(clause);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::order::encode_order;
    use crate::encode::pages::encode_pages;

    #[test]
    fn default_symmetry_pins_first_node_and_edge_zero() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        let params = Parameters { flavor: Flavor::Stack, stacks: 2, ..Parameters::default() };
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        encode_pages(&mut model, 2, 2, &Default::default()).unwrap();
        let mut constraints = Constraints::new();
        encode_symmetry_and_custom(&mut model, &g, &params, &mut constraints).unwrap();
        assert!(!constraints.node_rel.is_empty());
        assert_eq!(constraints.edge_pages.get(&0), Some(&vec![0]));
    }

    #[test]
    fn custom_node_rel_bypasses_default_symmetry() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        let params = Parameters::default();
        let mut model = SatModel::new();
        encode_order(&mut model, 3).unwrap();
        encode_pages(&mut model, 1, 1, &Default::default()).unwrap();
        let mut constraints = Constraints::new();
        constraints.node_rel.push((2, 0));
        encode_symmetry_and_custom(&mut model, &g, &params, &mut constraints).unwrap();
        assert_eq!(constraints.node_rel, vec![(2, 0)]);
    }

    #[test]
    fn queue_default_symmetry_pins_spine_and_edge_zero() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        let params = Parameters { flavor: Flavor::Queue, queues: 2, ..Parameters::default() };
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        encode_pages(&mut model, 2, 2, &Default::default()).unwrap();
        let mut constraints = Constraints::new();
        encode_symmetry_and_custom(&mut model, &g, &params, &mut constraints).unwrap();
        assert!(constraints.node_rel.contains(&(1, 2)));
        assert_eq!(constraints.edge_pages.get(&0), Some(&vec![0]));
    }

    #[test]
    fn mixed_default_symmetry_pins_spine_only() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        let params = Parameters { flavor: Flavor::Mixed, stacks: 1, queues: 1, ..Parameters::default() };
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        encode_pages(&mut model, 2, 2, &Default::default()).unwrap();
        let mut constraints = Constraints::new();
        encode_symmetry_and_custom(&mut model, &g, &params, &mut constraints).unwrap();
        assert!(constraints.node_rel.contains(&(1, 2)));
        assert!(constraints.edge_pages.is_empty());
    }
}
