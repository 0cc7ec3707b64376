//! Trees feature: forces every page to induce a forest, via an explicit
//! father/ancestor/root encoding.
//!
//! `encode_trees` takes a fast path for maximal bipartite planar graphs on
//! two pages: it assigns each page by a 2-coloring of the graph instead of
//! solving for father/ancestor relations, since on exactly two pages that
//! coloring is forced anyway. This is a pure optimization. Both paths
//! produce an equisatisfiable encoding, so it is not a separately
//! user-visible knob.

use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;
use itertools::Itertools;

pub fn encode_trees(model: &mut SatModel, graph: &Graph, page_count: usize) -> Result<()> {
    let n = graph.vertex_count();
    let m = graph.edge_count();
    if page_count == 2 && m == 2 * n.saturating_sub(2) && n >= 2 {
        if let Some(bipartition) = find_bipartition(graph) {
            return encode_alt_trees(model, graph, &bipartition);
        }
    }
    encode_general(model, graph, page_count)
}

/// BFS 2-coloring of `graph`, isolated vertices assigned to balance the two
/// sides. Returns `None` if the graph is not bipartite.
fn find_bipartition(graph: &Graph) -> Option<Vec<bool>> {
    let n = graph.vertex_count();
    let mut color = vec![None; n];
    let mut counts = [0usize, 0];
    for start in 0..n {
        if color[start].is_some() {
            continue;
        }
        color[start] = Some(false);
        counts[0] += 1;
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            let cv = color[v].unwrap();
            for u in graph.neighbors(v) {
                match color[u] {
                    None => {
                        color[u] = Some(!cv);
                        counts[(!cv) as usize] += 1;
                        queue.push_back(u);
                    }
                    Some(cu) if cu == cv => return None,
                    Some(_) => {}
                }
            }
        }
    }
    Some(color.into_iter().map(|c| c.unwrap_or(false)).collect())
}

/// Assigns each edge to the page named by its lower-indexed-color endpoint;
/// a maximal bipartite planar graph's unique planar embedding forces this
/// choice anyway, so no father/ancestor search is needed.
fn encode_alt_trees(model: &mut SatModel, graph: &Graph, bipartition: &[bool]) -> Result<()> {
    for (e, (u, _)) in graph.edges() {
        let page = if bipartition[u] { 0 } else { 1 };
        model.add_clause(vec![model.get_page(e, page, true)?]);
    }
    Ok(())
}

fn encode_general(model: &mut SatModel, graph: &Graph, page_count: usize) -> Result<()> {
    let n = graph.vertex_count();
    let edges = graph.edges();

    for p in 0..page_count {
        for &(e, _) in &edges {
            model.add_father(p, e, 0)?;
            model.add_father(p, e, 1)?;
        }
        for v in 0..n {
            model.add_root(p, v)?;
        }
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    model.add_ancestor(p, i, j)?;
                }
            }
        }
    }

    for p in 0..page_count {
        for &(e, (u, v)) in &edges {
            model.add_clause(vec![model.get_page(e, p, true)?, model.get_father(p, e, 0, false)?]);
            model.add_clause(vec![model.get_page(e, p, true)?, model.get_father(p, e, 1, false)?]);
            model.add_clause(vec![
                model.get_page(e, p, false)?,
                model.get_father(p, e, 0, true)?,
                model.get_father(p, e, 1, true)?,
            ]);
            model.add_clause(vec![
                model.get_page(e, p, false)?,
                model.get_father(p, e, 0, false)?,
                model.get_father(p, e, 1, false)?,
            ]);
            model.add_clause(vec![model.get_father(p, e, 0, false)?, model.get_root(p, v, false)?]);
            model.add_clause(vec![model.get_father(p, e, 1, false)?, model.get_root(p, u, false)?]);
        }

        for v in 0..n {
            let incident = graph.incident_edges(v);
            for &witness in &incident {
                let mut clause = Vec::new();
                for &e in &incident {
                    let (eu, _) = graph.edge(e);
                    clause.push(if eu == v {
                        model.get_father(p, e, 1, true)?
                    } else {
                        model.get_father(p, e, 0, true)?
                    });
                }
                let (wu, _) = graph.edge(witness);
                clause.push(if wu == v {
                    model.get_father(p, witness, 0, false)?
                } else {
                    model.get_father(p, witness, 1, false)?
                });
                clause.push(model.get_root(p, v, true)?);
                model.add_clause(clause);
            }

            let mut no_child_clause = Vec::new();
            for &e in &incident {
                let (eu, _) = graph.edge(e);
                no_child_clause.push(if eu == v {
                    model.get_father(p, e, 0, true)?
                } else {
                    model.get_father(p, e, 1, true)?
                });
            }
            no_child_clause.push(model.get_root(p, v, false)?);
            model.add_clause(no_child_clause);

            for (&k, &l) in incident.iter().tuple_combinations() {
                let (ku, _) = graph.edge(k);
                let (lu, _) = graph.edge(l);
                model.add_clause(vec![
                    if ku == v { model.get_father(p, k, 1, false)? } else { model.get_father(p, k, 0, false)? },
                    if lu == v { model.get_father(p, l, 1, false)? } else { model.get_father(p, l, 0, false)? },
                ]);
            }
        }

        for &(e, (u, v)) in &edges {
            model.add_clause(vec![model.get_father(p, e, 0, false)?, model.get_ancestor(p, u, v, true)?]);
            model.add_clause(vec![model.get_father(p, e, 1, false)?, model.get_ancestor(p, v, u, true)?]);
        }

        for (j, k, l) in (0..n).tuple_combinations() {
            model.add_clause(vec![
                model.get_ancestor(p, j, k, false)?,
                model.get_ancestor(p, k, l, false)?,
                model.get_ancestor(p, j, l, true)?,
            ]);
            model.add_clause(vec![
                model.get_ancestor(p, j, l, false)?,
                model.get_ancestor(p, l, k, false)?,
                model.get_ancestor(p, j, k, true)?,
            ]);
            model.add_clause(vec![
                model.get_ancestor(p, k, j, false)?,
                model.get_ancestor(p, j, l, false)?,
                model.get_ancestor(p, k, l, true)?,
            ]);
            model.add_clause(vec![
                model.get_ancestor(p, k, l, false)?,
                model.get_ancestor(p, l, j, false)?,
                model.get_ancestor(p, k, j, true)?,
            ]);
            model.add_clause(vec![
                model.get_ancestor(p, l, j, false)?,
                model.get_ancestor(p, j, k, false)?,
                model.get_ancestor(p, l, k, true)?,
            ]);
            model.add_clause(vec![
                model.get_ancestor(p, l, k, false)?,
                model.get_ancestor(p, k, j, false)?,
                model.get_ancestor(p, l, j, true)?,
            ]);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                model.add_clause(vec![model.get_ancestor(p, i, j, false)?, model.get_ancestor(p, j, i, false)?]);
            }
        }

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                model.add_clause(vec![model.get_root(p, i, false)?, model.get_ancestor(p, j, i, false)?]);
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                model.add_clause(vec![model.get_root(p, i, false)?, model.get_root(p, j, false)?]);
            }
        }
    }
    Ok(())
}
