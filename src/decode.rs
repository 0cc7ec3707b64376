//! Decoder: turns a satisfying assignment back into a concrete layout.
//!
//! Produces the spine order, per-edge page set, and (for `Track`) per-vertex
//! track.

use crate::constraints::Constraints;
use crate::error::{EncodeError, Result};
use crate::graph::Graph;
use crate::model::{Assignment, SatModel};
use crate::params::{Flavor, Parameters};

#[derive(Debug, Clone)]
pub struct DecodedLayout {
    /// `order[pos]` is the vertex occupying spine position `pos`.
    pub order: Vec<usize>,
    /// `edge_pages[e]` lists every page edge `e` is on (more than one only
    /// when that edge is in `multi_page`).
    pub edge_pages: Vec<Vec<usize>>,
    /// Per-vertex track, `Track` flavor only.
    pub vertex_tracks: Option<Vec<usize>>,
}

pub fn decode(
    model: &SatModel,
    graph: &Graph,
    params: &Parameters,
    constraints: &Constraints,
    assignment: &Assignment,
) -> Result<DecodedLayout> {
    let order = decode_order(model, graph, assignment)?;
    let edge_pages = decode_edge_pages(model, graph, params, constraints, assignment)?;
    let vertex_tracks = if params.flavor == Flavor::Track {
        Some(decode_tracks(model, graph, params, assignment)?)
    } else {
        None
    };
    Ok(DecodedLayout { order, edge_pages, vertex_tracks })
}

fn decode_order(model: &SatModel, graph: &Graph, assignment: &Assignment) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    let mut position = vec![0usize; n];
    for i in 0..n {
        let mut predecessors = 0usize;
        for j in 0..n {
            if i == j {
                continue;
            }
            if assignment.value_of(model.get_rel(j, i, true)?) == Some(true) {
                predecessors += 1;
            }
        }
        position[i] = predecessors;
    }

    let mut order = vec![None; n];
    for (vertex, &pos) in position.iter().enumerate() {
        if order[pos].replace(vertex).is_some() {
            return Err(EncodeError::internal("decoder", format!("two vertices both decode to spine position {pos}")));
        }
    }
    order.into_iter().enumerate().map(|(pos, v)| v.ok_or_else(|| EncodeError::internal("decoder", format!("spine position {pos} is unfilled")))).collect()
}

fn decode_edge_pages(
    model: &SatModel,
    graph: &Graph,
    params: &Parameters,
    constraints: &Constraints,
    assignment: &Assignment,
) -> Result<Vec<Vec<usize>>> {
    let page_count = params.page_count();
    let mut edge_pages = Vec::with_capacity(graph.edge_count());
    for e in 0..graph.edge_count() {
        let mut pages = Vec::new();
        for p in 0..page_count {
            if assignment.value_of(model.get_page(e, p, true)?) == Some(true) {
                pages.push(p);
            }
        }
        let multi = constraints.multi_page.contains(&e);
        if pages.is_empty() {
            return Err(EncodeError::internal("decoder", format!("edge {e} is assigned to no page")));
        }
        if !multi && pages.len() != 1 {
            return Err(EncodeError::internal("decoder", format!("non-multi-page edge {e} is assigned to {} pages", pages.len())));
        }
        edge_pages.push(pages);
    }
    Ok(edge_pages)
}

fn decode_tracks(model: &SatModel, graph: &Graph, params: &Parameters, assignment: &Assignment) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    let mut tracks = Vec::with_capacity(n);
    for v in 0..n {
        let mut found = None;
        for t in 0..params.tracks {
            if assignment.value_of(model.get_track(v, t, true)?) == Some(true) {
                if found.replace(t).is_some() {
                    return Err(EncodeError::internal("decoder", format!("vertex {v} is assigned to more than one track")));
                }
            }
        }
        tracks.push(found.ok_or_else(|| EncodeError::internal("decoder", format!("vertex {v} is assigned to no track")))?);
    }
    for (_, (u, v)) in graph.edges() {
        if tracks[u] == tracks[v] {
            return Err(EncodeError::internal("decoder", format!("edge ({u}, {v}) does not span distinct tracks")));
        }
    }
    Ok(tracks)
}

impl DecodedLayout {
    /// A human-readable rendering: the spine order by label, then each
    /// page's edges sorted by endpoint labels.
    pub fn render(&self, graph: &Graph) -> String {
        let mut out = String::new();
        out.push_str("order: ");
        out.push_str(&self.order.iter().map(|&v| graph.label_of(v)).collect::<Vec<_>>().join(" "));
        out.push('\n');

        let page_count = self.edge_pages.iter().flatten().copied().max().map(|m| m + 1).unwrap_or(0);
        for p in 0..page_count {
            let mut edges: Vec<(usize, usize)> = self
                .edge_pages
                .iter()
                .enumerate()
                .filter(|(_, pages)| pages.contains(&p))
                .map(|(e, _)| graph.edge(e))
                .collect();
            edges.sort_unstable();
            out.push_str(&format!(
                "page {p}: {}\n",
                edges.iter().map(|&(u, v)| format!("{}-{}", graph.label_of(u), graph.label_of(v))).collect::<Vec<_>>().join(", ")
            ));
        }

        if let Some(tracks) = &self.vertex_tracks {
            out.push_str("tracks: ");
            out.push_str(&(0..graph.vertex_count()).map(|v| format!("{}:{}", graph.label_of(v), tracks[v])).collect::<Vec<_>>().join(" "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::order::encode_order;
    use crate::encode::pages::encode_pages;

    #[test]
    fn decodes_a_triangle_on_one_page() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        let mut model = SatModel::new();
        encode_order(&mut model, 3).unwrap();
        encode_pages(&mut model, 3, 1, &Default::default()).unwrap();

        let mut assignment = Assignment::new();
        // spine order 0,1,2
        assignment.set(model.get_rel(0, 1, true).unwrap().unsigned_abs(), true);
        assignment.set(model.get_rel(1, 2, true).unwrap().unsigned_abs(), true);
        assignment.set(model.get_rel(0, 2, true).unwrap().unsigned_abs(), true);
        for e in 0..3 {
            assignment.set(model.get_page(e, 0, true).unwrap().unsigned_abs(), true);
        }

        let params = Parameters { flavor: Flavor::Stack, stacks: 1, ..Parameters::default() };
        let constraints = Constraints::new();
        let layout = decode(&model, &g, &params, &constraints, &assignment).unwrap();
        assert_eq!(layout.order, vec![0, 1, 2]);
        assert_eq!(layout.edge_pages, vec![vec![0], vec![0], vec![0]]);
    }
}
