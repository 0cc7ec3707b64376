//! Lower-bound oracle: closed-form infeasibility shortcuts that let the
//! orchestrator report UNSAT without building a model.

use crate::graph::Graph;
use crate::params::{Flavor, Parameters};

pub fn dispersible_lower_bound(graph: &Graph) -> usize {
    (0..graph.vertex_count()).map(|v| graph.degree(v)).max().unwrap_or(0)
}

/// `max(1, ceil((m - n + n - 4) / max(n - 3, 1)))`.
pub fn stack_lower_bound(graph: &Graph) -> usize {
    let n = graph.vertex_count() as i64;
    let m = graph.edge_count() as i64;
    let numerator = m - n + n - 4;
    let denominator = (n - 3).max(1);
    let lb = (numerator as f64 / denominator as f64).ceil() as i64;
    lb.max(1) as usize
}

/// Smallest `k` with `2kn - k(2k+1) >= m`, falling back to `queues + 1` if
/// no such `k` in `0..=queues` satisfies the inequality.
pub fn queue_lower_bound(graph: &Graph, queues: usize) -> usize {
    let n = graph.vertex_count() as i64;
    let m = graph.edge_count() as i64;
    let mut lb = queues + 1;
    for k in 0..=queues {
        let capacity = 2 * k as i64 * n - (k as i64) * (2 * k as i64 + 1);
        if capacity >= m {
            lb = k;
            break;
        }
    }
    lb
}

/// Smallest `k` with `(k-1)n - k(k-1)/2 >= m`, else `tracks + 1`.
pub fn track_lower_bound(graph: &Graph, tracks: usize) -> usize {
    let n = graph.vertex_count() as i64;
    let m = graph.edge_count() as i64;
    for k in 1..=tracks {
        let capacity = (k as i64 - 1) * n - (k as i64) * (k as i64 - 1) / 2;
        if capacity >= m {
            return k;
        }
    }
    tracks + 1
}

/// Combined stack+queue capacity for a fixed `(stacks, queues)` budget:
/// `(stacks+1)*n - 3*stacks + 2*queues*n - queues*(2*queues+1)`.
fn mixed_capacity(n: usize, stacks: usize, queues: usize) -> i64 {
    let n = n as i64;
    let (s, q) = (stacks as i64, queues as i64);
    (s + 1) * n - 3 * s + 2 * q * n - q * (2 * q + 1)
}

/// Returns `true` when the requested budget is provably insufficient and
/// the orchestrator should report UNSAT without encoding anything.
pub fn exceeds_budget(graph: &Graph, params: &Parameters) -> bool {
    let m = graph.edge_count();
    let dispersible_lb = params.dispersible.then(|| dispersible_lower_bound(graph));

    match params.flavor {
        Flavor::Stack => {
            let lb = stack_lower_bound(graph).max(dispersible_lb.unwrap_or(0));
            lb > params.stacks
        }
        Flavor::Queue => {
            let lb = queue_lower_bound(graph, params.queues).max(dispersible_lb.unwrap_or(0));
            lb > params.queues
        }
        Flavor::Track => {
            let lb = track_lower_bound(graph, params.tracks).max(dispersible_lb.unwrap_or(0));
            lb > params.tracks
        }
        Flavor::Mixed => {
            let capacity = mixed_capacity(graph.vertex_count(), params.stacks, params.queues);
            if capacity < m as i64 {
                return true;
            }
            if let Some(lb) = dispersible_lb {
                if params.stacks + params.queues < lb {
                    return true;
                }
            }
            false
        }
        // No closed-form bound given for independently-typed pages; let the
        // encoder attempt it and let the solver decide.
        Flavor::MixedPages => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k5_on_one_stack_exceeds_budget() {
        let mut g = Graph::new(5);
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Stack, stacks: 1, ..Parameters::default() };
        assert!(exceeds_budget(&g, &params));
    }

    #[test]
    fn k4_on_two_stacks_is_within_budget() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Stack, stacks: 2, ..Parameters::default() };
        assert!(!exceeds_budget(&g, &params));
    }

    #[test]
    fn p4_dispersible_on_one_queue_exceeds_budget() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        let params = Parameters { flavor: Flavor::Queue, queues: 1, dispersible: true, ..Parameters::default() };
        // degree 2 at vertex 1/2 > 1 queue page available for a dispersible layout.
        assert!(exceeds_budget(&g, &params));
    }

    #[test]
    fn path_on_three_vertices_is_within_two_track_budget() {
        // A path is bipartite: track-assigning every other vertex to the
        // same track gives every edge two distinct tracks, so 2 tracks
        // suffice (a triangle would not, since it needs 3).
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let params = Parameters { flavor: Flavor::Track, tracks: 2, ..Parameters::default() };
        assert!(!exceeds_budget(&g, &params));
    }

    #[test]
    fn triangle_exceeds_two_track_budget_but_fits_three() {
        // Every edge must span two distinct tracks, so a triangle (all
        // three vertices pairwise adjacent) needs 3 tracks, not 2.
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        let two = Parameters { flavor: Flavor::Track, tracks: 2, ..Parameters::default() };
        assert!(exceeds_budget(&g, &two));
        let three = Parameters { flavor: Flavor::Track, tracks: 3, ..Parameters::default() };
        assert!(!exceeds_budget(&g, &three));
    }
}
