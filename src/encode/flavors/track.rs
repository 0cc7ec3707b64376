//! Track layout: vertices partition onto tracks, edges span two distinct
//! tracks and must not X-cross; an optional span bound limits how far apart
//! those tracks may be.

use crate::encode::flavors::common::{edges_share_endpoint, x_clause, x_quadruples};
use crate::encode::order::encode_order;
use crate::encode::pages::encode_pages;
use crate::encode::tracks::encode_tracks;
use crate::error::Result;
use crate::graph::Graph;
use crate::model::SatModel;
use crate::params::Parameters;

pub fn encode(model: &mut SatModel, graph: &Graph, params: &Parameters) -> Result<()> {
    let n = graph.vertex_count();
    encode_order(model, n)?;
    encode_pages(model, graph.edge_count(), 1, &Default::default())?;
    encode_tracks(model, n, params.tracks)?;

    // A single shared page: pin every edge to it so the page machinery is a
    // no-op, and every edge must span two distinct tracks.
    for e in 0..graph.edge_count() {
        model.add_clause(vec![model.get_page(e, 0, true)?]);
        let (u, v) = graph.edge(e);
        model.add_clause(vec![model.get_same_track(u, v, false)?]);
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
            for (x, y, u, v) in x_quadruples(e1, e2) {
                model.add_clause(x_clause(model, j, i, x, y, u, v)?);
            }
        }
    }

    if params.span > 0 {
        for e in 0..graph.edge_count() {
            let (u, v) = graph.edge(e);
            for t1 in 0..params.tracks {
                for t2 in 0..params.tracks {
                    if (t1 as isize - t2 as isize).unsigned_abs() <= params.span {
                        continue;
                    }
                    model.add_clause(vec![model.get_track(u, t1, false)?, model.get_track(v, t2, false)?]);
                    model.add_clause(vec![model.get_track(u, t2, false)?, model.get_track(v, t1, false)?]);
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
    fn k3_on_two_tracks_encodes_without_error() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        let params = Parameters { flavor: Flavor::Track, tracks: 2, ..Parameters::default() };
        let mut model = SatModel::new();
        encode(&mut model, &g, &params).unwrap();
        assert!(model.clause_count() > 0);
    }
}
