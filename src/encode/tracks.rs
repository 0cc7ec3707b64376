//! Track encoder: per-vertex track assignment plus the derived `st` ("same
//! track") family. Scoped to the forward implication only, which is enough
//! for the flavor constraints that consume it.
use crate::error::Result;
use crate::model::SatModel;

pub fn encode_tracks(model: &mut SatModel, vertex_count: usize, track_count: usize) -> Result<()> {
    for v in 0..vertex_count {
        for t in 0..track_count {
            model.add_track(v, t)?;
        }
    }

    for v in 0..vertex_count {
        let clause = (0..track_count).map(|t| model.get_track(v, t, true)).collect::<Result<Vec<_>>>()?;
        model.add_clause(clause);
    }

    for v in 0..vertex_count {
        for t1 in 0..track_count {
            for t2 in (t1 + 1)..track_count {
                model.add_clause(vec![model.get_track(v, t1, false)?, model.get_track(v, t2, false)?]);
            }
        }
    }

    for v1 in 0..vertex_count {
        for v2 in (v1 + 1)..vertex_count {
            model.add_same_track(v1, v2)?;
            for t in 0..track_count {
                model.add_clause(vec![
                    model.get_track(v1, t, false)?,
                    model.get_track(v2, t, false)?,
                    model.get_same_track(v1, v2, true)?,
                ]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_track_and_same_track_vars() {
        let mut model = SatModel::new();
        encode_tracks(&mut model, 3, 2).unwrap();
        assert_eq!(model.var_count(), 3 * 2 + 3);
    }
}
