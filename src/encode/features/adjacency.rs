//! Adjacency feature: materializes vertex adjacency as SAT variables
//! consistent with the spine order, for feature encoders (and callers) that
//! need to reason about "is `i` adjacent to `j`" directly rather than via
//! the graph.

use crate::error::Result;
use crate::model::SatModel;

pub fn encode_adjacency(model: &mut SatModel, n: usize) -> Result<()> {
    for i in 0..n {
        for j in 0..n {
            if i != j {
                model.add_adj(i, j)?;
            }
        }
    }

    // adj(i,j) -> rel(i,j): an edge only ever points from a vertex to one
    // that spine-follows it.
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            model.add_clause(vec![model.get_adj(i, j, false)?, model.get_rel(i, j, true)?]);
        }
    }

    // every non-source vertex has at least one incoming adjacency.
    for j in 1..n {
        let clause = (0..n).filter(|&i| i != j).map(|i| model.get_adj(i, j, true)).collect::<Result<Vec<_>>>()?;
        model.add_clause(clause);
    }

    // adj(i,j) is forced false whenever some x strictly between i and j
    // exists (adjacency only tracks the immediate spine predecessor).
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            for x in 0..n {
                if x == i || x == j {
                    continue;
                }
                model.add_clause(vec![model.get_rel(i, x, false)?, model.get_rel(x, j, false)?, model.get_adj(i, j, false)?]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::order::encode_order;

    #[test]
    fn encodes_without_error() {
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        encode_adjacency(&mut model, 4).unwrap();
        assert!(model.clause_count() > 0);
    }
}
