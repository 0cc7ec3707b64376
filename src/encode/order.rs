//! Order encoder: one `rel` variable per unordered vertex pair, plus
//! transitivity over every triple.

use crate::error::Result;
use crate::model::SatModel;

pub fn encode_order(model: &mut SatModel, n: usize) -> Result<()> {
    for i in 0..n {
        for j in (i + 1)..n {
            model.add_rel(i, j)?;
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                model.add_clause(vec![
                    model.get_rel(i, j, false)?,
                    model.get_rel(j, k, false)?,
                    model.get_rel(i, k, true)?,
                ]);
                model.add_clause(vec![
                    model.get_rel(i, j, true)?,
                    model.get_rel(j, k, true)?,
                    model.get_rel(i, k, false)?,
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
    fn creates_one_rel_per_unordered_pair() {
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        assert_eq!(model.var_count(), 6); // C(4,2)
    }

    #[test]
    fn transitivity_clauses_cover_every_triple() {
        let mut model = SatModel::new();
        encode_order(&mut model, 4).unwrap();
        assert_eq!(model.clause_count(), 2 * 4); // C(4,3) triples * 2 clauses
    }
}
