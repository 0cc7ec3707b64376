//! Page encoder: per-edge page assignment plus the derived `sp` ("same
//! page") family.

use crate::error::Result;
use crate::model::SatModel;
use std::collections::HashSet;

/// `multi_page` names edges allowed to occupy more than one page, in which
/// case neither the at-most-one-page clause nor the `p1 != p2` branch of the
/// same-page derivation is emitted for that edge.
pub fn encode_pages(
    model: &mut SatModel,
    edge_count: usize,
    page_count: usize,
    multi_page: &HashSet<usize>,
) -> Result<()> {
    for e in 0..edge_count {
        for p in 0..page_count {
            model.add_page(e, p)?;
        }
    }

    for e in 0..edge_count {
        let clause = (0..page_count).map(|p| model.get_page(e, p, true)).collect::<Result<Vec<_>>>()?;
        model.add_clause(clause);
    }

    for e in 0..edge_count {
        if multi_page.contains(&e) {
            continue;
        }
        for p in 0..page_count {
            for q in (p + 1)..page_count {
                model.add_clause(vec![model.get_page(e, p, false)?, model.get_page(e, q, false)?]);
            }
        }
    }

    for e1 in 0..edge_count {
        for e2 in (e1 + 1)..edge_count {
            model.add_same_page(e1, e2)?;
            let multi = multi_page.contains(&e1) || multi_page.contains(&e2);
            for p in 0..page_count {
                for q in 0..page_count {
                    if p != q && multi {
                        continue;
                    }
                    model.add_clause(vec![
                        model.get_page(e1, p, false)?,
                        model.get_page(e2, q, false)?,
                        model.get_same_page(e1, e2, p == q)?,
                    ]);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_page_and_same_page_vars() {
        let mut model = SatModel::new();
        encode_pages(&mut model, 3, 2, &HashSet::new()).unwrap();
        assert_eq!(model.var_count(), 3 * 2 + 3); // page vars + C(3,2) same-page vars
    }

    #[test]
    fn multi_page_edge_skips_at_most_one() {
        let mut model = SatModel::new();
        let mut multi = HashSet::new();
        multi.insert(0);
        encode_pages(&mut model, 1, 3, &multi).unwrap();
        // only the at-least-one-page clause should be present for edge 0
        assert_eq!(model.clause_count(), 1);
    }
}
