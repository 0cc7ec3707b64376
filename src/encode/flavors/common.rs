//! Shared clause templates for the flavor encoders: crossing, nesting, and
//! X-cross constraints over a pair of non-adjacent edges, each expressed as
//! the eight order-permutation clauses a pair of disjoint-endpoint edges can
//! take along the spine.

use crate::error::Result;
use crate::model::{Clause, SatModel};

/// Two edges are adjacent (share an endpoint) and therefore exempt from the
/// crossing/nesting/X-cross clauses between them.
pub fn edges_share_endpoint(e1: (usize, usize), e2: (usize, usize)) -> bool {
    e1.0 == e2.0 || e1.0 == e2.1 || e1.1 == e2.0 || e1.1 == e2.1
}

/// The three `rel` negations forbidding spine order `a < b < c < d`, with no
/// page guard attached. Callers add whichever guard fits their flavor (the
/// derived `sp` variable for `Stack`/`Queue`/`Track`, or explicit per-page
/// pins for `Mixed`/`MixedPages`).
pub fn order_literals(model: &SatModel, a: usize, b: usize, c: usize, d: usize) -> Result<Vec<crate::model::Literal>> {
    Ok(vec![model.get_rel(a, b, false)?, model.get_rel(b, c, false)?, model.get_rel(c, d, false)?])
}

/// `same_page(e1,e2) -> NOT(a < b < c < d)`: forbids the crossing
/// (interleaved) spine order for the given quadruple of endpoints.
pub fn cross_clause(
    model: &SatModel,
    e1: usize,
    e2: usize,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) -> Result<Clause> {
    let mut clause = vec![model.get_same_page(e1, e2, false)?];
    clause.extend(order_literals(model, a, b, c, d)?);
    Ok(clause)
}

/// The 8 "abab" endpoint quadruples asserting `e1` and `e2` interleave on
/// the spine (a stack-page crossing). One `cross_clause` call per
/// quadruple forbids all eight.
pub fn crossing_quadruples(e1: (usize, usize), e2: (usize, usize)) -> [(usize, usize, usize, usize); 8] {
    let (e1n1, e1n2) = e1;
    let (e2n1, e2n2) = e2;
    [
        (e1n1, e2n1, e1n2, e2n2),
        (e1n1, e2n2, e1n2, e2n1),
        (e1n2, e2n1, e1n1, e2n2),
        (e1n2, e2n2, e1n1, e2n1),
        (e2n1, e1n1, e2n2, e1n2),
        (e2n1, e1n2, e2n2, e1n1),
        (e2n2, e1n1, e2n1, e1n2),
        (e2n2, e1n2, e2n1, e1n1),
    ]
}

/// The 8 "abba" endpoint quadruples asserting `e1` nests inside `e2` (or
/// vice versa), the pattern forbidden on a queue page.
pub fn nesting_quadruples(e1: (usize, usize), e2: (usize, usize)) -> [(usize, usize, usize, usize); 8] {
    let (e1n1, e1n2) = e1;
    let (e2n1, e2n2) = e2;
    [
        (e1n1, e2n1, e2n2, e1n2),
        (e1n1, e2n2, e2n1, e1n2),
        (e1n2, e2n1, e2n2, e1n1),
        (e1n2, e2n2, e2n1, e1n1),
        (e2n1, e1n1, e1n2, e2n2),
        (e2n1, e1n2, e1n1, e2n2),
        (e2n2, e1n1, e1n2, e2n1),
        (e2n2, e1n2, e1n1, e2n1),
    ]
}

/// `same_page(e1,e2) -> NOT(same_track(x,v) AND same_track(y,u) AND x<v AND u<y)`:
/// forbids one specific X-cross configuration of endpoints `(x,y,u,v)`.
pub fn x_clause(
    model: &SatModel,
    e1: usize,
    e2: usize,
    x: usize,
    y: usize,
    u: usize,
    v: usize,
) -> Result<Clause> {
    Ok(vec![
        model.get_same_page(e1, e2, false)?,
        model.get_same_track(x, v, false)?,
        model.get_same_track(y, u, false)?,
        model.get_rel(x, v, false)?,
        model.get_rel(u, y, false)?,
    ])
}

/// The 8 endpoint quadruples `(x,y,u,v)` covering every assignment of which
/// endpoint of `e1`/`e2` plays which role in `x_clause`.
pub fn x_quadruples(e1: (usize, usize), e2: (usize, usize)) -> [(usize, usize, usize, usize); 8] {
    let (e1n1, e1n2) = e1;
    let (e2n1, e2n2) = e2;
    [
        (e1n1, e1n2, e2n1, e2n2),
        (e1n1, e1n2, e2n2, e2n1),
        (e1n2, e1n1, e2n1, e2n2),
        (e1n2, e1n1, e2n2, e2n1),
        (e2n1, e2n2, e1n1, e1n2),
        (e2n1, e2n2, e1n2, e1n1),
        (e2n2, e2n1, e1n1, e1n2),
        (e2n2, e2n1, e1n2, e1n1),
    ]
}
