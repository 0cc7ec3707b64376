//! A linear-layout SAT encoder: given an undirected graph and a choice of
//! layout flavor (stack/book, queue, track, mixed, mixed-page), reduces
//! "does a valid layout with the requested resources exist?" to a CNF/DIMACS
//! instance, and decodes a solver's satisfying assignment back into a
//! concrete spine order, per-edge page assignment, and (for track layouts)
//! per-vertex track.
//!
//! The crate only emits and consumes DIMACS files; it never runs a SAT
//! solver itself. Graph-file parsing (DOT/GML), CLI argument parsing, and
//! solver invocation live outside this library, in the `layout_encode`
//! binary and, ultimately, whatever external tool the caller chooses to run
//! against the emitted model.

pub mod constraints;
pub mod decode;
pub mod encode;
pub mod error;
pub mod graph;
pub mod lower_bound;
pub mod model;
pub mod orchestrator;
pub mod params;
pub mod symmetry;

pub use constraints::Constraints;
pub use decode::DecodedLayout;
pub use error::{EncodeError, Result};
pub use graph::{Graph, PlanarData};
pub use orchestrator::{run, Outcome};
pub use params::{Flavor, Parameters};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k4_stack_on_two_pages_emits_a_valid_dimacs_header() {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Stack, stacks: 2, ..Parameters::default() };
        let mut buf = Vec::new();
        let outcome = run(&g, &params, Constraints::new(), Some(&mut buf), None).unwrap();
        assert!(matches!(outcome, Outcome::Indeterminate));
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("p cnf "));
    }

    #[test]
    fn k5_on_one_stack_is_unsat_without_emitting() {
        let mut g = Graph::new(5);
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(i, j).unwrap();
            }
        }
        let params = Parameters { flavor: Flavor::Stack, stacks: 1, ..Parameters::default() };
        let outcome = run(&g, &params, Constraints::new(), None, None).unwrap();
        assert!(matches!(outcome, Outcome::Unsat));
    }
}
