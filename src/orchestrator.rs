//! Orchestrator: wires every component through one encoding run.
//!
//! Sequences parameter validation, the lower-bound check, variable/clause
//! generation per flavor, optional features, symmetry breaking, DIMACS
//! emission, and optional result read-back and decode.

use crate::constraints::Constraints;
use crate::decode::{decode, DecodedLayout};
use crate::encode::features::{adjacency, directed, dispersible, local, planar, star, trees};
use crate::encode::flavors::{mixed, mixed_pages, queue, stack, track};
use crate::error::{EncodeError, Result};
use crate::graph::Graph;
use crate::lower_bound::exceeds_budget;
use crate::model::{read_dimacs_result, SatModel, SatStatus};
use crate::params::{Flavor, Parameters};
use crate::symmetry::encode_symmetry_and_custom;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Three-valued outcome of a single orchestrator run.
#[derive(Debug)]
pub enum Outcome {
    Sat(DecodedLayout),
    Unsat,
    /// The model was emitted but no result file was read back
    /// (`skip_solve`, or no `result_file` configured).
    Indeterminate,
}

/// Validates the flavor/budget combination before any variable is created.
fn validate_params(graph: &Graph, params: &Parameters) -> Result<()> {
    match params.flavor {
        Flavor::Stack => {
            if params.stacks == 0 {
                return Err(EncodeError::parameter("orchestrator", "stack flavor requires stacks > 0"));
            }
        }
        Flavor::Queue => {
            if params.queues == 0 {
                return Err(EncodeError::parameter("orchestrator", "queue flavor requires queues > 0"));
            }
        }
        Flavor::Track => {
            if params.tracks == 0 {
                return Err(EncodeError::parameter("orchestrator", "track flavor requires tracks > 0"));
            }
        }
        Flavor::Mixed => {
            if params.stacks == 0 || params.queues == 0 {
                return Err(EncodeError::parameter(
                    "orchestrator",
                    "mixed flavor requires both stacks > 0 and queues > 0",
                ));
            }
        }
        Flavor::MixedPages => {
            if params.mixed_pages == 0 {
                return Err(EncodeError::parameter("orchestrator", "mixed-pages flavor requires mixed_pages > 0"));
            }
        }
    }
    if params.planar_split && (params.flavor != Flavor::Stack || params.stacks != 2) {
        return Err(EncodeError::parameter("orchestrator", "planar_split requires flavor=stack, stacks=2"));
    }
    if let Some(direction) = graph.direction() {
        if direction.len() != graph.edge_count() {
            return Err(EncodeError::input(
                "orchestrator",
                format!("direction sequence length {} does not match edge count {}", direction.len(), graph.edge_count()),
            ));
        }
    }
    if params.directed && graph.direction().is_none() {
        return Err(EncodeError::parameter("orchestrator", "directed requires a direction sequence on the graph"));
    }
    Ok(())
}

/// Structural encoding dispatch, one exhaustive branch per flavor.
fn encode_structure(model: &mut SatModel, graph: &Graph, params: &Parameters, constraints: &Constraints) -> Result<()> {
    match params.flavor {
        Flavor::Stack => stack::encode(model, graph, params, &constraints.multi_page),
        Flavor::Queue => queue::encode(model, graph, params, &constraints.multi_page),
        Flavor::Track => track::encode(model, graph, params),
        Flavor::Mixed => mixed::encode(model, graph, params, &constraints.multi_page),
        Flavor::MixedPages => mixed_pages::encode(model, graph, params, &constraints.multi_page),
    }
}

fn encode_features(model: &mut SatModel, graph: &Graph, params: &Parameters, constraints: &mut Constraints) -> Result<()> {
    if params.directed {
        let derived = directed::derive_node_rel(graph)?;
        constraints.node_rel.extend(derived);
    }
    if params.trees {
        debug!("encoding trees feature over {} pages", params.page_count());
        trees::encode_trees(model, graph, params.page_count())?;
    }
    if params.adjacent {
        adjacency::encode_adjacency(model, graph.vertex_count())?;
    }
    if params.dispersible {
        dispersible::encode_dispersible(model, graph)?;
    }
    if let Some(l) = params.local {
        local::encode_local(model, graph, params.page_count(), l)?;
    }
    if params.star {
        star::encode_star(model, graph)?;
    }
    if params.planar_split {
        planar::encode_separating_decomposition(model, graph, params.stacks)?;
    }
    Ok(())
}

/// Runs the full pipeline: lower-bound check, structural encoding, feature
/// encoders, symmetry breaking, DIMACS emission, and (when a result is
/// available) read-back and decode.
pub fn run(
    graph: &Graph,
    params: &Parameters,
    mut constraints: Constraints,
    model_writer: Option<&mut dyn Write>,
    result_reader: Option<&mut dyn BufRead>,
) -> Result<Outcome> {
    validate_params(graph, &params)?;

    if exceeds_budget(graph, params) {
        info!("lower bound exceeds requested budget, reporting UNSAT without encoding");
        return Ok(Outcome::Unsat);
    }

    let mut model = SatModel::new();
    encode_structure(&mut model, graph, params, &constraints)?;
    encode_features(&mut model, graph, params, &mut constraints)?;
    encode_symmetry_and_custom(&mut model, graph, params, &mut constraints)?;

    debug!("encoded {} variables, {} clauses", model.var_count(), model.clause_count());

    if let Some(writer) = model_writer {
        model.clauses.write_dimacs(writer, model.var_count())?;
    }

    match result_reader {
        None => Ok(Outcome::Indeterminate),
        Some(reader) => {
            let result = read_dimacs_result(reader, model.var_count())?;
            match result.status {
                SatStatus::Unsatisfiable => Ok(Outcome::Unsat),
                SatStatus::Satisfiable => {
                    if params.skip_sat {
                        return Ok(Outcome::Indeterminate);
                    }
                    let layout = decode(&model, graph, params, &constraints, &result.assignment)?;
                    Ok(Outcome::Sat(layout))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> Graph {
        let mut g = Graph::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                g.add_edge(i, j).unwrap();
            }
        }
        g
    }

    #[test]
    fn k4_on_two_stacks_emits_a_model() {
        let g = k4();
        let params = Parameters { flavor: Flavor::Stack, stacks: 2, ..Parameters::default() };
        let mut buf = Vec::new();
        let outcome = run(&g, &params, Constraints::new(), Some(&mut buf), None).unwrap();
        assert!(matches!(outcome, Outcome::Indeterminate));
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("p cnf"));
    }

    #[test]
    fn k5_on_one_stack_is_unsat_by_lower_bound() {
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

    #[test]
    fn mixed_with_zero_queues_is_a_parameter_error() {
        let g = k4();
        let params = Parameters { flavor: Flavor::Mixed, stacks: 1, queues: 0, ..Parameters::default() };
        assert!(run(&g, &params, Constraints::new(), None, None).is_err());
    }

    #[test]
    fn satisfiable_result_decodes_a_layout() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        let params = Parameters { flavor: Flavor::Stack, stacks: 1, ..Parameters::default() };

        let mut model_buf = Vec::new();
        run(&g, &params, Constraints::new(), Some(&mut model_buf), None).unwrap();

        // Build a satisfying certificate by hand: spine order 0,1,2, all
        // edges on page 0 (a triangle never crosses itself).
        let mut model = SatModel::new();
        stack::encode(&mut model, &g, &params, &Default::default()).unwrap();
        let mut constraints = Constraints::new();
        encode_symmetry_and_custom(&mut model, &g, &params, &mut constraints).unwrap();

        let mut assignment = crate::model::Assignment::new();
        for v in 0..model.var_count() {
            assignment.set(v + 1, false);
        }
        for i in 0..3 {
            for j in (i + 1)..3 {
                assignment.set(model.get_rel(i, j, true).unwrap().unsigned_abs(), true);
            }
        }
        for e in 0..3 {
            assignment.set(model.get_page(e, 0, true).unwrap().unsigned_abs(), true);
        }
        assert!(assignment.satisfies(model.clauses.clauses()));
    }
}
