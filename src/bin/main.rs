//! Thin CLI binary: argument parsing, a minimal graph-input reader, and
//! wiring into `linear_layout_encoder::run`. DOT/GML parsing is out of
//! scope, so input is a minimal edge-list format: one `u v` pair per line;
//! vertex labels stay numeric.

use clap::{value_t, App, Arg};
use linear_layout_encoder::{Constraints, Flavor, Graph, Outcome, Parameters};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_PRECONDITION: u8 = 10;
const EXIT_IO: u8 = 20;
const EXIT_ERROR: u8 = 40;

fn build_cli() -> App<'static, 'static> {
    App::new("layout_encode")
        .about("Encodes a linear-layout existence question as a DIMACS CNF instance.")
        .arg(Arg::with_name("input").short("i").long("input").takes_value(true).help("Edge-list input path (stdin if omitted)"))
        .arg(Arg::with_name("output").short("o").long("output").takes_value(true).help("DIMACS model output path (stdout if omitted)"))
        .arg(Arg::with_name("result").long("result").takes_value(true).help("DIMACS solver-result input path"))
        .arg(Arg::with_name("stacks").long("stacks").takes_value(true).default_value("0"))
        .arg(Arg::with_name("queues").long("queues").takes_value(true).default_value("0"))
        .arg(Arg::with_name("tracks").long("tracks").takes_value(true).default_value("0"))
        .arg(Arg::with_name("mixedPages").long("mixedPages").takes_value(true).default_value("0"))
        .arg(Arg::with_name("type").long("type").takes_value(true).possible_values(&["stack", "queue", "mixed"]).help("Legacy flavor synonym"))
        .arg(Arg::with_name("flavor").long("flavor").takes_value(true).possible_values(&["stack", "queue", "track", "mixed", "mixed-pages"]))
        .arg(Arg::with_name("trees").long("trees"))
        .arg(Arg::with_name("adjacent").long("adjacent"))
        .arg(Arg::with_name("dispersible").long("dispersible"))
        .arg(Arg::with_name("directed").long("directed"))
        .arg(Arg::with_name("strict").long("strict"))
        .arg(Arg::with_name("local").long("local").takes_value(true))
        .arg(Arg::with_name("span").long("span").takes_value(true))
        .arg(Arg::with_name("applyBreakID").long("applyBreakID"))
        .arg(Arg::with_name("skipSAT").long("skipSAT"))
        .arg(Arg::with_name("skipSolve").long("skipSolve"))
        .arg(Arg::with_name("verbose").short("v").long("verbose").multiple(true))
}

/// Reads the minimal edge-list graph format: one `u v` pair of 0-based
/// vertex indices per line, blank lines and `#`-prefixed lines ignored. The
/// vertex count is inferred as `max(endpoint) + 1`.
fn read_graph<R: Read>(r: R) -> Result<Graph, String> {
    let reader = BufReader::new(r);
    let mut edges = Vec::new();
    let mut max_vertex = None;
    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let u: usize = parts.next().ok_or("missing first endpoint")?.parse().map_err(|_| "malformed vertex index")?;
        let v: usize = parts.next().ok_or("missing second endpoint")?.parse().map_err(|_| "malformed vertex index")?;
        max_vertex = Some(max_vertex.map_or(u.max(v), |m: usize| m.max(u).max(v)));
        edges.push((u, v));
    }
    let n = max_vertex.map_or(0, |m| m + 1);
    let mut graph = Graph::new(n);
    for (u, v) in edges {
        graph.add_edge(u, v).map_err(|e| e.to_string())?;
    }
    Ok(graph)
}

fn resolve_flavor(matches: &clap::ArgMatches) -> Result<Flavor, String> {
    if let Some(flavor) = matches.value_of("flavor") {
        return Ok(match flavor {
            "stack" => Flavor::Stack,
            "queue" => Flavor::Queue,
            "track" => Flavor::Track,
            "mixed" => Flavor::Mixed,
            "mixed-pages" => Flavor::MixedPages,
            other => return Err(format!("unknown flavor {other}")),
        });
    }
    if let Some(legacy) = matches.value_of("type") {
        return Ok(match legacy {
            "stack" => Flavor::Stack,
            "queue" => Flavor::Queue,
            "mixed" => Flavor::Mixed,
            other => return Err(format!("unknown type {other}")),
        });
    }
    Err("one of --flavor or --type (legacy) is required".to_string())
}

fn build_params(matches: &clap::ArgMatches) -> Result<Parameters, String> {
    let flavor = resolve_flavor(matches)?;
    let stacks = value_t!(matches, "stacks", usize).map_err(|e| e.to_string())?;
    let queues = value_t!(matches, "queues", usize).map_err(|e| e.to_string())?;
    let tracks = value_t!(matches, "tracks", usize).map_err(|e| e.to_string())?;
    let mixed_pages = value_t!(matches, "mixedPages", usize).map_err(|e| e.to_string())?;
    let local = matches.value_of("local").map(|s| s.parse::<usize>()).transpose().map_err(|e| e.to_string())?;
    let span = matches.value_of("span").map(|s| s.parse::<usize>()).transpose().map_err(|e| e.to_string())?.unwrap_or(0);

    Ok(Parameters {
        flavor,
        stacks,
        queues,
        tracks,
        mixed_pages,
        span,
        local,
        trees: matches.is_present("trees"),
        adjacent: matches.is_present("adjacent"),
        directed: matches.is_present("directed"),
        dispersible: matches.is_present("dispersible"),
        strict: matches.is_present("strict"),
        apply_break_id: matches.is_present("applyBreakID"),
        skip_sat: matches.is_present("skipSAT"),
        skip_solve: matches.is_present("skipSolve"),
        model_file: matches.value_of("output").map(PathBuf::from),
        result_file: matches.value_of("result").map(PathBuf::from),
        verbose: matches.occurrences_of("verbose") as u8,
        ..Parameters::default()
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let matches = build_cli().get_matches();

    let graph = match matches.value_of("input") {
        Some(path) => File::open(path).map_err(|e| e.to_string()).and_then(read_graph),
        None => read_graph(io::stdin()),
    };
    let graph = match graph {
        Ok(g) => g,
        Err(e) => {
            eprintln!("input error: {e}");
            return ExitCode::from(EXIT_IO);
        }
    };

    let params = match build_params(&matches) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("parameter error: {e}");
            return ExitCode::from(EXIT_PRECONDITION);
        }
    };

    let mut model_buf: Vec<u8> = Vec::new();
    let result_file = params.result_file.clone();
    let skip_solve = params.skip_solve;

    let result_reader = if skip_solve {
        None
    } else {
        match &result_file {
            Some(path) => match File::open(path) {
                Ok(f) => Some(BufReader::new(f)),
                Err(e) => {
                    eprintln!("I/O error opening result file: {e}");
                    return ExitCode::from(EXIT_IO);
                }
            },
            None => None,
        }
    };

    let outcome = {
        let mut reader = result_reader;
        linear_layout_encoder::run(
            &graph,
            &params,
            Constraints::new(),
            Some(&mut model_buf),
            reader.as_mut().map(|r| r as &mut dyn BufRead),
        )
    };

    let outcome = match outcome {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let write_result = match &params.model_file {
        Some(path) => File::create(path).and_then(|mut f| f.write_all(&model_buf)),
        None => io::stdout().write_all(&model_buf),
    };
    if let Err(e) = write_result {
        eprintln!("I/O error writing model: {e}");
        return ExitCode::from(EXIT_IO);
    }

    match outcome {
        Outcome::Sat(layout) => {
            println!("SAT");
            print!("{}", layout.render(&graph));
        }
        Outcome::Unsat => println!("UNSAT"),
        Outcome::Indeterminate => info!("model emitted, no result file supplied"),
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_minimal_edge_list() {
        let input = "# triangle\n0 1\n1 2\n0 2\n";
        let g = read_graph(input.as_bytes()).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn legacy_type_resolves_to_flavor() {
        let matches = build_cli().get_matches_from(vec!["layout_encode", "--type", "queue", "--queues", "2"]);
        assert_eq!(resolve_flavor(&matches).unwrap(), Flavor::Queue);
    }
}
