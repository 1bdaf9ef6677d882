use std::env;
use std::fs;
use std::process;

use mincut::graph::min_cut;
use mincut::graph::multigraph::VertexId;
use mincut::{Error, Result};

/// Thin driver around the estimator: reads a text adjacency list (each line
/// a 1-indexed vertex id followed by its neighbor ids, duplicates encoding
/// parallel edges) and prints the estimated minimum cut weight.
fn main() {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: min_cut <adjacency-list-file> [trials]");
            process::exit(2);
        }
    };
    let trials = match args.next() {
        Some(raw) => match raw.parse::<usize>() {
            Ok(trials) => Some(trials),
            Err(_) => {
                eprintln!("min_cut: invalid trial count '{}'", raw);
                process::exit(2);
            }
        },
        None => None,
    };

    match run(&path, trials) {
        Ok(cut) => println!("{}", cut),
        Err(e) => {
            eprintln!("min_cut: {}", e);
            process::exit(1);
        }
    }
}

fn run(path: &str, trials: Option<usize>) -> Result<u64> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::InvalidInput(format!("{}: {}", path, e)))?;
    let description = parse_adjacency(&text)?;
    match trials {
        Some(trials) => min_cut::estimate_with_trials(&description, trials),
        None => min_cut::estimate(&description),
    }
}

fn parse_adjacency(text: &str) -> Result<Vec<Vec<VertexId>>> {
    // Row 0 is the sentinel the core expects for 1-indexed ids.
    let mut rows: Vec<Vec<VertexId>> = vec![vec![]];

    for (index, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let vertex = match fields.next() {
            Some(field) => parse_id(field, index)?,
            None => continue,
        };
        if vertex != rows.len() {
            return Err(Error::InvalidInput(format!(
                "line {}: expected vertex {}, got {}",
                index + 1,
                rows.len(),
                vertex
            )));
        }
        let mut neighbors = Vec::new();
        for field in fields {
            neighbors.push(parse_id(field, index)?);
        }
        rows.push(neighbors);
    }

    let n = rows.len() - 1;
    for (vertex, neighbors) in rows.iter().enumerate().skip(1) {
        for &neighbor in neighbors {
            if neighbor < 1 || neighbor > n || neighbor == vertex {
                return Err(Error::InvalidInput(format!(
                    "vertex {} lists invalid neighbor {}",
                    vertex, neighbor
                )));
            }
        }
    }

    Ok(rows)
}

fn parse_id(field: &str, line_index: usize) -> Result<VertexId> {
    field.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "line {}: '{}' is not a vertex id",
            line_index + 1,
            field
        ))
    })
}
