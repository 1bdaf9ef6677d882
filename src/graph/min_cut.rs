use log::{debug, trace, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::graph::multigraph::{VertexId, WeightedMultigraph};

/// Estimates the weight of the global minimum cut of an undirected graph by
/// repeated random edge contraction (Karger's algorithm) with the default
/// budget of `n²` independent trials.
///
/// Each trial contracts a fresh copy of the graph down to two vertices and
/// reads off the weight of the cut it discovered; the estimate is the
/// minimum across trials. A single trial finds the true minimum cut with
/// probability `Ω(1/n²)`, so `n²` trials give a constant success
/// probability. The textbook budget for high-confidence success is
/// `n² ln n`; the default trades some success probability for running time,
/// and `estimate_with_trials` accepts any other budget.
///
/// # Arguments
/// - `description`: adjacency description, `description[v]` listing the
///   neighbors of vertex `v` for `v` in `1..description.len()` (row 0 is an
///   ignored sentinel). Duplicate neighbor ids encode parallel edges; each
///   edge must be listed from both endpoints.
///
/// # Returns
/// - `Ok(weight)` - the smallest cut weight observed.
/// - `Err(Error::InvalidGraphSize)` - fewer than two vertices.
/// - `Err(Error::NoCutFound)` - every trial ran into a disconnected
///   remainder, so no finite cut exists within the budget.
pub fn estimate(description: &[Vec<VertexId>]) -> Result<u64> {
    let n = description.len().saturating_sub(1);
    estimate_with_trials(description, n * n)
}

/// Same as [`estimate`] with an explicit trial budget.
pub fn estimate_with_trials(description: &[Vec<VertexId>], trials: usize) -> Result<u64> {
    estimate_with_rng(description, trials, &mut rand::thread_rng())
}

/// Sequential trial loop over a caller-supplied random source.
///
/// Under a seeded RNG the whole run is deterministic, and extending the
/// trial budget re-runs the same trial prefix, so the returned minimum is
/// non-increasing in `trials`.
///
/// Trials that fail on a disconnected remainder are discarded; the estimate
/// is the minimum over the trials that completed. A graph with two vertices
/// short-circuits to the weight of their mutual edge (0 if disconnected)
/// without contracting or consuming randomness.
pub fn estimate_with_rng<R: Rng>(
    description: &[Vec<VertexId>],
    trials: usize,
    rng: &mut R,
) -> Result<u64> {
    let prototype = build(description)?;
    if prototype.vertex_count() == 2 {
        return Ok(prototype.cut_weight());
    }

    let mut best: Option<u64> = None;
    let mut discarded = 0usize;
    for trial in 0..trials {
        match run_trial(prototype.clone(), rng) {
            Ok(cut) => {
                trace!("trial {}: cut weight {}", trial, cut);
                best = Some(best.map_or(cut, |b| b.min(cut)));
            }
            Err(Error::EmptyEdgeSet { remaining }) => {
                warn!(
                    "trial {} discarded: no edge left among {} active vertices",
                    trial, remaining
                );
                discarded += 1;
            }
            Err(e) => return Err(e),
        }
    }

    match best {
        Some(cut) => {
            debug!(
                "minimum cut {} over {} completed trials ({} discarded)",
                cut,
                trials - discarded,
                discarded
            );
            Ok(cut)
        }
        None => Err(Error::NoCutFound { trials }),
    }
}

/// Parallel variant of [`estimate_with_trials`]: trials share no mutable
/// state, so they are dispatched across the rayon pool, each with its own
/// fresh graph copy and thread-local RNG, and reduced by minimum.
pub fn estimate_parallel(description: &[Vec<VertexId>], trials: usize) -> Result<u64> {
    let prototype = build(description)?;
    if prototype.vertex_count() == 2 {
        return Ok(prototype.cut_weight());
    }

    (0..trials)
        .into_par_iter()
        .filter_map(|_| run_trial(prototype.clone(), &mut rand::thread_rng()).ok())
        .min()
        .ok_or(Error::NoCutFound { trials })
}

fn build(description: &[Vec<VertexId>]) -> Result<WeightedMultigraph> {
    let n = description.len().saturating_sub(1);
    if n < 2 {
        return Err(Error::InvalidGraphSize(n));
    }
    Ok(WeightedMultigraph::from_adjacency(description))
}

fn run_trial<R: Rng>(mut graph: WeightedMultigraph, rng: &mut R) -> Result<u64> {
    while graph.active().len() > 2 {
        graph.contract_random_edge(rng)?;
    }
    Ok(graph.cut_weight())
}
