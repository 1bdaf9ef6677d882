pub mod min_cut;
pub mod multigraph;

pub use min_cut::{estimate, estimate_parallel, estimate_with_rng, estimate_with_trials};
pub use multigraph::{VertexId, WeightedMultigraph};
