pub mod error;
pub mod graph;
pub mod sort;

pub use error::{Error, Result};
pub use graph::{min_cut, multigraph};
