pub mod inversion_count;
pub mod merge_sort;
pub mod quick_sort;

pub use inversion_count::count_inversions;
pub use merge_sort::merge_sort;
pub use quick_sort::{quick_sort, quick_sort_with_strategy, PivotStrategy};
