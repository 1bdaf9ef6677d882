use rand::Rng;

/// How the pivot is chosen before each partition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    /// First element of the subarray.
    First,
    /// Last element of the subarray.
    Last,
    /// Median of the first, middle and last elements.
    MedianOfThree,
    /// Uniformly random element.
    Random,
}

/// Sorts a slice in place with quicksort, choosing pivots by the median-of-
/// three rule.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_with_strategy(arr, PivotStrategy::MedianOfThree);
}

/// Sorts a slice in place with quicksort under the given pivot strategy and
/// returns the number of comparisons performed, counted as subarray length
/// minus one per partition pass.
pub fn quick_sort_with_strategy<T: Ord>(arr: &mut [T], strategy: PivotStrategy) -> u64 {
    let len = arr.len();
    if len <= 1 {
        return 0;
    }
    let mut comparisons = (len - 1) as u64;

    // Move the chosen pivot to the front, then partition around it.
    let pivot_index = choose_pivot(arr, strategy);
    arr.swap(0, pivot_index);
    let mut boundary = 0;
    for j in 1..len {
        if arr[j] < arr[0] {
            boundary += 1;
            arr.swap(boundary, j);
        }
    }
    arr.swap(0, boundary);

    let (front, back) = arr.split_at_mut(boundary);
    comparisons += quick_sort_with_strategy(front, strategy);
    comparisons += quick_sort_with_strategy(&mut back[1..], strategy);
    comparisons
}

fn choose_pivot<T: Ord>(arr: &[T], strategy: PivotStrategy) -> usize {
    let len = arr.len();
    match strategy {
        PivotStrategy::First => 0,
        PivotStrategy::Last => len - 1,
        PivotStrategy::MedianOfThree => {
            let middle = (len - 1) / 2;
            median_index(arr, 0, middle, len - 1)
        }
        PivotStrategy::Random => rand::thread_rng().gen_range(0..len),
    }
}

fn median_index<T: Ord>(arr: &[T], a: usize, b: usize, c: usize) -> usize {
    let mut candidates = [a, b, c];
    candidates.sort_by(|&i, &j| arr[i].cmp(&arr[j]));
    candidates[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_element() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(quick_sort_with_strategy(&mut empty, PivotStrategy::First), 0);

        let mut single = vec![1];
        assert_eq!(quick_sort_with_strategy(&mut single, PivotStrategy::First), 0);
        assert_eq!(single, vec![1]);
    }

    #[test]
    fn test_all_strategies_sort_correctly() {
        for strategy in [
            PivotStrategy::First,
            PivotStrategy::Last,
            PivotStrategy::MedianOfThree,
            PivotStrategy::Random,
        ] {
            let mut arr = vec![3, 4, 5, 1, 2];
            quick_sort_with_strategy(&mut arr, strategy);
            assert_eq!(arr, vec![1, 2, 3, 4, 5], "strategy {:?}", strategy);

            let mut reversed: Vec<i32> = (1..=7).rev().collect();
            quick_sort_with_strategy(&mut reversed, strategy);
            assert_eq!(reversed, (1..=7).collect::<Vec<_>>(), "strategy {:?}", strategy);
        }
    }

    #[test]
    fn test_duplicated_values() {
        let mut arr = vec![1, 2, 1, 5, 7, 6, 5];
        quick_sort(&mut arr);
        assert_eq!(arr, vec![1, 1, 2, 5, 5, 6, 7]);
    }

    #[test]
    fn test_comparison_count_on_sorted_input() {
        // First-element pivots degrade to quadratic on sorted input:
        // (n-1) + (n-2) + ... + 1 comparisons.
        let mut arr: Vec<i32> = (1..=10).collect();
        let comparisons = quick_sort_with_strategy(&mut arr, PivotStrategy::First);
        assert_eq!(comparisons, 45);

        // Median-of-three splits sorted input evenly instead.
        let mut arr: Vec<i32> = (1..=10).collect();
        let balanced = quick_sort_with_strategy(&mut arr, PivotStrategy::MedianOfThree);
        assert!(balanced < 45);
    }

    #[test]
    fn test_large_shuffled_input() {
        use rand::seq::SliceRandom;

        let mut arr: Vec<u32> = (0..10_000).collect();
        arr.shuffle(&mut rand::thread_rng());
        quick_sort(&mut arr);
        assert_eq!(arr, (0..10_000).collect::<Vec<_>>());
    }
}
