/// Sorts a slice with top-down merge sort.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let middle = arr.len() / 2;
    merge_sort(&mut arr[..middle]);
    merge_sort(&mut arr[middle..]);
    let merged = merge(&arr[..middle], &arr[middle..]);
    arr.clone_from_slice(&merged);
}

fn merge<T: Ord + Clone>(front: &[T], back: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(front.len() + back.len());
    let mut i = 0;
    let mut j = 0;

    while i < front.len() && j < back.len() {
        if front[i] <= back[j] {
            result.push(front[i].clone());
            i += 1;
        } else {
            result.push(back[j].clone());
            j += 1;
        }
    }
    result.extend_from_slice(&front[i..]);
    result.extend_from_slice(&back[j..]);

    result
}
