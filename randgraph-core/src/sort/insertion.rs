//! Adjacent-swap insertion sort.

/// Sorts `items` in place by repeatedly swapping each element towards the
/// front while it is smaller than its left neighbour.
///
/// The sort is stable and quadratic.
///
/// # Examples
/// ```
/// use randgraph_core::insertion_sort;
///
/// let mut values = [4, 1, 3, 1];
/// insertion_sort(&mut values);
/// assert_eq!(values, [1, 1, 3, 4]);
/// ```
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for end in 1..items.len() {
        for index in (1..=end).rev() {
            if items[index] < items[index - 1] {
                items.swap(index, index - 1);
            } else {
                break;
            }
        }
    }
}
