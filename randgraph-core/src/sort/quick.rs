//! Hoare-partition quicksort with a middle-element pivot.

/// Sorts `items` in place with quicksort.
///
/// Each partition step picks the middle element as pivot, walks two cursors
/// towards each other swapping out-of-place pairs, then recurses into both
/// sides. The sort is not stable; the worst case is quadratic.
///
/// # Examples
/// ```
/// use randgraph_core::quick_sort;
///
/// let mut values = [9, 3, 7, 3, 1];
/// quick_sort(&mut values);
/// assert_eq!(values, [1, 3, 3, 7, 9]);
/// ```
pub fn quick_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let pivot = items[(items.len() - 1) / 2].clone();

    // `left` scans up from the front; `right` is one past the element the
    // back cursor points at, so it never underflows.
    let mut left = 0;
    let mut right = items.len();
    while left < right {
        while items[left] < pivot {
            left += 1;
        }
        while items[right - 1] > pivot {
            right -= 1;
        }
        if left < right {
            items.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }

    let (lower, upper) = items.split_at_mut(left);
    quick_sort(&mut lower[..right]);
    quick_sort(upper);
}
