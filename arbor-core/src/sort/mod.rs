//! In-place heap sort.
//!
//! The slice is treated as an implicit binary tree (index `i` has children
//! `2i + 1` and `2i + 2`). A build phase establishes the max-heap property
//! over the whole slice in O(n); the extraction phase then repeatedly swaps
//! the root maximum to the shrinking tail, giving O(n log n) overall with
//! O(1) auxiliary space. Comparisons are strictly-greater only, so equal
//! elements never trigger a swap; combined with root extraction this makes
//! the sort unstable.

#[cfg(test)]
mod property;

/// Sorts a slice in place into non-decreasing order using heap sort.
///
/// Empty and single-element slices are already sorted and are left
/// untouched. The sort is not stable: equal elements may be reordered.
///
/// # Examples
/// ```
/// use arbor_core::heap_sort;
///
/// let mut values = vec![4, 10, 3, 5, 1];
/// heap_sort(&mut values);
/// assert_eq!(values, [1, 3, 4, 5, 10]);
/// ```
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }

    // Build phase: heapify every internal node, deepest first.
    for root in (0..len / 2).rev() {
        sift_down(items, root, len);
    }

    // Extraction phase: move the current maximum to the tail and restore
    // the heap over the remaining prefix.
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end);
    }
}

/// Restores the max-heap property at `root` over `items[..heap_len]`.
///
/// Iterative rather than recursive so the call stack stays flat on large
/// inputs; behaviourally identical to the textbook recursive sift-down.
fn sift_down<T: Ord>(items: &mut [T], mut root: usize, heap_len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap_len {
            return;
        }

        let mut largest = root;
        if items[left] > items[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < heap_len && items[right] > items[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }
        items.swap(root, largest);
        root = largest;
    }
}
