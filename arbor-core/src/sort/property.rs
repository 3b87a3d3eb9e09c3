//! Property-based tests for the in-place heap sort.
//!
//! Checks the sort against the standard library as an oracle: the output
//! must be a non-decreasing permutation of the input. Equal keys are
//! deliberately not compared by identity — the sort is unstable and a
//! stability assertion would be wrong.

use proptest::prelude::*;

use super::heap_sort;

proptest! {
    #[test]
    fn output_is_non_decreasing(mut values in prop::collection::vec(any::<i64>(), 0..512)) {
        heap_sort(&mut values);
        prop_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn output_is_a_permutation_of_the_input(
        mut values in prop::collection::vec(any::<i64>(), 0..512),
    ) {
        let mut expected = values.clone();
        expected.sort_unstable();
        heap_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    // Narrow value range to force heavy key duplication.
    #[test]
    fn handles_duplicate_heavy_inputs(
        mut values in prop::collection::vec(0_u8..4, 0..256),
    ) {
        let mut expected = values.clone();
        expected.sort_unstable();
        heap_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn is_idempotent(mut values in prop::collection::vec(any::<i32>(), 0..256)) {
        heap_sort(&mut values);
        let once = values.clone();
        heap_sort(&mut values);
        prop_assert_eq!(values, once);
    }
}
