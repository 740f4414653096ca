#![forbid(unsafe_code)]

//! Instrumented quicksort: sorts in place and records every step.
//!
//! Hoare-style partitioning with the pivot taken from the first element of
//! each range. One [`SortEvent`] is appended to the trace for every pointer
//! advance and every swap, so the trace replays the sort exactly, step by
//! step. The left partition of each range is fully traced before the right
//! partition begins; that ordering is externally observable and preserved.
//!
//! # Preconditions (caller-guaranteed via `InputSet`)
//!
//! All values distinct and the count within the configured bounds. There
//! is no recovery path at this layer; violations are contract violations,
//! checked with `debug_assert!` only.
//!
//! # Scan asymmetry
//!
//! The left scan bound-checks against the array length (the left pointer
//! can legitimately run off the end, recorded as `left: None`); the right
//! scan carries no lower-bound check. The pivot sits at `a[start]` and the
//! right scan compares strictly greater, so with distinct values it stops
//! at or before `start` and never underruns. A property test with
//! adversarial orderings validates this instead of a bound check, which
//! would change the observable trace.

use crate::event::{SortEvent, SwapKind};
use crate::trace::Trace;

/// Sort `values` ascending in place, appending one event per step to
/// `trace`.
///
/// The trace is the primary externally visible effect: playback consumes
/// it sequentially to reconstruct the sort, while the sorted array itself
/// is a side effect on the input.
pub fn sort_traced(values: &mut [i32], trace: &mut Trace) {
    debug_assert!(all_distinct(values), "sorter requires distinct values");

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("sort_traced", len = values.len()).entered();

    if values.len() < 2 {
        return;
    }
    quicksort(values, 0, values.len() - 1, trace);

    #[cfg(feature = "tracing")]
    tracing::debug!(events = trace.len(), "trace recorded");
}

fn quicksort(a: &mut [i32], start: usize, end: usize, trace: &mut Trace) {
    if start >= end {
        return;
    }
    let pivot_index = partition(a, start, end, trace);

    // Left partition first: its events must fully precede the right's.
    if pivot_index > start {
        quicksort(a, start, pivot_index - 1, trace);
    }
    quicksort(a, pivot_index + 1, end, trace);
}

/// Partition `[start, end]` around `a[start]`, recording every step.
///
/// Returns the pivot's final index.
fn partition(a: &mut [i32], start: usize, end: usize, trace: &mut Trace) -> usize {
    let pivot = a[start];
    let mut left = start + 1;
    let mut right = end;

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("partition", start, end, pivot).entered();

    trace.push(scan_event(a, pivot, start, end, left, right));

    while left <= right {
        while left < a.len() && a[left] < pivot {
            left += 1;
            trace.push(scan_event(a, pivot, start, end, left, right));
        }
        // No lower bound on the right scan: `a[right] > pivot` is false at
        // `start` because the pivot lives there (see module docs).
        while a[right] > pivot {
            right -= 1;
            trace.push(scan_event(a, pivot, start, end, left, right));
        }
        if left < right {
            a.swap(left, right);
            trace.push(SortEvent {
                pivot,
                range_start: start,
                range_end: end,
                left: Some(a[left]),
                right: Some(a[right]),
                swap: SwapKind::LeftRight,
            });
        }
    }

    // Pivot placement: post-swap, the pivot sits at `right`.
    a.swap(right, start);
    trace.push(SortEvent {
        pivot,
        range_start: start,
        range_end: end,
        left: Some(a[right]),
        right: Some(a[start]),
        swap: SwapKind::RightPivot,
    });

    right
}

fn scan_event(
    a: &[i32],
    pivot: i32,
    start: usize,
    end: usize,
    left: usize,
    right: usize,
) -> SortEvent {
    SortEvent {
        pivot,
        range_start: start,
        range_end: end,
        left: a.get(left).copied(),
        right: a.get(right).copied(),
        swap: SwapKind::None,
    }
}

fn all_distinct(values: &[i32]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, v)| !values[..i].contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut values: Vec<i32>) -> (Vec<i32>, Trace) {
        let mut trace = Trace::new();
        sort_traced(&mut values, &mut trace);
        (values, trace)
    }

    #[test]
    fn sorts_ascending_and_ends_with_pivot_placement() {
        let (sorted, trace) = run(vec![5, 3, 8, 1, 9]);
        assert_eq!(sorted, vec![1, 3, 5, 8, 9]);
        assert!(!trace.is_empty());
        assert_eq!(trace.last().map(|e| e.swap), Some(SwapKind::RightPivot));
    }

    #[test]
    fn scenario_a_records_the_exact_step_count() {
        // [5,3,8,1,9]: 7 events for [0,4], 3 for [0,1], 3 for [3,4].
        let (_, trace) = run(vec![5, 3, 8, 1, 9]);
        assert_eq!(trace.len(), 13);
        // One left/right exchange plus three pivot placements.
        assert_eq!(trace.iter().filter(|e| e.is_swap()).count(), 4);
    }

    #[test]
    fn initial_event_shows_pointer_values() {
        let (_, trace) = run(vec![5, 3, 8, 1, 9]);
        let first = trace.iter().next().unwrap();
        assert_eq!(first.pivot, 5);
        assert_eq!((first.range_start, first.range_end), (0, 4));
        assert_eq!(first.left, Some(3));
        assert_eq!(first.right, Some(9));
        assert_eq!(first.swap, SwapKind::None);
    }

    #[test]
    fn already_sorted_input_never_swaps_left_right() {
        let (sorted, trace) = run(vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert!(
            trace.iter().all(|e| e.swap != SwapKind::LeftRight),
            "no-op swaps must never appear"
        );
        // One pivot placement per partition call, even when left == right
        // == start: ranges [0,4], [1,4], [2,4], [3,4].
        let placements = trace
            .iter()
            .filter(|e| e.swap == SwapKind::RightPivot)
            .count();
        assert_eq!(placements, 4);
    }

    #[test]
    fn left_pointer_running_off_the_array_is_recorded_as_absent() {
        // Descending pivot-first input drives the left scan to the end.
        let (sorted, trace) = run(vec![20, 1, 2, 3, 4]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 20]);
        assert!(trace.iter().any(|e| e.left.is_none()));
    }

    #[test]
    fn right_pointer_value_is_always_present() {
        for values in [
            vec![5, 3, 8, 1, 9],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![10, 20, 1, 19, 2, 18, 3, 17, 4, 16],
        ] {
            let (_, trace) = run(values);
            assert!(trace.iter().all(|e| e.right.is_some()));
        }
    }

    #[test]
    fn same_input_yields_an_identical_trace() {
        let (_, first) = run(vec![12, 7, 19, 2, 15, 4]);
        let (_, second) = run(vec![12, 7, 19, 2, 15, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn left_partition_events_precede_right_partition_events() {
        let (_, trace) = run(vec![5, 3, 8, 1, 9]);
        // After the root partition places 5 at index 2, the sibling calls
        // cover [0,1] then [3,4]; every [0,1] event precedes every [3,4]
        // event.
        let left_last = trace
            .iter()
            .rposition(|e| (e.range_start, e.range_end) == (0, 1))
            .unwrap();
        let right_first = trace
            .iter()
            .position(|e| (e.range_start, e.range_end) == (3, 4))
            .unwrap();
        assert!(left_last < right_first);
    }
}
