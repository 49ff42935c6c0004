//! Verifier for approximate closest-distance query results.
//!
//! Compares a result set computed by a spatial data structure against a
//! brute-force reference via a two-way containment check with distance
//! tolerances. Mismatches are reported through `tracing` so a failing
//! test shows every discrepancy, not just the first.

use std::fmt::Debug;

use tracing::warn;

use sphere_types::Angle;

/// Compare two sets of closest items, where `expected` was computed by
/// brute force (considering every candidate) and `actual` by a spatial
/// data structure. `max_size` bounds the number of items, `max_distance`
/// limits the distance to any item, and `max_error` is the error allowed
/// when selecting which items are closest.
///
/// Returns true when `actual` contains every sufficiently close expected
/// item and nothing the reference rules out.
pub fn check_distance_results<Id>(
    expected: &[(Angle, Id)],
    actual: &[(Angle, Id)],
    max_size: usize,
    max_distance: Angle,
    max_error: Angle,
) -> bool
where
    Id: PartialEq + Debug,
{
    let pruning_error = Angle::from_radians(1e-15);
    // Deliberately non-short-circuiting: report both directions.
    let missing_ok = check_result_set(
        actual,
        expected,
        max_size,
        max_distance,
        max_error,
        pruning_error,
        "missing",
    );
    let extra_ok = check_result_set(
        expected,
        actual,
        max_size,
        max_distance,
        max_error,
        Angle::ZERO,
        "extra",
    );
    missing_ok && extra_ok
}

/// Check that result set `x` contains all entries of `y` closer than the
/// applicable distance limit, and that `x` is sorted and duplicate-free.
fn check_result_set<Id>(
    x: &[(Angle, Id)],
    y: &[(Angle, Id)],
    max_size: usize,
    max_distance: Angle,
    max_error: Angle,
    max_pruning_error: Angle,
    label: &str,
) -> bool
where
    Id: PartialEq + Debug,
{
    let mut ok = true;

    if x.windows(2).any(|w| w[1].0 < w[0].0) {
        warn!(set = label, "result set is not sorted by distance");
        ok = false;
    }
    for (i, entry) in x.iter().enumerate() {
        if x[..i].contains(entry) {
            warn!(set = label, id = ?entry.1, "result set contains duplicates");
            ok = false;
        }
    }

    // Entries of y closer than this limit must appear in x.
    let limit = if x.len() < max_size {
        // x was not truncated by max_size, so it must hold everything up
        // to max_distance, less the pruning slack.
        max_distance - max_pruning_error
    } else if let Some(last) = x.last() {
        // x holds only the closest max_size entries, to within
        // max_error plus the pruning slack.
        last.0 - max_error - max_pruning_error
    } else {
        Angle::ZERO
    };

    for entry in y {
        if entry.0 < limit && x.iter().filter(|e| *e == entry).count() != 1 {
            warn!(
                set = label,
                distance = entry.0.radians(),
                id = ?entry.1,
                "result set mismatch"
            );
            ok = false;
        }
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(entries: &[(f64, u32)]) -> Vec<(Angle, u32)> {
        entries
            .iter()
            .map(|&(d, id)| (Angle::from_radians(d), id))
            .collect()
    }

    #[test]
    fn test_identical_sets_pass() {
        let set = results(&[(0.01, 1), (0.02, 2), (0.03, 3)]);
        assert!(check_distance_results(
            &set,
            &set,
            10,
            Angle::from_radians(0.1),
            Angle::ZERO,
        ));
    }

    #[test]
    fn test_missing_entry_fails() {
        let expected = results(&[(0.01, 1), (0.02, 2), (0.03, 3)]);
        let actual = results(&[(0.01, 1), (0.03, 3)]);
        assert!(!check_distance_results(
            &expected,
            &actual,
            10,
            Angle::from_radians(0.1),
            Angle::ZERO,
        ));
    }

    #[test]
    fn test_extra_entry_fails() {
        let expected = results(&[(0.01, 1)]);
        let actual = results(&[(0.01, 1), (0.02, 9)]);
        assert!(!check_distance_results(
            &expected,
            &actual,
            10,
            Angle::from_radians(0.1),
            Angle::ZERO,
        ));
    }

    #[test]
    fn test_entries_beyond_limit_may_differ() {
        // Both sets are size-limited; entries near the tail may differ by
        // up to max_error.
        let expected = results(&[(0.010, 1), (0.020, 2)]);
        let actual = results(&[(0.010, 1), (0.021, 5)]);
        assert!(check_distance_results(
            &expected,
            &actual,
            2,
            Angle::from_radians(0.1),
            Angle::from_radians(0.005),
        ));
    }

    #[test]
    fn test_unsorted_actual_fails() {
        let expected = results(&[(0.01, 1), (0.02, 2)]);
        let actual = results(&[(0.02, 2), (0.01, 1)]);
        assert!(!check_distance_results(
            &expected,
            &actual,
            10,
            Angle::from_radians(0.1),
            Angle::ZERO,
        ));
    }

    #[test]
    fn test_duplicate_actual_fails() {
        let expected = results(&[(0.01, 1)]);
        let actual = results(&[(0.01, 1), (0.01, 1)]);
        assert!(!check_distance_results(
            &expected,
            &actual,
            10,
            Angle::from_radians(0.1),
            Angle::ZERO,
        ));
    }
}
