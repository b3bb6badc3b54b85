//! Reindexing planner for ordered collections.
//!
//! Categories, banners (per slot), homepage sections, homepage items (per
//! section), page blocks (per page), and product spec rows all carry an
//! integer `sort_order` that is kept dense from 0 within its scope. The
//! functions here only plan the writes; the caller persists them one UPDATE
//! per row, sequentially, with no enclosing transaction. A mid-sequence
//! failure therefore leaves a partially reindexed collection behind; the
//! next successful reindex repairs it.

use uuid::Uuid;

/// Plans the writes that make `positions` dense from 0, preserving the
/// current display order. Only rows whose `sort_order` actually changes are
/// returned.
pub fn compact(positions: &[(Uuid, i32)]) -> Vec<(Uuid, i32)> {
    positions
        .iter()
        .enumerate()
        .filter_map(|(index, &(id, current))| {
            let target = index as i32;
            (current != target).then_some((id, target))
        })
        .collect()
}

/// Plans the writes for an explicit new ordering, e.g. a drag-reorder PUT.
/// Every row gets its index in the submitted order.
pub fn assign_dense(order: &[Uuid]) -> Vec<(Uuid, i32)> {
    order
        .iter()
        .enumerate()
        .map(|(index, &id)| (id, index as i32))
        .collect()
}

/// Position for a row appended to the end of the collection.
pub fn next_position(positions: &[(Uuid, i32)]) -> i32 {
    positions.len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn dense_input_needs_no_writes() {
        let rows: Vec<_> = ids(4).into_iter().zip(0..4).collect();
        assert!(compact(&rows).is_empty());
    }

    #[test]
    fn deletion_gap_is_closed() {
        let ids = ids(3);
        // Row formerly at position 1 was deleted.
        let rows = vec![(ids[0], 0), (ids[1], 2), (ids[2], 3)];
        assert_eq!(compact(&rows), vec![(ids[1], 1), (ids[2], 2)]);
    }

    #[test]
    fn assign_dense_enumerates_submitted_order() {
        let ids = ids(3);
        let plan = assign_dense(&ids);
        assert_eq!(plan, vec![(ids[0], 0), (ids[1], 1), (ids[2], 2)]);
    }

    #[test]
    fn next_position_appends() {
        let rows: Vec<_> = ids(5).into_iter().zip(0..5).collect();
        assert_eq!(next_position(&rows), 5);
        assert_eq!(next_position(&[]), 0);
    }

    proptest! {
        /// Applying the compaction plan always yields positions 0..N-1 in the
        /// original display order.
        #[test]
        fn compaction_is_dense(orders in proptest::collection::vec(0i32..1000, 0..50)) {
            let mut rows: Vec<(Uuid, i32)> =
                orders.iter().map(|&o| (Uuid::new_v4(), o)).collect();
            rows.sort_by_key(|&(_, o)| o);

            let plan = compact(&rows);
            let mut applied = rows.clone();
            for (id, pos) in &plan {
                let row = applied.iter_mut().find(|(rid, _)| rid == id).unwrap();
                row.1 = *pos;
            }

            for (index, (id, pos)) in applied.iter().enumerate() {
                prop_assert_eq!(*pos, index as i32);
                prop_assert_eq!(*id, rows[index].0);
            }
        }

        /// Compaction of an already-compacted collection plans nothing.
        #[test]
        fn compaction_is_idempotent(orders in proptest::collection::vec(0i32..1000, 0..50)) {
            let mut rows: Vec<(Uuid, i32)> =
                orders.iter().map(|&o| (Uuid::new_v4(), o)).collect();
            rows.sort_by_key(|&(_, o)| o);

            let plan = compact(&rows);
            let mut applied = rows;
            for (id, pos) in &plan {
                let row = applied.iter_mut().find(|(rid, _)| rid == id).unwrap();
                row.1 = *pos;
            }
            prop_assert!(compact(&applied).is_empty());
        }

        /// A partially applied plan (simulating a mid-sequence failure) is
        /// fully repaired by the next compaction.
        #[test]
        fn partial_application_is_repairable(
            orders in proptest::collection::vec(0i32..1000, 1..50),
            applied_count in 0usize..50,
        ) {
            let mut rows: Vec<(Uuid, i32)> =
                orders.iter().map(|&o| (Uuid::new_v4(), o)).collect();
            rows.sort_by_key(|&(_, o)| o);

            let plan = compact(&rows);
            let mut partial = rows;
            for (id, pos) in plan.iter().take(applied_count) {
                let row = partial.iter_mut().find(|(rid, _)| rid == id).unwrap();
                row.1 = *pos;
            }

            // Re-read in display order, as the repository would.
            partial.sort_by_key(|&(_, o)| o);
            let repair = compact(&partial);
            let mut repaired = partial;
            for (id, pos) in &repair {
                let row = repaired.iter_mut().find(|(rid, _)| rid == id).unwrap();
                row.1 = *pos;
            }
            for (index, (_, pos)) in repaired.iter().enumerate() {
                prop_assert_eq!(*pos, index as i32);
            }
        }
    }
}
