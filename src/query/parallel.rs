//! Parallel consumption of query results
//!
//! Which positions match is decided sequentially, by draining the
//! composite index. Only the position -> row mapping is split: the
//! positions are cut into contiguous chunks, one scoped worker per chunk,
//! and the chunk results are concatenated in order. The output is
//! therefore in ascending position order no matter how workers interleave.

use std::panic;
use std::thread;

use crate::index::{Index, Position};
use crate::observability::log_debug;

use super::query::Query;

impl<T: Sync> Query<T> {
    /// Applies `f` to every matching row, possibly on several threads.
    ///
    /// Results are in ascending position order. Worker count follows the
    /// store's config; small results are mapped inline. A panic in `f`
    /// propagates to the caller with its original payload.
    ///
    /// `f` runs while the store's read lock is held, so it must not append
    /// to the same store; doing so deadlocks.
    pub fn par_map<R, F>(&self, f: F) -> Vec<R>
    where
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let positions: Vec<Position> = self.index().positions().collect();
        let workers = self.store().config().worker_count(positions.len());

        log_debug!(
            component = "query",
            event = "QUERY_PAR_MAP",
            positions = positions.len(),
            workers = workers,
        );

        let rows = self.store().read_rows();
        map_chunks(rows.as_slice(), &positions, workers, &f)
    }
}

fn map_chunks<T, R, F>(rows: &[T], positions: &[Position], workers: usize, f: &F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    if workers <= 1 || positions.len() <= 1 {
        return positions.iter().map(|&position| f(&rows[position])).collect();
    }

    let chunk_len = positions.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = positions
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&position| f(&rows[position]))
                        .collect::<Vec<R>>()
                })
            })
            .collect();

        let mut mapped = Vec::with_capacity(positions.len());
        for handle in handles {
            match handle.join() {
                Ok(part) => mapped.extend(part),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        mapped
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::panic::AssertUnwindSafe;
    use std::sync::Mutex;

    use super::*;
    use crate::store::{Store, StoreConfig};

    fn parallel_store(rows: u64) -> Store<u64> {
        let store = Store::with_config(StoreConfig {
            max_workers: Some(4),
            min_rows_per_worker: 16,
            ..StoreConfig::default()
        });
        store.extend(0..rows);
        store
    }

    #[test]
    fn test_map_chunks_preserves_order() {
        let rows: Vec<u64> = (0..1000).collect();
        let positions: Vec<Position> = (0..1000).filter(|p| p % 3 == 0).collect();
        let mapped = map_chunks(&rows[..], &positions, 4, &|row: &u64| row * 10);
        let expected: Vec<u64> = positions.iter().map(|&p| p as u64 * 10).collect();
        assert_eq!(mapped, expected);
    }

    #[test]
    fn test_map_chunks_more_workers_than_positions() {
        let rows = [7u8, 8, 9];
        let mapped = map_chunks(&rows[..], &[0, 2], 16, &|row: &u8| *row);
        assert_eq!(mapped, vec![7, 9]);
    }

    #[test]
    fn test_par_map_matches_sequential() {
        let store = parallel_store(10_000);
        let sevens = store.add_selector(|i| i % 7 == 0);
        let query = store.create_query().select(&sevens).unwrap();

        let parallel = query.par_map(|row| row * 2);
        let sequential: Vec<u64> = query.rows().map(|row| row * 2).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_par_map_uses_several_threads() {
        let store = parallel_store(4096);
        let threads = Mutex::new(HashSet::new());
        let query = store.create_query();

        let mapped = query.par_map(|row| {
            threads.lock().unwrap().insert(thread::current().id());
            *row
        });

        assert_eq!(mapped.len(), 4096);
        assert!(threads.lock().unwrap().len() > 1);
    }

    #[test]
    fn test_par_map_propagates_panic() {
        let store = parallel_store(1000);
        let query = store.create_query();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            query.par_map(|row| {
                if *row == 500 {
                    panic!("bad row");
                }
                *row
            })
        }));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"bad row"));
    }
}
