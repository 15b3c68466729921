use fnv::FnvHashSet as HashSet;
use tracing::debug;

use crate::random::RandomSource;

/// Draw `draws` ids uniformly from `0..=record_count` and deduplicate them.
///
/// The upper bound is inclusive: `record_count` itself can be drawn even
/// though no record carries that id, so callers must handle a miss. The
/// result may hold fewer than `draws` ids, in set iteration order.
pub fn select_ids<R: RandomSource>(rng: &mut R, record_count: usize, draws: usize) -> Vec<u32> {
    let hi = record_count as i64;
    let ids: HashSet<u32> = (0..draws).map(|_| rng.int_in(0, hi) as u32).collect();
    debug!(requested = draws, realized = ids.len(), "selected sample ids");
    ids.into_iter().collect()
}
