use soroban_sdk::{Env, Map, Vec};

use crate::error::Error;

/// Collisions tolerated per requested winner before the selector stops
/// drawing fresh stream values and probes linearly instead.
const MAX_RETRIES_PER_WINNER: u32 = 32;

/// Picks `count` pairwise-distinct offsets in `[0, pool_size)`.
///
/// Candidates come from the stream `mix(seed, 0), mix(seed, 1), ...`; a
/// candidate already taken is dropped and the next stream value tried. The
/// result depends only on `(seed, pool_size, count)`.
pub fn select_distinct(env: &Env, seed: u64, pool_size: u32, count: u32) -> Result<Vec<u32>, Error> {
    if pool_size < count {
        return Err(Error::InsufficientEntriesForDraw);
    }

    let mut chosen: Vec<u32> = Vec::new(env);
    let mut taken: Map<u32, bool> = Map::new(env);
    let retry_limit = count.saturating_mul(MAX_RETRIES_PER_WINNER);
    let mut rejected: u32 = 0;
    let mut stream: u64 = 0;

    while chosen.len() < count {
        let mut candidate = unbiased_range(mix(seed, stream), pool_size as u64) as u32;
        stream = stream.wrapping_add(1);

        if taken.contains_key(candidate) {
            rejected += 1;
            if rejected <= retry_limit {
                continue;
            }
            // pool_size >= count, so a free slot always exists
            while taken.contains_key(candidate) {
                candidate = (candidate + 1) % pool_size;
            }
        }

        taken.set(candidate, true);
        chosen.push_back(candidate);
    }

    Ok(chosen)
}

/// splitmix64 finalizer over `a + b`.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b).wrapping_add(0x9e37_79b9_7f4a_7c15);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Maps `x` into `[0, range)` without modulo bias. `range` must be nonzero.
fn unbiased_range(x: u64, range: u64) -> u64 {
    if range.is_power_of_two() {
        return x & (range - 1);
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;
    let mut round: u64 = 0;
    // values at or above the threshold would favour the low end of the range
    while value >= threshold {
        round += 1;
        value = mix(value, round);
    }
    value % range
}
