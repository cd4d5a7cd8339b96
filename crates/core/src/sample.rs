//! Reservoir sampling (Algorithm R): a single-pass streaming primitive,
//! parameterized by capacity, a source of uniform integers, and a stable
//! iteration order over input.

use rand::Rng;

/// Single-pass reservoir sample of `capacity` items from `items`, using
/// `rng` as the source of uniform integers. Preserves the relative order
/// in which retained items were first seen is not guaranteed (per
/// Algorithm R); callers needing stable output order should sort the
/// result by whatever index they attach to each item.
pub fn reservoir_sample<T, I, R>(items: I, capacity: usize, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut reservoir: Vec<T> = Vec::with_capacity(capacity);
    if capacity == 0 {
        return reservoir;
    }

    for (i, item) in items.into_iter().enumerate() {
        if i < capacity {
            reservoir.push(item);
        } else {
            let j = rng.gen_range(0..=i);
            if j < capacity {
                reservoir[j] = item;
            }
        }
    }
    reservoir
}
