//! Helpers shared by the integration tests.

use std::ops::RangeInclusive;

use rand::Rng;

/// Random bytes with a length drawn from `lengths`.
pub fn generate_blob(lengths: RangeInclusive<usize>) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(lengths);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}
