use rand::{rngs::StdRng, RngCore, SeedableRng};
use rand_distr::{Distribution, LogNormal, Uniform};

/// Seeded generator, or seeded from entropy if none is given
pub fn create_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Integers drawn uniformly from `[0, max_value)`, duplicates included
pub fn random_values(count: usize, max_value: i64, rng: &mut dyn RngCore) -> Vec<i64> {
    let uniform = Uniform::new(0, max_value);
    (0..count).map(|_| uniform.sample(rng)).collect()
}

/// Skewed scores, many small values and a long tail
pub fn random_scores(count: usize, rng: &mut dyn RngCore) -> Vec<u32> {
    let log_normal = LogNormal::new(2., 1.).unwrap();
    (0..count)
        .map(|_| (log_normal.sample(rng) * 100.) as u32)
        .collect()
}
