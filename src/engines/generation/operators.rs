use crate::types::{Alphabet, Genome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest magnitude sigma may take after adaptation.
pub const SIGMA_FLOOR: f64 = 0.01;

/// Largest magnitude sigma may take, initially or after adaptation.
pub const SIGMA_CEILING: f64 = 1.0e6;

/// Upper bound on the children one organism produces per generation.
pub const MAX_REPRODUCTION_COUNT: usize = 10_000;

/// Build the run's random generator; without a seed the current Unix time is
/// used. Returns the seed actually used so the run can be reproduced.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(|| chrono::Utc::now().timestamp().max(0) as u64);
    (StdRng::seed_from_u64(seed), seed)
}

/// Normal sample with mean 0 and standard deviation `|sigma|`
/// (Marsaglia polar method).
pub fn gaussian<R: Rng + ?Sized>(sigma: f64, rng: &mut R) -> f64 {
    loop {
        let u = rng.gen::<f64>() * 2.0 - 1.0;
        let v = rng.gen::<f64>() * 2.0 - 1.0;
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            return sigma.abs() * v * (-2.0 * s.ln() / s).sqrt();
        }
    }
}

/// Gaussian sample rounded to the nearest integer.
pub fn gaussian_offset<R: Rng + ?Sized>(sigma: f64, rng: &mut R) -> i64 {
    gaussian(sigma, rng).round() as i64
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen_range(0..alphabet.len())).collect()
}

/// Take up to `length` symbols of `seed` and fill the rest at random.
pub fn padded_genome<R: Rng>(seed: &[usize], length: usize, alphabet: &Alphabet, rng: &mut R) -> Genome {
    let mut genome: Genome = seed.iter().copied().take(length).collect();
    let missing = length - genome.len();
    genome.extend(random_genome(missing, alphabet, rng));
    genome
}

/// Shift every position by a Gaussian offset, wrapping around the alphabet.
/// Draws exactly one sample per position.
pub fn shift_genome<R: Rng>(genome: &mut Genome, sigma: f64, alphabet: &Alphabet, rng: &mut R) {
    for gene in genome.iter_mut() {
        *gene = alphabet.shift(*gene, gaussian_offset(sigma, rng));
    }
}

/// Add a Gaussian offset to the reproduction count, keeping it within
/// `1..=MAX_REPRODUCTION_COUNT`.
pub fn adapt_reproduction_count<R: Rng>(count: usize, sigma: f64, rng: &mut R) -> usize {
    let count = count.min(MAX_REPRODUCTION_COUNT) as i64;
    let adapted = count.saturating_add(gaussian_offset(sigma, rng));
    adapted.clamp(1, MAX_REPRODUCTION_COUNT as i64) as usize
}

/// Add a Gaussian offset to sigma itself, keeping its magnitude between
/// [`SIGMA_FLOOR`] and [`SIGMA_CEILING`]. The sign is kept.
pub fn adapt_sigma<R: Rng>(sigma: f64, rng: &mut R) -> f64 {
    let adapted = sigma + gaussian(sigma, rng);
    if adapted.abs() < SIGMA_FLOOR {
        SIGMA_FLOOR.copysign(adapted)
    } else if adapted.abs() > SIGMA_CEILING {
        SIGMA_CEILING.copysign(adapted)
    } else {
        adapted
    }
}

/// Point mutation: each position is replaced by a uniformly random symbol with
/// probability `rate_percent`/100.
pub fn mutate_uniform<R: Rng>(genome: &mut Genome, rate_percent: u32, alphabet: &Alphabet, rng: &mut R) {
    for gene in genome.iter_mut() {
        if rng.gen_range(0..100) < rate_percent {
            *gene = rng.gen_range(0..alphabet.len());
        }
    }
}
