use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of the two random choices the game makes: which movie to play and which hidden letter a hint
/// uncovers.
pub trait RandomSource {
    /// Uniformly random index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: rand::RngCore> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.random_range(0..len)
    }
}

/// Reproducible generator for a forced seed.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_os_rng()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_repeatable() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        let picks_a: Vec<_> = (0..16).map(|_| a.pick_index(7)).collect();
        let picks_b: Vec<_> = (0..16).map(|_| b.pick_index(7)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&pick| pick < 7));
    }

    #[test]
    fn scripted_source_wraps_picks() {
        let mut source = testing::ScriptedSource::new(&[5, 1]);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.pick_index(3), 1);
        assert_eq!(source.pick_index(3), 0);
    }
}
