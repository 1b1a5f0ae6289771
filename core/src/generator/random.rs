use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform sampler over any `rand` generator, seeded `SmallRng` by default.
#[derive(Clone, Debug)]
pub struct RandomSampler<R = SmallRng> {
    rng: R,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CellSampler for RandomSampler<R> {
    fn sample(&mut self, size: Coord) -> Result<Coord2> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let x = self.rng.random_range(0..size);
        let y = self.rng.random_range(0..size);
        Ok((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_bounds() {
        let mut sampler = RandomSampler::new(7);

        for size in 1..=12 {
            for _ in 0..200 {
                let coords = sampler.sample(size).unwrap();
                assert!(in_bounds(coords, size));
            }
        }
    }

    #[test]
    fn empty_board_cannot_be_sampled() {
        assert_eq!(RandomSampler::new(0).sample(0), Err(GameError::InvalidSize));
    }

    #[test]
    fn every_cell_is_reachable() {
        let mut sampler = RandomSampler::new(1);
        let mut seen = [[false; 3]; 3];

        for _ in 0..500 {
            let (x, y) = sampler.sample(3).unwrap();
            seen[usize::from(x)][usize::from(y)] = true;
        }

        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}
