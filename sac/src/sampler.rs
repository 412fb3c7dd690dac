use rand::{seq::SliceRandom, RngCore};

use crate::{error::ConfigError, SacError};

pub(crate) fn check_sample_size(point_count: usize, sample_size: usize) -> Result<(), SacError> {
    if sample_size < 2 {
        Err(ConfigError::SampleSizeTooSmall(sample_size).into())
    } else if sample_size > point_count {
        Err(ConfigError::SampleSizeTooLarge {
            sample_size,
            point_count,
        }
        .into())
    } else {
        Ok(())
    }
}

/// Draws uniform samples without replacement by reshuffling a full
/// permutation of the point indices and taking its leading part.
#[derive(Debug, Clone)]
pub struct Sampler {
    indices: Vec<usize>,
    sample_size: usize,
}

impl Sampler {
    pub fn new(point_count: usize, sample_size: usize) -> Result<Self, SacError> {
        check_sample_size(point_count, sample_size)?;
        Ok(Sampler {
            indices: (0..point_count).collect(),
            sample_size,
        })
    }

    /// Reshuffles the permutation and returns the first `sample_size` indices.
    pub fn draw<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &[usize] {
        self.indices.shuffle(rng);
        &self.indices[..self.sample_size]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::Sampler;
    use crate::{ConfigError, SacError};

    #[test]
    fn test_draw_without_replacement() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sampler = Sampler::new(10, 4).unwrap();

        for _ in 0..50 {
            let mut sample = sampler.draw(&mut rng).to_vec();
            assert_eq!(sample.len(), 4);
            sample.sort_unstable();
            sample.dedup();
            assert_eq!(sample.len(), 4);
            assert!(sample.iter().all(|&index| index < 10));
        }
    }

    #[test]
    fn test_full_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sampler = Sampler::new(5, 5).unwrap();
        let mut sample = sampler.draw(&mut rng).to_vec();
        sample.sort_unstable();
        assert_eq!(sample, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_every_index_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sampler = Sampler::new(6, 2).unwrap();
        let mut seen = [false; 6];
        for _ in 0..200 {
            for &index in sampler.draw(&mut rng) {
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_invalid_sample_size() {
        assert_eq!(
            Sampler::new(5, 1).unwrap_err(),
            SacError::InvalidConfiguration(ConfigError::SampleSizeTooSmall(1))
        );
        assert_eq!(
            Sampler::new(5, 6).unwrap_err(),
            SacError::InvalidConfiguration(ConfigError::SampleSizeTooLarge {
                sample_size: 6,
                point_count: 5
            })
        );
    }
}
