use {
    serde::{Serialize, Deserialize},
    rand::Rng,
    rand_distr::{Distribution, Poisson},
    crate::misc_types::*,
    crate::error::SimError,
};

/// How long an infection episode lasts, in days.
/// Drawn once whenever a node gets infected.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum DurationDistribution{
    /// `min + uniform integer in [0, spread)`
    Uniform{
        min: u32,
        spread: u32
    },
    /// `min + Poisson(mean)`
    ShiftedPoisson{
        min: u32,
        mean: f64
    },
}

impl Default for DurationDistribution{
    fn default() -> Self {
        Self::Uniform{
            min: DEFAULT_MIN_DURATION,
            spread: DEFAULT_DURATION_SPREAD
        }
    }
}

impl DurationDistribution{
    pub fn min_days(&self) -> u32
    {
        match self{
            Self::Uniform{min, ..} | Self::ShiftedPoisson{min, ..} => *min
        }
    }

    /// A duration of 0 would resolve a node on the very day it got infected,
    /// so at least one day is required.
    pub fn sampler(&self) -> Result<DurationSampler, SimError>
    {
        if self.min_days() == 0 {
            return Err(SimError::invalid("minimal infection duration has to be at least 1 day"));
        }
        match *self{
            Self::Uniform{min, spread} => Ok(DurationSampler::Uniform{min, spread}),
            Self::ShiftedPoisson{min, mean} => {
                let dist = Poisson::new(mean)
                    .map_err(|e| SimError::invalid(format!("poisson mean {mean}: {e}")))?;
                Ok(DurationSampler::Poisson{min, dist})
            }
        }
    }
}

/// Validated, ready to sample version of [`DurationDistribution`]
#[derive(Clone, Debug)]
pub enum DurationSampler{
    Uniform{
        min: u32,
        spread: u32
    },
    Poisson{
        min: u32,
        dist: Poisson<f64>
    },
}

impl DurationSampler{
    pub fn sample<R>(&self, rng: &mut R) -> u32
    where R: Rng + ?Sized
    {
        match self{
            Self::Uniform{min, spread} => {
                if *spread == 0 {
                    *min
                } else {
                    min.saturating_add(rng.gen_range(0..*spread))
                }
            },
            Self::Poisson{min, dist} => {
                let extra: f64 = dist.sample(rng);
                min.saturating_add(extra as u32)
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn default_is_ten_to_fourteen_days()
    {
        let sampler = DurationDistribution::default().sampler().unwrap();
        let mut rng = Pcg64::seed_from_u64(DEFAULT_SIR_SEED);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let d = sampler.sample(&mut rng);
            assert!((10..=14).contains(&d), "{d}");
            seen[(d - 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn zero_spread_is_constant()
    {
        let sampler = DurationDistribution::Uniform{min: 3, spread: 0}
            .sampler()
            .unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        assert!((0..100).all(|_| sampler.sample(&mut rng) == 3));
    }

    #[test]
    fn poisson_never_below_min()
    {
        let sampler = DurationDistribution::ShiftedPoisson{min: 7, mean: 4.0}
            .sampler()
            .unwrap();
        let mut rng = Pcg64::seed_from_u64(2);
        assert!((0..1000).all(|_| sampler.sample(&mut rng) >= 7));
    }

    #[test]
    fn huge_minimum_saturates()
    {
        let sampler = DurationDistribution::Uniform{min: u32::MAX - 1, spread: 5}
            .sampler()
            .unwrap();
        let mut rng = Pcg64::seed_from_u64(3);
        assert!((0..100).all(|_| sampler.sample(&mut rng) >= u32::MAX - 1));
    }

    #[test]
    fn invalid_parameters_are_rejected()
    {
        assert!(DurationDistribution::Uniform{min: 0, spread: 3}.sampler().is_err());
        assert!(DurationDistribution::ShiftedPoisson{min: 2, mean: -1.0}.sampler().is_err());
        assert!(DurationDistribution::ShiftedPoisson{min: 2, mean: f64::NAN}.sampler().is_err());
    }
}
