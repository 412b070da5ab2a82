use crate::constants::{STAR_COUNT, STAR_DEPTH, STAR_RADIUS, STAR_SEED};
use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, UnitSphere};

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    pub brightness: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: f32,
    pub depth: f32,
}

impl StarfieldConfig {
    pub const fn new(count: usize, radius: f32, depth: f32) -> Self {
        Self {
            count,
            radius,
            depth,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self::new(STAR_COUNT, STAR_RADIUS, STAR_DEPTH)
    }
}

/// Backdrop of points scattered through a spherical shell around the scene.
pub struct StarfieldSampler {
    rng: ChaCha8Rng,
}

impl StarfieldSampler {
    pub fn new() -> Self {
        Self::with_seed(STAR_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn sample(&mut self, config: StarfieldConfig) -> Vec<Star> {
        if config.count == 0 {
            return Vec::new();
        }

        let depth = config.depth.max(0.0);
        (0..config.count)
            .map(|_| {
                let direction: [f32; 3] = UnitSphere.sample(&mut self.rng);
                let direction = Vec3::from(direction);
                let distance = config.radius + depth * self.rng.gen_range(0.0f32..=1.0);
                Star {
                    position: direction * distance,
                    brightness: self.rng.gen_range(0.3f32..=1.0),
                }
            })
            .collect()
    }
}

impl Default for StarfieldSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_returns_points_inside_shell() {
        let mut sampler = StarfieldSampler::with_seed(1);
        let config = StarfieldConfig::new(500, 100.0, 50.0);
        let stars = sampler.sample(config);
        assert_eq!(stars.len(), 500);
        for star in &stars {
            let r = star.position.length();
            assert!((99.9..=150.1).contains(&r), "radius {r}");
            assert!((0.3..=1.0).contains(&star.brightness));
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let config = StarfieldConfig::new(16, 10.0, 5.0);
        let a = StarfieldSampler::with_seed(9).sample(config);
        let b = StarfieldSampler::with_seed(9).sample(config);
        let positions = |stars: &[Star]| stars.iter().map(|s| s.position).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn empty_config() {
        let mut sampler = StarfieldSampler::new();
        assert!(sampler.sample(StarfieldConfig::new(0, 100.0, 50.0)).is_empty());
    }
}
