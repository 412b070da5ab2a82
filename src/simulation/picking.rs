use crate::physics::nucleus::Nucleus;
use crate::physics::particle::Particle;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the nearest hit in front of the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Index of the closest nucleon hit by `ray`.
pub fn pick_nucleon(ray: &Ray, nucleus: &Nucleus, radius: f32) -> Option<usize> {
    nucleus
        .nucleons()
        .iter()
        .enumerate()
        .filter_map(|(i, nucleon)| {
            ray.intersect_sphere(nucleon.position(), radius)
                .map(|distance| (i, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::nucleus::NucleusBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ray_hits_sphere_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let distance = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((distance - 9.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert_eq!(ray.intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0), None);
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert_eq!(ray.intersect_sphere(Vec3::ZERO, 1.0), None);
    }

    #[test]
    fn picks_closest_nucleon() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let nucleus = NucleusBuilder::new(6, 6).jitter(0.0).build(&mut rng);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z);

        let picked = pick_nucleon(&ray, &nucleus, 2.0).unwrap();
        let picked_distance = ray
            .intersect_sphere(nucleus.nucleons()[picked].position(), 2.0)
            .unwrap();
        for nucleon in nucleus.nucleons() {
            if let Some(distance) = ray.intersect_sphere(nucleon.position(), 2.0) {
                assert!(picked_distance <= distance);
            }
        }
    }

    #[test]
    fn narrow_ray_through_center_picks_first_nucleon() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let nucleus = NucleusBuilder::new(6, 6).jitter(0.0).build(&mut rng);
        // index 0 sits at the origin; every other nucleon is off the z axis
        let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z);
        assert_eq!(pick_nucleon(&ray, &nucleus, 0.2), Some(0));
    }

    #[test]
    fn empty_space_picks_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let nucleus = NucleusBuilder::new(6, 6).build(&mut rng);
        let ray = Ray::new(Vec3::new(50.0, 50.0, 20.0), Vec3::NEG_Z);
        assert_eq!(pick_nucleon(&ray, &nucleus, 0.3), None);
    }
}
