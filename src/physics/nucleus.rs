use crate::constants::{NEUTRON_COLOR, NUCLEON_JITTER, NUCLEON_PACKING, PROTON_COLOR};
use crate::physics::particle::Particle;
use glam::Vec3;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

pub const PROTON_MASS_AMU: f32 = 1.007_276;
pub const NEUTRON_MASS_AMU: f32 = 1.008_665;
pub const ELEMENTARY_CHARGE: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

impl NucleonKind {
    pub fn color(self) -> Vec3 {
        match self {
            NucleonKind::Proton => Vec3::from(PROTON_COLOR),
            NucleonKind::Neutron => Vec3::from(NEUTRON_COLOR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nucleon {
    position: Vec3,
    kind: NucleonKind,
}

impl Nucleon {
    pub fn new(position: Vec3, kind: NucleonKind) -> Self {
        Self { position, kind }
    }

    pub fn kind(&self) -> NucleonKind {
        self.kind
    }

    pub fn is_proton(&self) -> bool {
        self.kind == NucleonKind::Proton
    }
}

impl Particle for Nucleon {
    fn mass(&self) -> f32 {
        match self.kind {
            NucleonKind::Proton => PROTON_MASS_AMU,
            NucleonKind::Neutron => NEUTRON_MASS_AMU,
        }
    }

    fn charge(&self) -> f32 {
        match self.kind {
            NucleonKind::Proton => ELEMENTARY_CHARGE,
            NucleonKind::Neutron => 0.0,
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Nucleons in generation order: protons first, then neutrons.
#[derive(Clone, Debug, Default)]
pub struct Nucleus {
    nucleons: Vec<Nucleon>,
    proton_count: usize,
}

impl Nucleus {
    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn proton_count(&self) -> usize {
        self.proton_count
    }

    pub fn neutron_count(&self) -> usize {
        self.nucleons.len() - self.proton_count
    }

    pub fn mass_number(&self) -> usize {
        self.nucleons.len()
    }

    pub fn total_mass(&self) -> f32 {
        self.nucleons.iter().map(Particle::mass).sum()
    }

    pub fn charge(&self) -> f32 {
        self.nucleons.iter().map(Particle::charge).sum()
    }
}

pub struct NucleusBuilder {
    proton_count: usize,
    neutron_count: usize,
    jitter: f32,
}

impl NucleusBuilder {
    pub fn new(proton_count: usize, neutron_count: usize) -> Self {
        Self {
            proton_count,
            neutron_count,
            jitter: NUCLEON_JITTER,
        }
    }

    pub fn jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.abs();
        self
    }

    pub fn build<R: Rng>(&self, rng: &mut R) -> Nucleus {
        let total = self.proton_count + self.neutron_count;
        let nucleons = (0..total)
            .map(|i| {
                let kind = if i < self.proton_count {
                    NucleonKind::Proton
                } else {
                    NucleonKind::Neutron
                };
                let position = packed_position(i, total) + random_offset(rng, self.jitter);
                Nucleon::new(position, kind)
            })
            .collect();

        Nucleus {
            nucleons,
            proton_count: self.proton_count,
        }
    }
}

/// Radius of the packing shell that nucleon `index` sits on.
pub fn packing_radius(index: usize) -> f32 {
    NUCLEON_PACKING * (index as f32).cbrt()
}

/// Jitter-free position of nucleon `index` out of `total`.
///
/// Polar angle follows `acos(-1 + 2i/total)` and the azimuth winds
/// `sqrt(total * PI)` times faster, which spreads consecutive indices over the
/// sphere the way a Fibonacci lattice does.
pub fn packed_position(index: usize, total: usize) -> Vec3 {
    if total == 0 {
        return Vec3::ZERO;
    }

    let cos_phi = (-1.0 + 2.0 * index as f32 / total as f32).clamp(-1.0, 1.0);
    let phi = cos_phi.acos();
    let theta = (total as f32 * PI).sqrt() * phi;
    let r = packing_radius(index);

    Vec3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}

fn random_offset<R: Rng>(rng: &mut R, amplitude: f32) -> Vec3 {
    if amplitude == 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
        rng.gen_range(-amplitude..=amplitude),
    )
}

/// Memoized nucleus: rebuilt only when the requested counts change.
pub struct NucleusLayout {
    rng: ChaCha8Rng,
    nucleus: Nucleus,
    rebuilds: u64,
}

impl NucleusLayout {
    pub fn new(proton_count: usize, neutron_count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let nucleus = NucleusBuilder::new(proton_count, neutron_count).build(&mut rng);
        Self {
            rng,
            nucleus,
            rebuilds: 0,
        }
    }

    pub fn nucleus(&self) -> &Nucleus {
        &self.nucleus
    }

    /// Number of times the layout was regenerated after construction.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn set_counts(&mut self, proton_count: usize, neutron_count: usize) -> bool {
        if proton_count == self.nucleus.proton_count()
            && neutron_count == self.nucleus.neutron_count()
        {
            return false;
        }

        debug!("Rebuilding nucleus layout: {proton_count} protons, {neutron_count} neutrons");
        self.nucleus = NucleusBuilder::new(proton_count, neutron_count).build(&mut self.rng);
        self.rebuilds += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn partition_matches_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for protons in 0..8 {
            for neutrons in 0..8 {
                let nucleus = NucleusBuilder::new(protons, neutrons).build(&mut rng);
                assert_eq!(nucleus.nucleons().len(), protons + neutrons);
                assert_eq!(nucleus.proton_count(), protons);
                assert_eq!(nucleus.neutron_count(), neutrons);
                for (i, nucleon) in nucleus.nucleons().iter().enumerate() {
                    assert_eq!(nucleon.is_proton(), i < protons, "index {i}");
                }
            }
        }
    }

    #[test]
    fn carbon_nucleus_has_six_of_each() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let nucleus = NucleusBuilder::new(6, 6).build(&mut rng);
        let kinds: Vec<_> = nucleus.nucleons().iter().map(Nucleon::kind).collect();

        assert_eq!(kinds.len(), 12);
        assert!(kinds[..6].iter().all(|k| *k == NucleonKind::Proton));
        assert!(kinds[6..].iter().all(|k| *k == NucleonKind::Neutron));
        assert_eq!(nucleus.mass_number(), 12);
        assert!((nucleus.charge() - 6.0).abs() < EPS);
    }

    #[test]
    fn packed_radius_grows_with_cube_root() {
        let total = 40;
        let mut previous = 0.0;
        for i in 0..total {
            let r = packed_position(i, total).length();
            assert!((r - packing_radius(i)).abs() < 1e-4, "index {i}");
            assert!(r + 1e-4 >= previous, "index {i}");
            previous = r;
        }
    }

    #[test]
    fn packed_positions_are_finite_for_small_totals() {
        assert_eq!(packed_position(0, 0), Vec3::ZERO);
        assert_eq!(packed_position(0, 1), Vec3::ZERO);
        for total in 1..5 {
            for i in 0..total {
                assert!(packed_position(i, total).is_finite());
            }
        }
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let nucleus = NucleusBuilder::new(6, 6).build(&mut rng);
        for (i, nucleon) in nucleus.nucleons().iter().enumerate() {
            let offset = nucleon.position() - packed_position(i, 12);
            assert!(offset.abs().max_element() <= NUCLEON_JITTER + EPS, "index {i}");
        }
    }

    #[test]
    fn zero_jitter_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let nucleus = NucleusBuilder::new(2, 3).jitter(0.0).build(&mut rng);
        for (i, nucleon) in nucleus.nucleons().iter().enumerate() {
            assert_eq!(nucleon.position(), packed_position(i, 5));
        }
    }

    #[test]
    fn empty_nucleus() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let nucleus = NucleusBuilder::new(0, 0).build(&mut rng);
        assert!(nucleus.nucleons().is_empty());
        assert_eq!(nucleus.total_mass(), 0.0);
    }

    #[test]
    fn layout_rebuilds_only_on_count_change() {
        let mut layout = NucleusLayout::new(6, 6, 5);
        let before: Vec<Vec3> = layout.nucleus().nucleons().iter().map(|n| n.position()).collect();

        assert!(!layout.set_counts(6, 6));
        let after: Vec<Vec3> = layout.nucleus().nucleons().iter().map(|n| n.position()).collect();
        assert_eq!(before, after);
        assert_eq!(layout.rebuilds(), 0);

        assert!(layout.set_counts(6, 7));
        assert_eq!(layout.nucleus().mass_number(), 13);
        assert_eq!(layout.rebuilds(), 1);
    }
}
