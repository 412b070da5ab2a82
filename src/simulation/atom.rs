use crate::constants::{
    CARBON_NEUTRONS, CARBON_PROTONS, INNER_SHELL_RADIUS, INNER_SHELL_TILT, NUCLEUS_SEED,
    OUTER_SHELL_RADIUS,
};
use crate::physics::electron::{Electron, OrbitSpec, Shell};
use crate::physics::elements::Element;
use crate::physics::nucleus::{Nucleus, NucleusLayout};
use crate::physics::particle::Particle;
use glam::Vec3;
use std::f32::consts::PI;

/// Particle counts as currently composed, used by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtomCounts {
    pub protons: usize,
    pub neutrons: usize,
    pub electrons: usize,
}

pub struct Atom {
    element: Element,
    layout: NucleusLayout,
    electrons: Vec<Electron>,
}

impl Atom {
    pub fn new(element: Element, orbits: &[OrbitSpec], seed: u64) -> Self {
        let layout = NucleusLayout::new(
            element.default_proton_count(),
            element.default_neutron_count(),
            seed,
        );
        let electrons = orbits.iter().copied().map(Electron::new).collect();

        Self {
            element,
            layout,
            electrons,
        }
    }

    /// Carbon-12: six protons, six neutrons, two inner and four outer electrons.
    pub fn carbon() -> Self {
        let element = Element::carbon();
        debug_assert_eq!(element.default_proton_count(), CARBON_PROTONS);
        debug_assert_eq!(element.default_neutron_count(), CARBON_NEUTRONS);
        Self::new(element, &carbon_orbits(), NUCLEUS_SEED)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn nucleus(&self) -> &Nucleus {
        self.layout.nucleus()
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn counts(&self) -> AtomCounts {
        let nucleus = self.nucleus();
        AtomCounts {
            protons: nucleus.proton_count(),
            neutrons: nucleus.neutron_count(),
            electrons: self.electrons.len(),
        }
    }

    pub fn net_charge(&self) -> f32 {
        self.nucleus().charge() + self.electrons.iter().map(Particle::charge).sum::<f32>()
    }

    /// Changes the nucleon counts; the layout is regenerated only if they differ.
    pub fn set_nucleon_counts(&mut self, protons: usize, neutrons: usize) -> bool {
        self.layout.set_counts(protons, neutrons)
    }

    /// Moves every electron to its position at `elapsed` seconds.
    pub fn advance(&mut self, elapsed: f32) {
        for electron in &mut self.electrons {
            electron.advance(elapsed);
        }
    }
}

/// The six carbon orbits. Phase offsets are all distinct so no two
/// electrons move in lockstep.
pub fn carbon_orbits() -> [OrbitSpec; 6] {
    [
        OrbitSpec::new(
            INNER_SHELL_RADIUS,
            2.0,
            0.0,
            Vec3::new(INNER_SHELL_TILT, 0.0, 0.0),
            Shell::Inner,
        ),
        OrbitSpec::new(
            INNER_SHELL_RADIUS,
            2.0,
            PI,
            Vec3::new(-INNER_SHELL_TILT, 0.0, 0.0),
            Shell::Inner,
        ),
        OrbitSpec::new(
            OUTER_SHELL_RADIUS,
            1.5,
            PI / 2.0,
            Vec3::new(0.0, PI / 4.0, 0.0),
            Shell::Outer,
        ),
        OrbitSpec::new(
            OUTER_SHELL_RADIUS,
            1.5,
            3.0 * PI / 2.0,
            Vec3::new(0.0, -PI / 4.0, 0.0),
            Shell::Outer,
        ),
        OrbitSpec::new(
            OUTER_SHELL_RADIUS,
            1.2,
            PI / 4.0,
            Vec3::new(PI / 4.0, 0.0, PI / 4.0),
            Shell::Outer,
        ),
        OrbitSpec::new(
            OUTER_SHELL_RADIUS,
            1.2,
            5.0 * PI / 4.0,
            Vec3::new(-PI / 4.0, 0.0, -PI / 4.0),
            Shell::Outer,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_composition() {
        let atom = Atom::carbon();
        assert_eq!(
            atom.counts(),
            AtomCounts {
                protons: 6,
                neutrons: 6,
                electrons: 6,
            }
        );
        assert_eq!(atom.nucleus().mass_number(), 12);
        assert!(atom.net_charge().abs() < 1e-5);
    }

    #[test]
    fn shells_split_two_and_four() {
        let orbits = carbon_orbits();
        let inner: Vec<_> = orbits.iter().filter(|o| o.shell == Shell::Inner).collect();
        let outer: Vec<_> = orbits.iter().filter(|o| o.shell == Shell::Outer).collect();

        assert_eq!(inner.len(), 2);
        assert_eq!(outer.len(), 4);
        assert!(inner.iter().all(|o| o.radius == INNER_SHELL_RADIUS));
        assert!(outer.iter().all(|o| o.radius == OUTER_SHELL_RADIUS));
        assert_eq!(inner[0].tilt.x, -inner[1].tilt.x);
        assert!((inner[0].tilt.x.abs() - PI / 3.0).abs() < 1e-6);
    }

    #[test]
    fn outer_tilts_span_multiple_axes() {
        let orbits = carbon_orbits();
        let outer = orbits.iter().filter(|o| o.shell == Shell::Outer);
        let mut axes = [false; 3];
        for orbit in outer {
            for (axis, angle) in orbit.tilt.to_array().iter().enumerate() {
                axes[axis] |= *angle != 0.0;
            }
        }
        assert!(axes.iter().filter(|used| **used).count() >= 2);
    }

    #[test]
    fn phase_offsets_are_distinct() {
        let orbits = carbon_orbits();
        for (i, a) in orbits.iter().enumerate() {
            for b in orbits.iter().skip(i + 1) {
                assert_ne!(a.phase_offset, b.phase_offset);
            }
        }
    }

    #[test]
    fn advance_moves_every_electron_from_one_clock() {
        let mut atom = Atom::carbon();
        atom.advance(1.25);
        for electron in atom.electrons() {
            let expected = electron.orbit().world_position(1.25);
            assert!((electron.position() - expected).length() < 1e-5);
        }
    }

    #[test]
    fn nucleon_counts_update_overlay_counts() {
        let mut atom = Atom::carbon();
        assert!(!atom.set_nucleon_counts(6, 6));
        assert!(atom.set_nucleon_counts(6, 8));
        assert_eq!(atom.counts().neutrons, 8);
    }
}
