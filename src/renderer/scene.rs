use crate::constants::{ELECTRON_RADIUS, NUCLEON_RADIUS, ORBIT_PATH_ALPHA, ORBIT_SEGMENTS};
use crate::physics::particle::Particle;
use crate::renderer::vertex::{LineVertex, SphereInstance};
use crate::simulation::atom::Atom;

/// GPU-ready snapshot of the atom for one frame.
#[derive(Debug, Default)]
pub struct SceneFrame {
    pub spheres: Vec<SphereInstance>,
    pub lines: Vec<LineVertex>,
}

impl SceneFrame {
    pub fn from_atom(atom: &Atom) -> Self {
        let nucleus = atom.nucleus();
        let mut spheres = Vec::with_capacity(nucleus.nucleons().len() + atom.electrons().len());
        let mut lines = Vec::new();

        for nucleon in nucleus.nucleons() {
            spheres.push(SphereInstance::new(
                nucleon.position(),
                NUCLEON_RADIUS,
                nucleon.kind().color(),
                0.0,
            ));
        }

        for electron in atom.electrons() {
            let color = electron.orbit().shell.color();
            spheres.push(SphereInstance::new(electron.position(), ELECTRON_RADIUS, color, 1.0));

            let path = electron.orbit().path(ORBIT_SEGMENTS);
            for pair in path.windows(2) {
                lines.push(LineVertex::new(pair[0], color, ORBIT_PATH_ALPHA));
                lines.push(LineVertex::new(pair[1], color, ORBIT_PATH_ALPHA));
            }

            // Trail fades from transparent (oldest) to opaque (newest)
            let trail: Vec<_> = electron.trail().points().copied().collect();
            let steps = trail.len().max(1) as f32;
            for (i, pair) in trail.windows(2).enumerate() {
                let alpha_start = i as f32 / steps;
                let alpha_end = (i + 1) as f32 / steps;
                lines.push(LineVertex::new(pair[0], color, alpha_start));
                lines.push(LineVertex::new(pair[1], color, alpha_end));
            }
        }

        Self { spheres, lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_frame_has_every_particle() {
        let mut atom = Atom::carbon();
        atom.advance(0.0);
        atom.advance(0.1);
        let frame = SceneFrame::from_atom(&atom);

        assert_eq!(frame.spheres.len(), 12 + 6);
        // 6 closed paths of ORBIT_SEGMENTS segments plus one trail segment each
        assert_eq!(frame.lines.len(), 6 * ORBIT_SEGMENTS * 2 + 6 * 2);
        assert!(frame.lines.len() % 2 == 0);
    }

    #[test]
    fn electrons_are_emissive_nucleons_are_lit() {
        let atom = Atom::carbon();
        let frame = SceneFrame::from_atom(&atom);
        let (nucleons, electrons) = frame.spheres.split_at(12);
        assert!(nucleons.iter().all(|s| s.color_emissive[3] == 0.0));
        assert!(electrons.iter().all(|s| s.color_emissive[3] == 1.0));
    }
}
