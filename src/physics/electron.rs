use crate::constants::{INNER_SHELL_COLOR, OUTER_SHELL_COLOR, TRAIL_LENGTH};
use crate::physics::nucleus::ELEMENTARY_CHARGE;
use crate::physics::particle::Particle;
use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f32::consts::TAU;

pub const ELECTRON_MASS_AMU: f32 = 0.000_548_58;

/// Radius class an electron belongs to. Only affects colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shell {
    Inner,
    Outer,
}

impl Shell {
    pub fn color(self) -> Vec3 {
        match self {
            Shell::Inner => Vec3::from(INNER_SHELL_COLOR),
            Shell::Outer => Vec3::from(OUTER_SHELL_COLOR),
        }
    }
}

/// Fixed description of one circular orbit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSpec {
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub phase_offset: f32,
    /// Euler angles (XYZ order, radians) placing the orbit plane in world space.
    pub tilt: Vec3,
    pub shell: Shell,
}

impl OrbitSpec {
    pub fn new(radius: f32, angular_speed: f32, phase_offset: f32, tilt: Vec3, shell: Shell) -> Self {
        debug_assert!(radius > 0.0, "Orbit radius must be positive");
        Self {
            radius,
            angular_speed,
            phase_offset,
            tilt,
            shell,
        }
    }

    /// Orbital angle in `[0, 2π)` after `elapsed` seconds.
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        let angle = (self.angular_speed * elapsed + self.phase_offset).rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative remainders
        if angle >= TAU { 0.0 } else { angle }
    }

    /// Position in the orbit's own plane, before the tilt is applied.
    pub fn local_position(&self, elapsed: f32) -> Vec3 {
        let angle = self.angle_at(elapsed);
        Vec3::new(self.radius * angle.cos(), self.radius * angle.sin(), 0.0)
    }

    pub fn tilt_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, self.tilt.z)
    }

    pub fn world_position(&self, elapsed: f32) -> Vec3 {
        self.tilt_rotation() * self.local_position(elapsed)
    }

    /// Time for one revolution, or `None` for a stationary electron.
    pub fn period(&self) -> Option<f32> {
        (self.angular_speed != 0.0).then(|| TAU / self.angular_speed.abs())
    }

    /// Closed polyline tracing the orbit in world space; first point repeated at the end.
    pub fn path(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(3);
        let rotation = self.tilt_rotation();
        (0..=segments)
            .map(|i| {
                let angle = TAU * i as f32 / segments as f32;
                rotation * Vec3::new(self.radius * angle.cos(), self.radius * angle.sin(), 0.0)
            })
            .collect()
    }
}

/// Bounded history of recent positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Vec3> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Electron {
    orbit: OrbitSpec,
    position: Vec3,
    trail: Trail,
}

impl Electron {
    pub fn new(orbit: OrbitSpec) -> Self {
        Self {
            orbit,
            position: orbit.world_position(0.0),
            trail: Trail::new(TRAIL_LENGTH),
        }
    }

    pub fn orbit(&self) -> &OrbitSpec {
        &self.orbit
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Places the electron for the given clock reading. The result depends only
    /// on `elapsed`, never on how many frames preceded it.
    pub fn advance(&mut self, elapsed: f32) {
        self.position = self.orbit.world_position(elapsed);
        self.trail.push(self.position);
    }
}

impl Particle for Electron {
    fn mass(&self) -> f32 {
        ELECTRON_MASS_AMU
    }

    fn charge(&self) -> f32 {
        -ELEMENTARY_CHARGE
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    const EPS: f32 = 1e-4;

    fn angular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn inner_orbit_starts_on_x_axis() {
        let orbit = OrbitSpec::new(3.0, 2.0, 0.0, Vec3::ZERO, Shell::Inner);
        let p = orbit.local_position(0.0);
        assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn phase_offset_rotates_start() {
        let orbit = OrbitSpec::new(5.0, 1.5, FRAC_PI_2, Vec3::new(0.3, 0.2, 0.1), Shell::Outer);
        assert!((orbit.angle_at(0.0) - FRAC_PI_2).abs() < EPS);
        let p = orbit.local_position(0.0);
        assert!((p - Vec3::new(0.0, 5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn angle_wraps_into_full_turn() {
        let orbit = OrbitSpec::new(3.0, 2.0, 1.0, Vec3::ZERO, Shell::Inner);
        for step in 0..200 {
            let t = step as f32 * 0.37;
            let angle = orbit.angle_at(t);
            assert!((0.0..TAU).contains(&angle));
            assert!(angular_distance(angle, 2.0 * t + 1.0) < 1e-3);
        }
    }

    #[test]
    fn negative_speed_still_wraps() {
        let orbit = OrbitSpec::new(3.0, -2.0, 0.0, Vec3::ZERO, Shell::Inner);
        let angle = orbit.angle_at(1.0);
        assert!((0.0..TAU).contains(&angle));
        assert!(angular_distance(angle, -2.0) < EPS);
    }

    #[test]
    fn angle_is_periodic() {
        let orbit = OrbitSpec::new(5.0, 1.5, 0.4, Vec3::ZERO, Shell::Outer);
        let period = orbit.period().unwrap();
        for t in [0.0, 0.5, 1.7, 4.2] {
            assert!(angular_distance(orbit.angle_at(t), orbit.angle_at(t + period)) < 1e-3);
        }
        let still = OrbitSpec::new(5.0, 0.0, 0.4, Vec3::ZERO, Shell::Outer);
        assert_eq!(still.period(), None);
    }

    #[test]
    fn advance_is_frame_rate_independent() {
        let orbit = OrbitSpec::new(3.0, 2.0, 0.25, Vec3::new(FRAC_PI_3, 0.0, 0.0), Shell::Inner);
        let mut stepped = Electron::new(orbit);
        let mut single = Electron::new(orbit);

        let target = 3.3;
        for frame in 1..=200 {
            stepped.advance(target * frame as f32 / 200.0);
        }
        single.advance(target);

        assert!((stepped.position() - single.position()).length() < EPS);
    }

    #[test]
    fn tilt_keeps_radius_and_moves_plane() {
        let orbit = OrbitSpec::new(3.0, 2.0, FRAC_PI_2, Vec3::new(FRAC_PI_3, 0.0, 0.0), Shell::Inner);
        let world = orbit.world_position(0.0);
        assert!((world.length() - 3.0).abs() < EPS);
        // (0, 3, 0) rotated about X by π/3
        let expected = Vec3::new(0.0, 3.0 * FRAC_PI_3.cos(), 3.0 * FRAC_PI_3.sin());
        assert!((world - expected).length() < EPS);
    }

    #[test]
    fn path_is_closed_circle() {
        let orbit = OrbitSpec::new(5.0, 1.0, 0.0, Vec3::new(0.0, PI / 4.0, 0.0), Shell::Outer);
        let path = orbit.path(32);
        assert_eq!(path.len(), 33);
        assert!((path[0] - path[32]).length() < EPS);
        assert!(path.iter().all(|p| (p.length() - 5.0).abs() < EPS));
    }

    #[test]
    fn trail_is_bounded() {
        let orbit = OrbitSpec::new(3.0, 2.0, 0.0, Vec3::ZERO, Shell::Inner);
        let mut electron = Electron::new(orbit);
        for frame in 0..(TRAIL_LENGTH * 3) {
            electron.advance(frame as f32 * 0.016);
        }
        assert_eq!(electron.trail().len(), TRAIL_LENGTH);
        let newest = electron.trail().points().last().copied().unwrap();
        assert_eq!(newest, electron.position());
    }

    #[test]
    fn zero_capacity_trail_stays_empty() {
        let mut trail = Trail::new(0);
        trail.push(Vec3::ONE);
        assert!(trail.is_empty());
    }
}
