// Scene units: orbit radii and nucleon sizes share one arbitrary length unit.
use std::f32::consts::PI;

// Nucleus
pub const CARBON_PROTONS: usize = 6;
pub const CARBON_NEUTRONS: usize = 6;
pub const NUCLEON_RADIUS: f32 = 0.3;
pub const NUCLEON_PACKING: f32 = 0.5; // r = NUCLEON_PACKING * cbrt(i)
pub const NUCLEON_JITTER: f32 = 0.1;
pub const NUCLEUS_SEED: u64 = 12;

// Electrons
pub const ELECTRON_RADIUS: f32 = 0.15;
pub const INNER_SHELL_RADIUS: f32 = 3.0;
pub const OUTER_SHELL_RADIUS: f32 = 5.0;
pub const INNER_SHELL_TILT: f32 = PI / 3.0;
pub const TRAIL_LENGTH: usize = 20;
pub const ORBIT_SEGMENTS: usize = 96;

// Colors (linear RGB)
pub const PROTON_COLOR: [f32; 3] = [0.9, 0.22, 0.2];
pub const NEUTRON_COLOR: [f32; 3] = [0.55, 0.6, 0.7];
pub const INNER_SHELL_COLOR: [f32; 3] = [0.25, 0.8, 1.0];
pub const OUTER_SHELL_COLOR: [f32; 3] = [0.55, 1.0, 0.45];
pub const ORBIT_PATH_ALPHA: f32 = 0.25;
pub const BACKGROUND_COLOR: [f64; 3] = [0.0, 0.0, 0.02];

// Camera rig
pub const CAMERA_DISTANCE: f32 = 12.0;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 30.0;
pub const CAMERA_FOVY_DEGREES: f32 = 60.0;
pub const CAMERA_ROTATE_SPEED: f32 = 0.005; // radians per pixel
pub const CAMERA_ZOOM_STEP: f32 = 0.9;

// Starfield
pub const STAR_COUNT: usize = 5_000;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_SEED: u64 = 42;

// Overlay
pub const CONTROLS_HINT: [&str; 3] = [
    "Left-drag: rotate",
    "Scroll: zoom",
    "Click nucleus: details",
];
