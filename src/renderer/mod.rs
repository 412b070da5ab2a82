pub mod buffer;
pub mod camera;
pub mod lines;
pub mod mesh;
pub mod points;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod scene;
pub mod spheres;
pub mod vertex;
