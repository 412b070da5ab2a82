pub mod app;
pub mod constants;
pub mod physics;
pub mod platform;
pub mod renderer;
pub mod simulation;
pub mod ui;
