pub mod atom;
pub mod clock;
pub mod interaction;
pub mod picking;
pub mod starfield;
