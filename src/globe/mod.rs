pub mod classify;
pub mod frame;
pub mod project;
pub mod shade;
pub mod sphere;

pub use classify::{Boundary, LandLookup};
pub use frame::{render_frame, RenderConfig};
