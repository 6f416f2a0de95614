//! Coordinate-mapping and infinite-wrap engine for a scroll-coupled gallery.
//!
//! DOM boxes are projected onto planes at the camera's focal plane so that one
//! CSS pixel covers the same area on screen in both worlds. A smoothed scroll
//! offset moves the planes, and items that leave the viewport are re-homed one
//! gallery length away so the gallery loops forever. Nothing in this crate
//! touches the DOM or the GPU directly; see [`collab`] for the host seams.

pub mod bounds;
pub mod collab;
pub mod config;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod input;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scroll;
pub mod viewport;
pub mod wrap;

pub use bounds::*;
pub use collab::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gallery::*;
pub use input::*;
pub use scroll::*;
pub use viewport::*;
pub use wrap::*;

// Shaders bundled as string constants
pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");
