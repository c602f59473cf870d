//! VideoMaster Layout
//!
//! Object-fit geometry for full-bleed media surfaces.
//!
//! This crate places a media rectangle of fixed aspect ratio inside a
//! container box. It implements:
//! - `cover` (fill the container, crop the overflowing axis)
//! - `contain` (fit inside the container, letterbox the slack axis)
//! - Backing surface sizing for canvas rendering

mod fit;
mod surface;

pub use fit::{FitPolicy, IntrinsicSize, LayoutResult, Viewport, resolve, try_resolve};
pub use surface::SurfaceSize;

/// Layout error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid object-fit policy {0:?}: expected \"cover\" or \"contain\"")]
    InvalidPolicy(String),
}
