//! Camera composition and the render-pass contract
//!
//! Scenes render through an ordered set of cameras. Each camera is one
//! render pass; the pass itself is delegated to a [`Renderer`] supplied by the
//! host, so no drawing happens in this crate.

pub mod camera;
pub mod camera_set;
pub mod renderer;

pub use camera::Camera;
pub use camera_set::{CameraError, CameraSet};
pub use renderer::{NullRenderer, RenderError, RenderItem, Renderer};
