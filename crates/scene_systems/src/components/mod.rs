//! Per-scene component bundle
//!
//! Each component is an independent aggregate scoped to one scene. None owns
//! another; the scene context holds all four side by side.

pub mod children;
pub mod color;
pub mod data;
pub mod transform;

pub use children::{ChildId, Children};
pub use color::{Color, ColorParseError};
pub use data::{Data, DataError, DataValue};
pub use transform::SceneTransform;
