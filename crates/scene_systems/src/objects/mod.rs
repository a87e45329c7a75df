//! Game objects and the per-scene object factories
//!
//! Every child of a scene is a [`GameObject`]: common display properties plus
//! a kind-specific payload. Updating dispatches explicitly on the kind through
//! the [`Updatable`] capability.

pub mod game_object;
pub mod creator;
pub mod factory;

pub use game_object::{GameObject, Image, ObjectKind, Sprite, Text, Updatable, UpdateError};
pub use creator::{FactoryError, GameObjectCreator};
pub use factory::GameObjectFactory;
