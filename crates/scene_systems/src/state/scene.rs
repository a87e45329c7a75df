//! Scene-authored code

use thiserror::Error;

use crate::components::DataError;
use crate::objects::FactoryError;
use crate::state::context::SceneContext;
use crate::state::loader::LoaderError;

/// Errors raised by scene code
#[derive(Error, Debug)]
pub enum SceneError {
    /// Game logic error
    #[error("Game logic error: {0}")]
    Logic(String),

    /// Data store error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Object construction error
    #[error("Factory error: {0}")]
    Factory(#[from] FactoryError),

    /// Loader error
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
}

/// A scene's own logic
///
/// Implement this for your game states. The scene receives its context with
/// every injected service on each update, after all children have updated.
pub trait Scene {
    /// Advance the scene by one step
    ///
    /// # Arguments
    /// * `ctx` - The scene's services and components
    /// * `timestep` - Step length passed to the children, in seconds
    /// * `physics_step` - Physics step length, in seconds
    fn update(&mut self, ctx: &mut SceneContext, timestep: f32, physics_step: f32) -> Result<(), SceneError>;
}

impl<F> Scene for F
where
    F: FnMut(&mut SceneContext, f32, f32) -> Result<(), SceneError>,
{
    fn update(&mut self, ctx: &mut SceneContext, timestep: f32, physics_step: f32) -> Result<(), SceneError> {
        self(ctx, timestep, physics_step)
    }
}
