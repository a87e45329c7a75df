//! # Scene Systems
//!
//! The per-scene runtime of a real-time rendering engine. A scene's
//! [`SceneSystems`] owns its settings, cameras and services, and drives the
//! frame contract with the scheduler: `begin` once per frame, `update` once
//! per fixed step, `render` once per frame through every camera in order.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_systems::prelude::*;
//!
//! let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
//!
//! let mut systems = SceneSystems::new(
//!     SceneConfig::new("level"),
//!     |ctx: &mut SceneContext, _timestep: f32, _physics_step: f32| -> Result<(), SceneError> {
//!         ctx.data.set("ticks", 1_i64)?;
//!         Ok(())
//!     },
//! );
//! systems.init(&game.handle()).unwrap();
//! systems.add_camera(600.0, 0.0, 200.0, 150.0).unwrap();
//!
//! let mut frame_loop = FixedStepLoop::from_config(&game.config()).unwrap();
//! let summary = frame_loop
//!     .tick(&mut systems, 16.0, 1.0 / 60.0, &mut NullRenderer)
//!     .unwrap();
//! assert!(summary.steps <= 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod assets;
pub mod events;
pub mod objects;
pub mod components;
pub mod render;
pub mod state;

mod engine;

pub use engine::{EngineError, Game, GameHandle};
pub use state::{Scene, SceneContext, SceneError, SceneSystems, SystemsError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Game, GameHandle, EngineError,
        core::config::{Config, ConfigFormat, GameConfig, SceneConfig},
        assets::{CachedAsset, Texture},
        components::{ChildId, DataValue},
        events::{EventArg, SceneEvent},
        objects::{GameObject, Updatable, UpdateError},
        render::{Camera, NullRenderer, RenderError, RenderItem, Renderer},
        state::{
            FixedStepLoop, Scene, SceneContext, SceneError, SceneSystems, StateRequest,
            SystemsError, UpdateReport,
        },
    };
}
