//! Scene Systems - the per-scene orchestrator
//!
//! Owns a scene's settings, camera set and context, and drives the frame
//! contract with the scheduler:
//!
//! ```text
//! init ──► begin ──► update (1..n) ──► render ──► begin ...
//!                                                   │
//!                                      shutdown ◄───┘
//! ```
//!
//! `begin` runs once per rendered frame, `update` once per fixed step (zero or
//! more per frame), `render` once per frame after the last update.

use thiserror::Error;

use crate::{
    components::ChildId,
    core::config::{ConfigError, SceneConfig},
    engine::GameHandle,
    objects::{Updatable, UpdateError},
    render::{Camera, CameraError, CameraSet, RenderError, Renderer},
    state::{
        context::SceneContext,
        scene::{Scene, SceneError},
        settings::Settings,
    },
};

/// Lifecycle of a scene's systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, `init` not yet called
    Uninitialized,
    /// Services built, no frame begun yet
    Initialized,
    /// Receiving frames
    Active,
    /// Released by `shutdown`
    TornDown,
}

/// Scene systems errors
#[derive(Error, Debug)]
pub enum SystemsError {
    /// The engine handed to `init` is not usable
    #[error("Scene '{scene}' cannot start with this engine: {source}")]
    InvalidEngine {
        /// Scene key
        scene: String,
        /// What was wrong with the engine configuration
        source: ConfigError,
    },

    /// `init` called while already initialized
    #[error("Scene '{0}' is already initialized")]
    AlreadyInitialized(String),

    /// Frame call made before `init` or after `shutdown`
    #[error("Scene '{0}' is not initialized")]
    NotInitialized(String),

    /// Camera set error
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    /// Scene update callback failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Renderer failed during a camera pass
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// A child whose update failed
#[derive(Debug, Clone, PartialEq)]
pub struct ChildFault {
    /// The failing child
    pub id: ChildId,
    /// Its position in the children list at the time
    pub index: usize,
    /// What went wrong
    pub error: UpdateError,
}

/// Outcome of one `update` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    /// Children whose update ran (failed ones included)
    pub children_updated: usize,
    /// Children whose update failed
    pub faults: Vec<ChildFault>,
}

impl UpdateReport {
    /// Whether every child updated cleanly
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Everything that exists only while the scene is initialized
struct Runtime {
    context: SceneContext,
    cameras: CameraSet,
}

/// Per-scene orchestrator
pub struct SceneSystems {
    key: String,
    config: SceneConfig,
    settings: Settings,
    scene: Box<dyn Scene>,
    runtime: Option<Runtime>,
    lifecycle: Lifecycle,
}

impl SceneSystems {
    /// Register a scene. Nothing is built until [`SceneSystems::init`].
    pub fn new(config: SceneConfig, scene: impl Scene + 'static) -> Self {
        let settings = Settings::create(&config);
        Self {
            key: config.key.clone(),
            config,
            settings,
            scene: Box::new(scene),
            runtime: None,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Scene key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current settings (resolved once initialized)
    pub fn settings(&self) -> &Settings {
        self.runtime
            .as_ref()
            .map_or(&self.settings, |runtime| runtime.context.settings())
    }

    /// The scene context, while initialized
    pub fn context(&self) -> Option<&SceneContext> {
        self.runtime.as_ref().map(|runtime| &runtime.context)
    }

    /// Mutable scene context, while initialized
    pub fn context_mut(&mut self) -> Option<&mut SceneContext> {
        self.runtime.as_mut().map(|runtime| &mut runtime.context)
    }

    /// The camera set, while initialized
    pub fn cameras(&self) -> Option<&CameraSet> {
        self.runtime.as_ref().map(|runtime| &runtime.cameras)
    }

    /// The main camera, while initialized
    pub fn main_camera(&self) -> Option<&Camera> {
        self.cameras().map(CameraSet::main)
    }

    fn runtime_mut(&mut self) -> Result<&mut Runtime, SystemsError> {
        match self.runtime.as_mut() {
            Some(runtime) => Ok(runtime),
            None => Err(SystemsError::NotInitialized(self.key.clone())),
        }
    }

    /// Activate the scene against `game`
    ///
    /// Resolves settings against the game config, builds every per-scene
    /// service, creates the main camera over the full viewport and injects
    /// it all into the scene context.
    pub fn init(&mut self, game: &GameHandle) -> Result<(), SystemsError> {
        if self.runtime.is_some() {
            return Err(SystemsError::AlreadyInitialized(self.key.clone()));
        }

        let game_config = game.config().clone();
        game_config.validate().map_err(|source| SystemsError::InvalidEngine {
            scene: self.key.clone(),
            source,
        })?;

        let mut settings = Settings::create(&self.config);
        settings.init(&game_config);

        let context = SceneContext::build(settings, game);
        let cameras = CameraSet::new(Camera::new(0.0, 0.0, game_config.width, game_config.height));

        self.inject(context, cameras);
        self.lifecycle = Lifecycle::Initialized;

        log::info!(
            "Scene '{}' initialized ({}x{} viewport)",
            self.key,
            game_config.width,
            game_config.height
        );
        Ok(())
    }

    /// Publish the built services and bind every camera to this scene
    fn inject(&mut self, context: SceneContext, mut cameras: CameraSet) {
        cameras.bind_scene(&self.key);
        log::debug!(
            "Scene '{}' injected: events, add, make, load, updates, state, children, color, data, transform, cache, textures, {} camera(s)",
            self.key,
            cameras.len()
        );
        self.runtime = Some(Runtime { context, cameras });
    }

    /// Per-frame hook, called once per rendered frame before any update
    pub fn begin(&mut self, timestamp: f64, frame_delta: f32) -> Result<(), SystemsError> {
        let runtime = self.runtime_mut()?;
        let context = &mut runtime.context;

        let frame = context.frame_mut();
        frame.timestamp = timestamp;
        frame.delta = frame_delta;
        frame.steps = 0;
        frame.frame += 1;

        context.updates.start();
        context.events.update_time(timestamp);
        context.events.dispatch();

        self.lifecycle = Lifecycle::Active;
        Ok(())
    }

    /// One simulation step: every child in order, then the scene callback
    ///
    /// A failing child is logged and reported, it does not stop the children
    /// after it. The scene callback still runs after a child failure.
    pub fn update(&mut self, timestep: f32, physics_step: f32) -> Result<UpdateReport, SystemsError> {
        let runtime = match self.runtime.as_mut() {
            Some(runtime) => runtime,
            None => return Err(SystemsError::NotInitialized(self.key.clone())),
        };
        let context = &mut runtime.context;

        let mut report = UpdateReport::default();
        for (index, (id, child)) in context.children.iter_mut().enumerate() {
            report.children_updated += 1;
            if let Err(error) = child.update(timestep) {
                log::warn!(
                    "Scene '{}': {} child {:?} at index {} failed to update: {}",
                    self.key,
                    child.kind_name(),
                    id,
                    index,
                    error
                );
                report.faults.push(ChildFault { id, index, error });
            }
        }

        context.frame_mut().steps += 1;
        self.scene.update(context, timestep, physics_step)?;

        Ok(report)
    }

    /// Render the scene through every camera, in camera order
    ///
    /// Draws nothing when the scene is not visible. Otherwise flattens the
    /// render list once, then for each camera runs its pre-render hook, binds
    /// it as the current camera, calls the renderer and runs its post-render
    /// hook. A renderer error ends the frame: remaining cameras are skipped.
    pub fn render(&mut self, interpolation: f32, renderer: &mut dyn Renderer) -> Result<(), SystemsError> {
        let Runtime { context, cameras } = self.runtime_mut()?;

        if !context.settings().visible {
            log::trace!("Scene '{}' invisible, render skipped", context.key());
            context.updates.stop();
            return Ok(());
        }

        let scene_alpha = context.color.alpha();
        context.transform.rebuild_render_list(&context.children, scene_alpha);

        let mut outcome = Ok(());
        for (index, camera) in cameras.iter_mut().enumerate() {
            camera.pre_render();
            context.bind_camera(Some(index));

            let result = renderer.render(context, context.transform.flat_render_list(), interpolation, camera);

            camera.post_render();
            if let Err(error) = result {
                log::error!("Scene '{}': camera {} render failed: {}", context.key(), index, error);
                outcome = Err(error);
                break;
            }
        }

        context.bind_camera(None);
        context.updates.stop();
        outcome.map_err(SystemsError::from)
    }

    /// Add a camera over the given viewport; it renders on top of the others
    pub fn add_camera(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<&mut Camera, SystemsError> {
        let key = self.key.clone();
        let runtime = self.runtime_mut()?;

        let mut camera = Camera::new(x, y, width, height);
        camera.set_scene(key);
        Ok(runtime.cameras.push(camera))
    }

    /// Drop every camera except the main one and reset it to the full viewport
    ///
    /// The viewport is read from the game at the time of the call.
    pub fn reset_cameras(&mut self) -> Result<&mut Camera, SystemsError> {
        let runtime = self.runtime_mut()?;
        let (width, height) = runtime.context.game.viewport();
        Ok(runtime.cameras.reset(width, height)?)
    }

    /// Tear the scene down
    ///
    /// Drops the context and cameras, releasing this scene's handles to the
    /// engine, its cache and its texture registry. Engine-owned objects are
    /// untouched. The systems can be initialized again afterwards.
    pub fn shutdown(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            self.settings = runtime.context.into_settings();
            log::info!("Scene '{}' shut down", self.key);
        }
        self.lifecycle = Lifecycle::TornDown;
    }
}

impl std::fmt::Debug for SceneSystems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneSystems")
            .field("key", &self.key)
            .field("lifecycle", &self.lifecycle)
            .field("cameras", &self.cameras().map(CameraSet::len))
            .finish()
    }
}
