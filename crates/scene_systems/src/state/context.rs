//! The scene context: every per-scene service in one value
//!
//! All services are constructed together by [`SceneContext::build`] when a
//! scene is initialized, then handed to scene code on every update and to
//! the renderer on every camera pass.

use crate::{
    assets::{AssetCache, TextureRegistry},
    components::{Children, Color, Data, SceneTransform},
    engine::GameHandle,
    events::EventDispatcher,
    foundation::shared::ReadHandle,
    objects::{GameObjectCreator, GameObjectFactory},
    state::{loader::Loader, settings::Settings, state_manager::StateManager, update_manager::UpdateManager},
};

/// Timing of the frame in progress
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInfo {
    /// Timestamp passed to `begin`, in milliseconds
    pub timestamp: f64,
    /// Frame delta passed to `begin`, in seconds
    pub delta: f32,
    /// Update steps run so far in this frame
    pub steps: u32,
    /// Frames begun since init
    pub frame: u64,
}

/// Services and components of one scene
#[derive(Debug)]
pub struct SceneContext {
    key: String,
    /// Handle to the engine
    pub game: GameHandle,
    /// Scene events
    pub events: EventDispatcher,
    /// Builds objects into `children`
    pub add: GameObjectFactory,
    /// Builds detached objects
    pub make: GameObjectCreator,
    /// Asset requests
    pub load: Loader,
    /// Children flagged for post-update work this frame
    pub updates: UpdateManager,
    /// Lifecycle requests for other scenes
    pub state: StateManager,
    /// Ordered game objects
    pub children: Children,
    /// Background, alpha and tint
    pub color: Color,
    /// Key/value store
    pub data: Data,
    /// Root transform and flattened render list
    pub transform: SceneTransform,
    /// Shared asset cache (read only)
    pub cache: ReadHandle<AssetCache>,
    /// Shared texture registry (read only)
    pub textures: ReadHandle<TextureRegistry>,
    settings: Settings,
    current_camera: Option<usize>,
    frame: FrameInfo,
}

impl SceneContext {
    /// Construct every per-scene service for one activation
    pub fn build(settings: Settings, game: &GameHandle) -> Self {
        let key = settings.key.clone();
        let make = GameObjectCreator::new(key.as_str(), game.textures().clone());

        Self {
            game: game.clone(),
            events: EventDispatcher::new(key.as_str()),
            add: GameObjectFactory::new(make.clone()),
            make,
            load: Loader::new(key.as_str()),
            updates: UpdateManager::new(key.as_str()),
            state: StateManager::new(key.as_str()),
            children: Children::new(),
            color: Color::new(),
            data: Data::new(),
            transform: SceneTransform::new(),
            cache: game.cache().clone(),
            textures: game.textures().clone(),
            settings,
            current_camera: None,
            frame: FrameInfo::default(),
            key,
        }
    }

    /// Scene key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolved settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings (visibility, viewport)
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub(crate) fn into_settings(self) -> Settings {
        self.settings
    }

    /// Index of the camera whose pass is in progress
    pub fn current_camera(&self) -> Option<usize> {
        self.current_camera
    }

    pub(crate) fn bind_camera(&mut self, index: Option<usize>) {
        self.current_camera = index;
    }

    /// Timing of the frame in progress
    pub fn frame(&self) -> &FrameInfo {
        &self.frame
    }

    pub(crate) fn frame_mut(&mut self) -> &mut FrameInfo {
        &mut self.frame
    }
}
