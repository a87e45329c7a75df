//! Engine host
//!
//! The [`Game`] owns everything shared between scenes: the global
//! configuration, the asset cache and the texture registry. Scenes receive a
//! [`GameHandle`], which reads those resources but can never write them.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use thiserror::Error;

use crate::{
    assets::{AssetCache, TextureRegistry},
    core::config::{ConfigError, GameConfig},
    foundation::shared::ReadHandle,
};

/// Engine host owning the resources shared by all scenes
pub struct Game {
    config: Rc<RefCell<GameConfig>>,
    cache: Rc<RefCell<AssetCache>>,
    textures: Rc<RefCell<TextureRegistry>>,
}

impl Game {
    /// Create a game host from a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing game '{}' with {}x{} viewport",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            config: Rc::new(RefCell::new(config)),
            cache: Rc::new(RefCell::new(AssetCache::new())),
            textures: Rc::new(RefCell::new(TextureRegistry::new())),
        })
    }

    /// Read-only handle given to scenes
    pub fn handle(&self) -> GameHandle {
        GameHandle {
            config: ReadHandle::new(&self.config),
            cache: ReadHandle::new(&self.cache),
            textures: ReadHandle::new(&self.textures),
        }
    }

    /// Current configuration
    pub fn config(&self) -> Ref<'_, GameConfig> {
        self.config.borrow()
    }

    /// Resize the viewport
    ///
    /// Existing cameras keep their geometry; scenes pick up the new size the
    /// next time they reset their cameras.
    pub fn resize(&self, width: f32, height: f32) -> Result<(), EngineError> {
        let mut resized = self.config.borrow().clone();
        resized.width = width;
        resized.height = height;
        resized.validate()?;

        log::info!("Viewport resized to {}x{}", width, height);
        *self.config.borrow_mut() = resized;
        Ok(())
    }

    /// Mutable access to the asset cache (engine side only)
    pub fn cache_mut(&self) -> RefMut<'_, AssetCache> {
        self.cache.borrow_mut()
    }

    /// Mutable access to the texture registry (engine side only)
    pub fn textures_mut(&self) -> RefMut<'_, TextureRegistry> {
        self.textures.borrow_mut()
    }

    /// Number of live handles to the asset cache, including the game's own
    pub fn cache_handle_count(&self) -> usize {
        Rc::strong_count(&self.cache)
    }

    /// Number of live handles to the texture registry, including the game's own
    pub fn textures_handle_count(&self) -> usize {
        Rc::strong_count(&self.textures)
    }
}

/// Read-only handle to a [`Game`]
#[derive(Debug, Clone)]
pub struct GameHandle {
    config: ReadHandle<GameConfig>,
    cache: ReadHandle<AssetCache>,
    textures: ReadHandle<TextureRegistry>,
}

impl GameHandle {
    /// Current game configuration
    pub fn config(&self) -> Ref<'_, GameConfig> {
        self.config.read()
    }

    /// Current viewport size as `(width, height)`
    pub fn viewport(&self) -> (f32, f32) {
        self.config.read().viewport()
    }

    /// Shared asset cache
    pub fn cache(&self) -> &ReadHandle<AssetCache> {
        &self.cache
    }

    /// Shared texture registry
    pub fn textures(&self) -> &ReadHandle<TextureRegistry> {
        &self.textures
    }

    /// Whether both handles refer to the same game
    pub fn same_game(&self, other: &Self) -> bool {
        self.config.ptr_eq(&other.config)
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
