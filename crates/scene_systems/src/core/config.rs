//! # Game and Scene Configuration
//!
//! Two layers of configuration feed a scene:
//!
//! - **Game Config**: engine-global values owned by the host, most importantly
//!   the viewport size every main camera is sized to.
//! - **Scene Config**: per-scene values supplied when a scene is registered.
//!   Every field except the key is optional; unset fields are filled from the
//!   game config when the scene is initialized.
//!
//! Both are serializable and can be loaded from TOML or RON via [`Config`].

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Game Configuration
///
/// Engine-global settings shared by every scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window or canvas title
    pub title: String,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Fixed simulation step in seconds
    pub fixed_step: f32,
    /// Upper bound of fixed steps run within one rendered frame
    pub max_steps_per_frame: u32,
}

impl GameConfig {
    /// Create a configuration with the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the fixed simulation step
    pub fn with_fixed_step(mut self, seconds: f32) -> Self {
        self.fixed_step = seconds;
        self
    }

    /// Set the per-frame step cap
    pub fn with_max_steps_per_frame(mut self, steps: u32) -> Self {
        self.max_steps_per_frame = steps;
        self
    }

    /// Viewport size as `(width, height)`
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::Invalid(format!("viewport width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!("viewport height must be positive, got {}", self.height)));
        }
        if !(self.fixed_step.is_finite() && self.fixed_step > 0.0) {
            return Err(ConfigError::Invalid(format!("fixed step must be positive, got {}", self.fixed_step)));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid("max steps per frame must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Scene Systems Application".to_string(),
            width: 800.0,
            height: 600.0,
            fixed_step: 1.0 / 60.0,
            max_steps_per_frame: 5,
        }
    }
}

impl Config for GameConfig {}

/// # Scene Configuration
///
/// Per-scene values. `None` means "not set here": the game config decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Unique scene key
    pub key: String,
    /// Viewport x offset
    pub x: Option<f32>,
    /// Viewport y offset
    pub y: Option<f32>,
    /// Viewport width
    pub width: Option<f32>,
    /// Viewport height
    pub height: Option<f32>,
    /// Whether the scene renders
    pub visible: Option<bool>,
    /// Whether the scene starts active
    pub active: Option<bool>,
}

impl SceneConfig {
    /// Create a configuration with only the key set
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set the viewport position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the viewport size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Set whether the scene starts active
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

impl Config for SceneConfig {}
