//! Resolved scene settings
//!
//! Settings start as a snapshot of the scene config. At init they are merged
//! with the game config: game values fill only the fields the scene left
//! unset, explicit scene values always win.

use serde::Serialize;

use crate::core::config::{GameConfig, SceneConfig};

/// Position, size and visibility of a scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Scene key
    pub key: String,
    /// Viewport x offset
    pub x: f32,
    /// Viewport y offset
    pub y: f32,
    /// Viewport width
    pub width: f32,
    /// Viewport height
    pub height: f32,
    /// Whether the scene renders
    pub visible: bool,
    /// Whether the scene is active
    pub active: bool,
    #[serde(skip)]
    explicit: SceneConfig,
}

impl Settings {
    /// Snapshot a scene config. Unset sizes stay zero until [`Settings::init`].
    pub fn create(config: &SceneConfig) -> Self {
        Self {
            key: config.key.clone(),
            x: config.x.unwrap_or(0.0),
            y: config.y.unwrap_or(0.0),
            width: config.width.unwrap_or(0.0),
            height: config.height.unwrap_or(0.0),
            visible: config.visible.unwrap_or(true),
            active: config.active.unwrap_or(false),
            explicit: config.clone(),
        }
    }

    /// Fill every field the scene config left unset from the game config
    pub fn init(&mut self, game: &GameConfig) {
        let explicit = &self.explicit;

        self.x = explicit.x.unwrap_or(0.0);
        self.y = explicit.y.unwrap_or(0.0);
        self.width = explicit.width.unwrap_or(game.width);
        self.height = explicit.height.unwrap_or(game.height);
        self.visible = explicit.visible.unwrap_or(true);
        self.active = explicit.active.unwrap_or(false);
    }

    /// The scene config these settings were created from
    pub fn source(&self) -> &SceneConfig {
        &self.explicit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_fills_unset_size() {
        let mut settings = Settings::create(&SceneConfig::new("level"));
        assert_eq!(settings.width, 0.0);

        settings.init(&GameConfig::new(1024.0, 768.0));
        assert_eq!((settings.x, settings.y), (0.0, 0.0));
        assert_eq!((settings.width, settings.height), (1024.0, 768.0));
        assert!(settings.visible);
        assert!(!settings.active);
    }

    #[test]
    fn test_explicit_values_not_overridden() {
        let config = SceneConfig::new("minimap")
            .with_position(600.0, 10.0)
            .with_size(190.0, 140.0)
            .with_visible(false);
        let mut settings = Settings::create(&config);
        settings.init(&GameConfig::new(800.0, 600.0));

        assert_eq!((settings.x, settings.y), (600.0, 10.0));
        assert_eq!((settings.width, settings.height), (190.0, 140.0));
        assert!(!settings.visible);
    }

    #[test]
    fn test_reinit_follows_new_game_size() {
        let config = SceneConfig {
            width: Some(100.0),
            ..SceneConfig::new("level")
        };
        let mut settings = Settings::create(&config);
        settings.init(&GameConfig::new(800.0, 600.0));
        settings.width = 5.0;
        settings.init(&GameConfig::new(320.0, 240.0));

        assert_eq!(settings.width, 100.0);
        assert_eq!(settings.height, 240.0);
    }
}
