//! Builds detached game objects
//!
//! The creator resolves texture keys against the game's texture registry and
//! returns objects that belong to no scene yet. [`GameObjectFactory`] wraps it
//! to add the objects to a scene's children directly.
//!
//! [`GameObjectFactory`]: crate::objects::GameObjectFactory

use thiserror::Error;

use crate::assets::{TextureHandle, TextureRegistry};
use crate::foundation::shared::ReadHandle;
use crate::objects::game_object::{GameObject, Image, ObjectKind, Sprite, Text, Updatable};

/// Object construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// No texture registered under the key
    #[error("Texture '{0}' is not registered")]
    MissingTexture(String),

    /// Sprite frame rate must be positive and finite
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    /// Sprites need at least one frame
    #[error("Sprite '{0}' has no frames")]
    NoFrames(String),
}

/// Per-scene builder of detached game objects
#[derive(Debug, Clone)]
pub struct GameObjectCreator {
    scene: String,
    textures: ReadHandle<TextureRegistry>,
}

impl GameObjectCreator {
    /// Create a creator for the scene `scene`
    pub fn new(scene: impl Into<String>, textures: ReadHandle<TextureRegistry>) -> Self {
        Self {
            scene: scene.into(),
            textures,
        }
    }

    /// Key of the owning scene
    pub fn scene(&self) -> &str {
        &self.scene
    }

    fn resolve(&self, texture_key: &str) -> Result<TextureHandle, FactoryError> {
        self.textures
            .read()
            .handle_of(texture_key)
            .ok_or_else(|| FactoryError::MissingTexture(texture_key.to_string()))
    }

    /// Build an image
    pub fn image(&self, x: f32, y: f32, texture_key: &str) -> Result<GameObject, FactoryError> {
        let texture = self.resolve(texture_key)?;
        Ok(GameObject::new(
            x,
            y,
            ObjectKind::Image(Image {
                texture_key: texture_key.to_string(),
                texture,
            }),
        ))
    }

    /// Build an animated sprite
    pub fn sprite(
        &self,
        x: f32,
        y: f32,
        texture_key: &str,
        frame_count: u32,
        frame_rate: f32,
    ) -> Result<GameObject, FactoryError> {
        if frame_count == 0 {
            return Err(FactoryError::NoFrames(texture_key.to_string()));
        }
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(FactoryError::InvalidFrameRate(frame_rate));
        }
        let texture = self.resolve(texture_key)?;
        Ok(GameObject::new(
            x,
            y,
            ObjectKind::Sprite(Sprite::new(texture_key.to_string(), texture, frame_count, frame_rate)),
        ))
    }

    /// Build a text label
    pub fn text(&self, x: f32, y: f32, content: impl Into<String>, font_size: f32) -> GameObject {
        GameObject::new(
            x,
            y,
            ObjectKind::Text(Text {
                content: content.into(),
                font_size,
            }),
        )
    }

    /// Wrap user-defined behaviour
    pub fn custom(&self, x: f32, y: f32, behaviour: impl Updatable + 'static) -> GameObject {
        GameObject::custom(x, y, behaviour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn creator_with(keys: &[&str]) -> (Rc<RefCell<TextureRegistry>>, GameObjectCreator) {
        let registry = Rc::new(RefCell::new(TextureRegistry::new()));
        for key in keys {
            registry.borrow_mut().add(Texture::new(*key, 8, 8));
        }
        let creator = GameObjectCreator::new("level", ReadHandle::new(&registry));
        (registry, creator)
    }

    #[test]
    fn test_image_resolves_texture() {
        let (registry, make) = creator_with(&["ship"]);
        let object = make.image(1.0, 2.0, "ship").unwrap();

        let expected = registry.borrow().handle_of("ship");
        match object.kind {
            ObjectKind::Image(image) => assert_eq!(Some(image.texture), expected),
            other => panic!("expected image, got {:?}", other),
        }
        assert_eq!(object.transform.position.x, 1.0);
    }

    #[test]
    fn test_missing_texture() {
        let (_registry, make) = creator_with(&[]);
        assert_eq!(
            make.image(0.0, 0.0, "nope").unwrap_err(),
            FactoryError::MissingTexture("nope".into())
        );
    }

    #[test]
    fn test_sprite_validation() {
        let (_registry, make) = creator_with(&["coin"]);
        assert!(matches!(make.sprite(0.0, 0.0, "coin", 0, 10.0), Err(FactoryError::NoFrames(_))));
        assert!(matches!(
            make.sprite(0.0, 0.0, "coin", 4, 0.0),
            Err(FactoryError::InvalidFrameRate(_))
        ));
        assert!(make.sprite(0.0, 0.0, "coin", 4, 12.0).unwrap().as_sprite().is_some());
    }
}
