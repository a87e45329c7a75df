//! Builds game objects straight into a scene's children

use crate::components::children::{ChildId, Children};
use crate::objects::creator::{FactoryError, GameObjectCreator};
use crate::objects::game_object::{GameObject, Updatable};

/// Per-scene factory that adds what it builds to the scene's children
#[derive(Debug, Clone)]
pub struct GameObjectFactory {
    make: GameObjectCreator,
}

impl GameObjectFactory {
    /// Create a factory building through `make`
    pub fn new(make: GameObjectCreator) -> Self {
        Self { make }
    }

    /// Key of the owning scene
    pub fn scene(&self) -> &str {
        self.make.scene()
    }

    /// Add an already built object
    pub fn existing(&self, children: &mut Children, object: GameObject) -> ChildId {
        let id = children.add(object);
        log::trace!("[{}] added child {:?}", self.scene(), id);
        id
    }

    /// Add an image
    pub fn image(&self, children: &mut Children, x: f32, y: f32, texture_key: &str) -> Result<ChildId, FactoryError> {
        let object = self.make.image(x, y, texture_key)?;
        Ok(self.existing(children, object))
    }

    /// Add an animated sprite
    pub fn sprite(
        &self,
        children: &mut Children,
        x: f32,
        y: f32,
        texture_key: &str,
        frame_count: u32,
        frame_rate: f32,
    ) -> Result<ChildId, FactoryError> {
        let object = self.make.sprite(x, y, texture_key, frame_count, frame_rate)?;
        Ok(self.existing(children, object))
    }

    /// Add a text label
    pub fn text(&self, children: &mut Children, x: f32, y: f32, content: impl Into<String>, font_size: f32) -> ChildId {
        let object = self.make.text(x, y, content, font_size);
        self.existing(children, object)
    }

    /// Add user-defined behaviour
    pub fn custom(&self, children: &mut Children, x: f32, y: f32, behaviour: impl Updatable + 'static) -> ChildId {
        let object = self.make.custom(x, y, behaviour);
        self.existing(children, object)
    }
}
