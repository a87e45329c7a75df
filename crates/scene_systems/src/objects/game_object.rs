//! Game object model

use std::fmt;

use thiserror::Error;

use crate::assets::TextureHandle;
use crate::foundation::math::Transform2D;
use crate::objects::creator::FactoryError;

/// Failure of a single object's update
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpdateError {
    /// Timestep was negative or not finite
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f32),

    /// Object-specific failure
    #[error("Update failed: {0}")]
    Failed(String),
}

/// Capability of being advanced by a simulation step
pub trait Updatable {
    /// Advance by `timestep` seconds
    fn update(&mut self, timestep: f32) -> Result<(), UpdateError>;
}

/// Static textured quad
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Texture key
    pub texture_key: String,
    /// Registry handle the key resolved to at creation
    pub texture: TextureHandle,
}

impl Updatable for Image {
    fn update(&mut self, _timestep: f32) -> Result<(), UpdateError> {
        Ok(())
    }
}

/// Textured object cycling through animation frames
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Texture key
    pub texture_key: String,
    /// Registry handle the key resolved to at creation
    pub texture: TextureHandle,
    /// Number of animation frames
    pub frame_count: u32,
    /// Whether the animation wraps around
    pub looping: bool,
    frame_rate: f32,
    current_frame: u32,
    elapsed: f32,
    playing: bool,
}

impl Sprite {
    pub(crate) fn new(texture_key: String, texture: TextureHandle, frame_count: u32, frame_rate: f32) -> Self {
        Self {
            texture_key,
            texture,
            frame_count,
            frame_rate,
            looping: true,
            current_frame: 0,
            elapsed: 0.0,
            playing: true,
        }
    }

    /// Frames per second
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Change the playback speed. The rate must be positive and finite.
    pub fn set_frame_rate(&mut self, frame_rate: f32) -> Result<(), FactoryError> {
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(FactoryError::InvalidFrameRate(frame_rate));
        }
        self.frame_rate = frame_rate;
        Ok(())
    }

    /// Index of the frame currently shown
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Whether the animation is advancing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Restart the animation from the first frame
    pub fn play(&mut self) {
        self.current_frame = 0;
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Stop on the current frame
    pub fn stop(&mut self) {
        self.playing = false;
    }
}

impl Updatable for Sprite {
    fn update(&mut self, timestep: f32) -> Result<(), UpdateError> {
        if !(timestep.is_finite() && timestep >= 0.0) {
            return Err(UpdateError::InvalidTimestep(timestep));
        }
        if !self.playing || self.frame_count <= 1 {
            return Ok(());
        }

        let frame_time = 1.0 / self.frame_rate;
        self.elapsed += timestep;
        if self.elapsed < frame_time {
            return Ok(());
        }

        // Saturating cast: rates far above the timestep resolution stay finite
        let steps = (self.elapsed / frame_time).floor() as u64;
        self.elapsed %= frame_time;

        let frame_count = u64::from(self.frame_count);
        let current = u64::from(self.current_frame.min(self.frame_count - 1));
        if self.looping {
            self.current_frame = ((current + steps % frame_count) % frame_count) as u32;
        } else if steps >= frame_count - 1 - current {
            self.current_frame = self.frame_count - 1;
            self.playing = false;
            self.elapsed = 0.0;
        } else {
            self.current_frame = (current + steps) as u32;
        }

        Ok(())
    }
}

/// Text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Displayed text
    pub content: String,
    /// Font size in pixels
    pub font_size: f32,
}

impl Updatable for Text {
    fn update(&mut self, _timestep: f32) -> Result<(), UpdateError> {
        Ok(())
    }
}

/// Kind-specific payload of a game object
pub enum ObjectKind {
    /// Static image
    Image(Image),
    /// Animated sprite
    Sprite(Sprite),
    /// Text label
    Text(Text),
    /// User-defined behaviour
    Custom(Box<dyn Updatable>),
}

impl fmt::Debug for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(image) => f.debug_tuple("Image").field(image).finish(),
            Self::Sprite(sprite) => f.debug_tuple("Sprite").field(sprite).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A child of a scene
#[derive(Debug)]
pub struct GameObject {
    /// Local transform relative to the scene root
    pub transform: Transform2D,
    /// Whether the object is drawn
    pub visible: bool,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
    /// Kind-specific payload
    pub kind: ObjectKind,
}

impl GameObject {
    /// Create a visible, opaque object at `(x, y)`
    pub fn new(x: f32, y: f32, kind: ObjectKind) -> Self {
        Self {
            transform: Transform2D::from_position(x, y),
            visible: true,
            alpha: 1.0,
            kind,
        }
    }

    /// Wrap user-defined behaviour as a game object
    pub fn custom(x: f32, y: f32, behaviour: impl Updatable + 'static) -> Self {
        Self::new(x, y, ObjectKind::Custom(Box::new(behaviour)))
    }

    /// Sprite payload, if this is a sprite
    pub fn as_sprite(&self) -> Option<&Sprite> {
        match &self.kind {
            ObjectKind::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    /// Mutable sprite payload, if this is a sprite
    pub fn as_sprite_mut(&mut self) -> Option<&mut Sprite> {
        match &mut self.kind {
            ObjectKind::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    /// Short name of the kind, for logs
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ObjectKind::Image(_) => "image",
            ObjectKind::Sprite(_) => "sprite",
            ObjectKind::Text(_) => "text",
            ObjectKind::Custom(_) => "custom",
        }
    }
}

impl Updatable for GameObject {
    fn update(&mut self, timestep: f32) -> Result<(), UpdateError> {
        match &mut self.kind {
            ObjectKind::Image(image) => image.update(timestep),
            ObjectKind::Sprite(sprite) => sprite.update(timestep),
            ObjectKind::Text(text) => text.update(timestep),
            ObjectKind::Custom(behaviour) => behaviour.update(timestep),
        }
    }
}
