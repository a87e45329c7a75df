//! Texture registry
//!
//! Textures are stored in a slot map so handles stay valid while other
//! textures come and go, with a key index for name lookups.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a registered texture
    pub struct TextureHandle;
}

/// Texture metadata. Pixel data lives with the low-level renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Unique key
    pub key: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Texture {
    /// Create texture metadata
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self { key: key.into(), width, height }
    }
}

/// Registry of textures known to the game
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: SlotMap<TextureHandle, Texture>,
    by_key: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture. A texture with the same key is replaced.
    pub fn add(&mut self, texture: Texture) -> TextureHandle {
        if let Some(old) = self.by_key.remove(&texture.key) {
            log::debug!("Replacing texture '{}'", texture.key);
            self.textures.remove(old);
        }
        let key = texture.key.clone();
        let handle = self.textures.insert(texture);
        self.by_key.insert(key, handle);
        handle
    }

    /// Look up a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle)
    }

    /// Look up a texture by key
    pub fn get_by_key(&self, key: &str) -> Option<&Texture> {
        self.handle_of(key).and_then(|handle| self.textures.get(handle))
    }

    /// Handle registered for `key`
    pub fn handle_of(&self, key: &str) -> Option<TextureHandle> {
        self.by_key.get(key).copied()
    }

    /// Whether a texture is registered under `key`
    pub fn exists(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Unregister a texture
    pub fn remove(&mut self, key: &str) -> Option<Texture> {
        let handle = self.by_key.remove(key)?;
        self.textures.remove(handle)
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no textures are registered
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
