//! Key/value cache of loaded assets

use std::collections::HashMap;

/// A loaded asset payload
#[derive(Debug, Clone, PartialEq)]
pub enum CachedAsset {
    /// Text file contents
    Text(String),
    /// Raw bytes
    Binary(Vec<u8>),
}

impl CachedAsset {
    /// Text contents, if this is a text asset
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    /// Size of the payload in bytes
    pub fn size_bytes(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }
}

/// Cache of loaded assets, shared by every scene of a game
#[derive(Debug, Default)]
pub struct AssetCache {
    entries: HashMap<String, CachedAsset>,
}

impl AssetCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an asset, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, asset: CachedAsset) -> Option<CachedAsset> {
        let key = key.into();
        log::trace!("Caching asset '{}' ({} bytes)", key, asset.size_bytes());
        self.entries.insert(key, asset)
    }

    /// Look up an asset by key
    pub fn get(&self, key: &str) -> Option<&CachedAsset> {
        self.entries.get(key)
    }

    /// Whether an asset is cached under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an asset
    pub fn remove(&mut self, key: &str) -> Option<CachedAsset> {
        self.entries.remove(key)
    }

    /// Number of cached assets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
