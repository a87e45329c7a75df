//! Per-scene asset request queue
//!
//! The loader only tracks what a scene asked for. Fetching and decoding are
//! the host's job; the host drains requests with [`Loader::start`] and fills
//! the shared asset cache itself.

use thiserror::Error;

/// Kind of asset requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Image, registered as a texture once loaded
    Image,
    /// UTF-8 text
    Text,
    /// Raw bytes
    Binary,
}

/// One queued asset request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Cache key the asset is stored under
    pub key: String,
    /// Source location
    pub url: String,
    /// Asset kind
    pub kind: AssetKind,
}

/// Loader errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The key is already queued or in flight
    #[error("Asset '{0}' is already requested")]
    DuplicateKey(String),

    /// Completion reported for a request that is not in flight
    #[error("Asset '{0}' is not being loaded")]
    NotInFlight(String),
}

/// Asset request queue scoped to one scene
#[derive(Debug)]
pub struct Loader {
    scene: String,
    queue: Vec<LoadRequest>,
    in_flight: Vec<LoadRequest>,
}

impl Loader {
    /// Create an empty loader for the scene `scene`
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            queue: Vec::new(),
            in_flight: Vec::new(),
        }
    }

    fn request(&mut self, key: &str, url: &str, kind: AssetKind) -> Result<(), LoaderError> {
        let known = self.queue.iter().chain(&self.in_flight).any(|r| r.key == key);
        if known {
            return Err(LoaderError::DuplicateKey(key.to_string()));
        }
        self.queue.push(LoadRequest {
            key: key.to_string(),
            url: url.to_string(),
            kind,
        });
        Ok(())
    }

    /// Queue an image
    pub fn image(&mut self, key: &str, url: &str) -> Result<(), LoaderError> {
        self.request(key, url, AssetKind::Image)
    }

    /// Queue a text file
    pub fn text(&mut self, key: &str, url: &str) -> Result<(), LoaderError> {
        self.request(key, url, AssetKind::Text)
    }

    /// Queue a binary file
    pub fn binary(&mut self, key: &str, url: &str) -> Result<(), LoaderError> {
        self.request(key, url, AssetKind::Binary)
    }

    /// Move queued requests in flight and hand them to the host
    pub fn start(&mut self) -> Vec<LoadRequest> {
        let started = std::mem::take(&mut self.queue);
        if !started.is_empty() {
            log::debug!("[{}] loader started {} request(s)", self.scene, started.len());
        }
        self.in_flight.extend(started.iter().cloned());
        started
    }

    /// Mark an in-flight request as done
    pub fn complete(&mut self, key: &str) -> Result<LoadRequest, LoaderError> {
        let index = self
            .in_flight
            .iter()
            .position(|r| r.key == key)
            .ok_or_else(|| LoaderError::NotInFlight(key.to_string()))?;
        Ok(self.in_flight.remove(index))
    }

    /// Whether requests are in flight
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Queued plus in-flight requests
    pub fn total_pending(&self) -> usize {
        self.queue.len() + self.in_flight.len()
    }

    /// Forget every request
    pub fn reset(&mut self) {
        self.queue.clear();
        self.in_flight.clear();
    }
}
