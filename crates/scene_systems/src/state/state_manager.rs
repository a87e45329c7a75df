//! Per-scene proxy to the global state manager
//!
//! Scene code asks for other scenes to start, stop, pause or resume. The
//! requests are queued here and drained by the host's state manager between
//! frames, so no scene is switched while another is mid-update.

/// A scene lifecycle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateRequest {
    /// Start (activate) a scene
    Start(String),
    /// Stop (tear down) a scene
    Stop(String),
    /// Pause a scene's updates
    Pause(String),
    /// Resume a paused scene
    Resume(String),
}

/// Queue of lifecycle requests issued by one scene
#[derive(Debug)]
pub struct StateManager {
    scene: String,
    requests: Vec<StateRequest>,
}

impl StateManager {
    /// Create a proxy for the scene `scene`
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            requests: Vec::new(),
        }
    }

    /// Key of the issuing scene
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Request that `key` starts
    pub fn start(&mut self, key: impl Into<String>) {
        self.requests.push(StateRequest::Start(key.into()));
    }

    /// Request that `key` stops
    pub fn stop(&mut self, key: impl Into<String>) {
        self.requests.push(StateRequest::Stop(key.into()));
    }

    /// Request that `key` pauses
    pub fn pause(&mut self, key: impl Into<String>) {
        self.requests.push(StateRequest::Pause(key.into()));
    }

    /// Request that `key` resumes
    pub fn resume(&mut self, key: impl Into<String>) {
        self.requests.push(StateRequest::Resume(key.into()));
    }

    /// Request that the issuing scene stops itself
    pub fn stop_self(&mut self) {
        let key = self.scene.clone();
        self.stop(key);
    }

    /// Requests waiting for the host
    pub fn pending(&self) -> &[StateRequest] {
        &self.requests
    }

    /// Hand every queued request to the host, in issue order
    pub fn drain(&mut self) -> Vec<StateRequest> {
        std::mem::take(&mut self.requests)
    }
}
