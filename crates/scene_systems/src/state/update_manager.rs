//! Per-frame list of children flagged for post-update work
//!
//! Scene code flags children whose render resources need refreshing this
//! frame (a changed text, a swapped texture). The list is cleared when the
//! next frame begins, so the renderer sees exactly this frame's flags.

use crate::components::children::ChildId;

/// Children flagged during the current frame
#[derive(Debug)]
pub struct UpdateManager {
    scene: String,
    list: Vec<ChildId>,
    processing: bool,
}

impl UpdateManager {
    /// Create an idle manager for the scene `scene`
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            list: Vec::new(),
            processing: false,
        }
    }

    /// Key of the owning scene
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Begin a frame: forget last frame's flags
    pub fn start(&mut self) {
        self.list.clear();
        self.processing = true;
    }

    /// End the frame
    pub fn stop(&mut self) {
        self.processing = false;
    }

    /// Flag a child. Returns false if it was already flagged this frame.
    pub fn add(&mut self, id: ChildId) -> bool {
        if self.list.contains(&id) {
            return false;
        }
        self.list.push(id);
        true
    }

    /// Children flagged this frame, in flag order
    pub fn list(&self) -> &[ChildId] {
        &self.list
    }

    /// Whether a frame is in progress
    pub fn is_processing(&self) -> bool {
        self.processing
    }
}
