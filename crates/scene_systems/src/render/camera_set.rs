//! Ordered camera collection with a guaranteed main camera
//!
//! Index order is composition order: cameras render first to last, so later
//! cameras draw on top. Index 0 is the main camera and the set is never
//! empty; the only way to remove cameras is [`CameraSet::reset`], which
//! truncates back to the main camera.

use thiserror::Error;

use crate::render::camera::Camera;

/// Camera errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// The set lost its main camera
    #[error("Camera set is empty; the main camera is missing")]
    Empty,

    /// Zoom must be positive and finite
    #[error("Invalid camera zoom: {0}")]
    InvalidZoom(f32),
}

/// Ordered, non-empty set of cameras
#[derive(Debug, Clone)]
pub struct CameraSet {
    cameras: Vec<Camera>,
}

impl CameraSet {
    /// Create a set holding only the main camera
    pub fn new(main: Camera) -> Self {
        Self { cameras: vec![main] }
    }

    /// Create a set from existing cameras; the first becomes the main camera
    pub fn from_cameras(cameras: Vec<Camera>) -> Result<Self, CameraError> {
        if cameras.is_empty() {
            return Err(CameraError::Empty);
        }
        Ok(Self { cameras })
    }

    /// The main camera (index 0)
    pub fn main(&self) -> &Camera {
        &self.cameras[0]
    }

    /// Mutable access to the main camera
    pub fn main_mut(&mut self) -> &mut Camera {
        &mut self.cameras[0]
    }

    /// Append a camera; it renders after every existing camera
    pub fn push(&mut self, camera: Camera) -> &mut Camera {
        let index = self.cameras.len();
        self.cameras.push(camera);
        &mut self.cameras[index]
    }

    /// Drop every camera but the main one and give it the full viewport
    pub fn reset(&mut self, viewport_width: f32, viewport_height: f32) -> Result<&mut Camera, CameraError> {
        if self.cameras.is_empty() {
            return Err(CameraError::Empty);
        }

        let removed = self.cameras.len() - 1;
        self.cameras.truncate(1);
        self.cameras.shrink_to(1);

        let main = &mut self.cameras[0];
        main.set_viewport(0.0, 0.0, viewport_width, viewport_height);
        log::debug!(
            "Camera reset: removed {} camera(s), main viewport {}x{}",
            removed,
            viewport_width,
            viewport_height
        );
        Ok(main)
    }

    /// Bind every camera to the owning scene
    pub fn bind_scene(&mut self, scene: &str) {
        for camera in &mut self.cameras {
            camera.set_scene(scene);
        }
    }

    /// Camera at `index`
    pub fn get(&self, index: usize) -> Option<&Camera> {
        self.cameras.get(index)
    }

    /// Mutable camera at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(index)
    }

    /// Number of cameras (always at least one)
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether the set holds no cameras
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Cameras in render order
    pub fn iter(&self) -> std::slice::Iter<'_, Camera> {
        self.cameras.iter()
    }

    /// Mutable cameras in render order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Camera> {
        self.cameras.iter_mut()
    }

    #[cfg(test)]
    pub(crate) fn empty_for_test() -> Self {
        Self { cameras: Vec::new() }
    }
}

impl<'a> IntoIterator for &'a CameraSet {
    type Item = &'a Camera;
    type IntoIter = std::slice::Iter<'a, Camera>;

    fn into_iter(self) -> Self::IntoIter {
        self.cameras.iter()
    }
}
