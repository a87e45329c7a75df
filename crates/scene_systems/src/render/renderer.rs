//! Render-pass contract
//!
//! The low-level renderer lives outside this crate. Scene systems call it once
//! per camera per frame with the scene, its flattened render list, the
//! interpolation factor and the camera for that pass.

use thiserror::Error;

use crate::components::children::ChildId;
use crate::foundation::math::Mat3;
use crate::render::camera::Camera;
use crate::state::context::SceneContext;

/// One drawable entry of a scene's flattened render list
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    /// Child the entry was built from
    pub id: ChildId,
    /// Scene-space transform (scene root transform applied)
    pub world: Mat3,
    /// Effective alpha (object alpha times scene alpha)
    pub alpha: f32,
}

/// Rendering errors reported by a renderer
#[derive(Error, Debug)]
pub enum RenderError {
    /// Backend failure
    #[error("Render backend error: {0}")]
    Backend(String),
}

/// A render backend invoked once per camera pass
pub trait Renderer {
    /// Draw `render_list` for `scene` through `camera`
    fn render(
        &mut self,
        scene: &SceneContext,
        render_list: &[RenderItem],
        interpolation: f32,
        camera: &Camera,
    ) -> Result<(), RenderError>;
}

/// Renderer that draws nothing, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(
        &mut self,
        _scene: &SceneContext,
        _render_list: &[RenderItem],
        _interpolation: f32,
        _camera: &Camera,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
