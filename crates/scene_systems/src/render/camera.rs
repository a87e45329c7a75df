//! # 2D Camera
//!
//! A camera is a viewport rectangle on screen plus a view into the scene
//! (scroll, zoom, rotation). Cameras are composited in set order, so a camera
//! added later draws over earlier ones where their viewports overlap.
//!
//! ## Coordinate System
//! Screen space is in pixels with the origin at the top-left of the game
//! viewport. A world point maps to screen space as
//!
//! ```text
//! screen = viewport_origin + center + R(rotation) * zoom * (world - scroll - center)
//! ```
//!
//! where `center` is half the viewport size, so rotation and zoom pivot
//! around the middle of the viewport.

use crate::foundation::math::{Mat3, Point2, Vec2};
use crate::render::camera_set::CameraError;

/// View rectangle with position, size and view parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Viewport x offset in pixels
    pub x: f32,
    /// Viewport y offset in pixels
    pub y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Horizontal scroll in world units
    pub scroll_x: f32,
    /// Vertical scroll in world units
    pub scroll_y: f32,
    /// Rotation in radians
    pub rotation: f32,
    zoom: f32,
    scene: Option<String>,
    matrix: Mat3,
    rendering: bool,
    frames_rendered: u64,
}

impl Camera {
    /// Create a camera with the given viewport and a neutral view
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            rotation: 0.0,
            zoom: 1.0,
            scene: None,
            matrix: Mat3::identity(),
            rendering: false,
            frames_rendered: 0,
        }
    }

    /// Bind the camera to its owning scene (by key, no ownership)
    pub fn set_scene(&mut self, scene: impl Into<String>) {
        self.scene = Some(scene.into());
    }

    /// Key of the owning scene
    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    /// Set the viewport rectangle
    pub fn set_viewport(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// Viewport rectangle as `(x, y, width, height)`
    pub fn viewport(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Set the scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32) -> &mut Self {
        self.scroll_x = x;
        self.scroll_y = y;
        self
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor. Zoom must be positive and finite.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<&mut Self, CameraError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(CameraError::InvalidZoom(zoom));
        }
        self.zoom = zoom;
        Ok(self)
    }

    /// Set the rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Recompute the view matrix from the current viewport and view values
    fn compute_matrix(&self) -> Mat3 {
        let center = Vec2::new(self.width * 0.5, self.height * 0.5);
        let origin = Vec2::new(self.x, self.y);
        let scroll = Vec2::new(self.scroll_x, self.scroll_y);

        Mat3::new_translation(&(origin + center))
            * Mat3::new_rotation(self.rotation)
            * Mat3::new_scaling(self.zoom)
            * Mat3::new_translation(&-(scroll + center))
    }

    /// World-to-screen matrix as of the last `pre_render`
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Hook run before this camera's render pass
    pub fn pre_render(&mut self) {
        self.matrix = self.compute_matrix();
        self.rendering = true;
    }

    /// Hook run after this camera's render pass
    pub fn post_render(&mut self) {
        self.rendering = false;
        self.frames_rendered += 1;
    }

    /// Whether the camera is between `pre_render` and `post_render`
    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    /// Number of completed render passes
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Map a world point to screen space using the current view values
    pub fn world_to_screen(&self, world: Point2) -> Point2 {
        self.compute_matrix().transform_point(&world)
    }

    /// Map a screen point back into world space
    pub fn screen_to_world(&self, screen: Point2) -> Option<Point2> {
        self.compute_matrix()
            .try_inverse()
            .map(|inverse| inverse.transform_point(&screen))
    }

    /// Whether a screen point lies inside the viewport
    pub fn contains_point(&self, screen_x: f32, screen_y: f32) -> bool {
        screen_x >= self.x
            && screen_y >= self.y
            && screen_x < self.x + self.width
            && screen_y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_view_offsets_by_viewport() {
        let camera = Camera::new(100.0, 50.0, 200.0, 100.0);
        let p = camera.world_to_screen(Point2::new(10.0, 20.0));
        assert_relative_eq!(p.x, 110.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 70.0, epsilon = 1e-4);
    }

    #[test]
    fn test_scroll_moves_world_left() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_scroll(300.0, 0.0);
        let p = camera.world_to_screen(Point2::new(300.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zoom_pivots_on_center() {
        let mut camera = Camera::new(0.0, 0.0, 800.0, 600.0);
        camera.set_zoom(2.0).unwrap();

        let center = camera.world_to_screen(Point2::new(400.0, 300.0));
        assert_relative_eq!(center.x, 400.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, 300.0, epsilon = 1e-4);

        let right = camera.world_to_screen(Point2::new(500.0, 300.0));
        assert_relative_eq!(right.x, 600.0, epsilon = 1e-4);
    }

    #[test]
    fn test_screen_to_world_inverts() {
        let mut camera = Camera::new(20.0, 10.0, 400.0, 300.0);
        camera.set_scroll(35.0, -12.0).set_rotation(0.3);
        camera.set_zoom(1.5).unwrap();

        let world = Point2::new(123.0, 45.0);
        let back = camera.screen_to_world(camera.world_to_screen(world)).unwrap();
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_zoom_rejected() {
        let mut camera = Camera::new(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(camera.set_zoom(0.0), Err(CameraError::InvalidZoom(_))));
        assert!(camera.set_zoom(f32::INFINITY).is_err());
        assert_relative_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_render_hooks_track_pass() {
        let mut camera = Camera::new(0.0, 0.0, 10.0, 10.0);
        camera.set_scroll(5.0, 0.0);
        camera.pre_render();
        assert!(camera.is_rendering());
        assert_relative_eq!(camera.matrix()[(0, 2)], -5.0, epsilon = 1e-5);
        camera.post_render();
        assert!(!camera.is_rendering());
        assert_eq!(camera.frames_rendered(), 1);
    }

    #[test]
    fn test_contains_point() {
        let camera = Camera::new(10.0, 10.0, 100.0, 50.0);
        assert!(camera.contains_point(10.0, 10.0));
        assert!(camera.contains_point(109.0, 59.0));
        assert!(!camera.contains_point(110.0, 30.0));
        assert!(!camera.contains_point(5.0, 30.0));
    }
}
