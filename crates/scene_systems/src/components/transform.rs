//! Scene root transform and the flattened render list

use crate::components::children::Children;
use crate::foundation::math::{Mat3, Transform2D};
use crate::render::RenderItem;

/// Root transform of a scene
///
/// Every child's local transform is composed with this one when the render
/// list is flattened. The list is rebuilt before each visible render.
#[derive(Debug, Default, Clone)]
pub struct SceneTransform {
    /// Scene-wide position, rotation and scale
    pub local: Transform2D,
    flat_render_list: Vec<RenderItem>,
}

impl SceneTransform {
    /// Identity root transform with an empty render list
    pub fn new() -> Self {
        Self::default()
    }

    /// World matrix of the scene root
    pub fn world_matrix(&self) -> Mat3 {
        self.local.to_matrix()
    }

    /// Rebuild the flattened render list from visible children, in child order
    ///
    /// `scene_alpha` is multiplied into each item; fully transparent children
    /// are skipped.
    pub fn rebuild_render_list(&mut self, children: &Children, scene_alpha: f32) -> &[RenderItem] {
        let root = self.world_matrix();

        self.flat_render_list.clear();
        self.flat_render_list.extend(
            children
                .iter()
                .filter(|(_, object)| object.visible)
                .map(|(id, object)| RenderItem {
                    id,
                    world: root * object.transform.to_matrix(),
                    alpha: object.alpha * scene_alpha,
                })
                .filter(|item| item.alpha > 0.0),
        );

        &self.flat_render_list
    }

    /// Render list as of the last rebuild
    pub fn flat_render_list(&self) -> &[RenderItem] {
        &self.flat_render_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;
    use crate::objects::{GameObject, ObjectKind, Text};
    use approx::assert_relative_eq;

    fn label(x: f32, y: f32) -> GameObject {
        GameObject::new(
            x,
            y,
            ObjectKind::Text(Text {
                content: String::new(),
                font_size: 10.0,
            }),
        )
    }

    #[test]
    fn test_render_list_follows_child_order_and_skips_hidden() {
        let mut children = Children::new();
        let a = children.add(label(0.0, 0.0));
        let hidden = children.add(label(1.0, 1.0));
        let c = children.add(label(2.0, 2.0));
        children.get_mut(hidden).unwrap().visible = false;

        let mut transform = SceneTransform::new();
        let ids: Vec<_> = transform
            .rebuild_render_list(&children, 1.0)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_root_transform_applied() {
        let mut children = Children::new();
        children.add(label(10.0, 0.0));

        let mut transform = SceneTransform::new();
        transform.local = Transform2D::from_position(100.0, 50.0);
        transform.rebuild_render_list(&children, 0.5);

        let item = &transform.flat_render_list()[0];
        let origin = item.world.transform_point(&Point2::origin());
        assert_relative_eq!(origin.x, 110.0);
        assert_relative_eq!(origin.y, 50.0);
        assert_relative_eq!(item.alpha, 0.5);
    }

    #[test]
    fn test_transparent_scene_yields_empty_list() {
        let mut children = Children::new();
        children.add(label(0.0, 0.0));
        let mut transform = SceneTransform::new();
        assert!(transform.rebuild_render_list(&children, 0.0).is_empty());
    }
}
