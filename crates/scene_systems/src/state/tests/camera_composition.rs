//! Camera set composition and multi-camera rendering

use crate::components::ChildId;
use crate::core::config::{GameConfig, SceneConfig};
use crate::engine::Game;
use crate::render::{Camera, RenderError, RenderItem, Renderer};
use crate::state::{SceneContext, SceneError, SceneSystems, SystemsError};

/// One renderer call as seen from inside the call
#[derive(Debug, Clone, PartialEq)]
struct PassRecord {
    scene: String,
    viewport: (f32, f32, f32, f32),
    current_camera: Option<usize>,
    camera_rendering: bool,
    items: Vec<ChildId>,
}

#[derive(Default)]
struct RecordingRenderer {
    passes: Vec<PassRecord>,
    fail_on_pass: Option<usize>,
}

impl Renderer for RecordingRenderer {
    fn render(
        &mut self,
        scene: &SceneContext,
        render_list: &[RenderItem],
        _interpolation: f32,
        camera: &Camera,
    ) -> Result<(), RenderError> {
        self.passes.push(PassRecord {
            scene: scene.key().to_string(),
            viewport: camera.viewport(),
            current_camera: scene.current_camera(),
            camera_rendering: camera.is_rendering(),
            items: render_list.iter().map(|item| item.id).collect(),
        });

        if self.fail_on_pass == Some(self.passes.len() - 1) {
            return Err(RenderError::Backend("device lost".into()));
        }
        Ok(())
    }
}

fn idle(_ctx: &mut SceneContext, _timestep: f32, _physics_step: f32) -> Result<(), SceneError> {
    Ok(())
}

fn started(game: &Game, config: SceneConfig) -> SceneSystems {
    let mut systems = SceneSystems::new(config, idle);
    systems.init(&game.handle()).unwrap();
    systems
}

#[test]
fn test_init_creates_main_camera_over_viewport() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let systems = started(&game, SceneConfig::new("level"));

    let cameras = systems.cameras().unwrap();
    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras.main().viewport(), (0.0, 0.0, 800.0, 600.0));
    assert_eq!(cameras.main().scene(), Some("level"));
    assert_eq!(systems.main_camera(), cameras.get(0));
}

#[test]
fn test_reset_leaves_exactly_main_camera() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();

    for prior in [1usize, 2, 5] {
        let mut systems = started(&game, SceneConfig::new("level"));
        for _ in 1..prior {
            systems.add_camera(10.0, 10.0, 100.0, 100.0).unwrap();
        }
        assert_eq!(systems.cameras().unwrap().len(), prior);

        let main = systems.reset_cameras().unwrap();
        assert_eq!(main.viewport(), (0.0, 0.0, 800.0, 600.0));
        assert_eq!(systems.cameras().unwrap().len(), 1);
    }
}

#[test]
fn test_reset_keeps_main_camera_state() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("level"));

    systems.add_camera(0.0, 0.0, 200.0, 150.0).unwrap();
    systems.reset_cameras().unwrap().set_scroll(40.0, 0.0);

    let main = systems.main_camera().unwrap();
    assert_eq!(main.scroll_x, 40.0);
    assert_eq!(main.scene(), Some("level"));
}

#[test]
fn test_reset_reads_viewport_at_call_time() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("level"));
    systems.add_camera(0.0, 0.0, 50.0, 50.0).unwrap();

    game.resize(1024.0, 768.0).unwrap();
    let main = systems.reset_cameras().unwrap();

    assert_eq!(main.viewport(), (0.0, 0.0, 1024.0, 768.0));
}

#[test]
fn test_added_cameras_keep_geometry_and_order() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("level"));

    let viewports = [
        (600.0, 0.0, 200.0, 150.0),
        (0.0, 450.0, 160.0, 150.0),
        (10.0, 10.0, 1.0, 1.0),
    ];
    for (x, y, w, h) in viewports {
        let camera = systems.add_camera(x, y, w, h).unwrap();
        assert_eq!(camera.viewport(), (x, y, w, h));
    }

    let cameras = systems.cameras().unwrap();
    assert_eq!(cameras.len(), viewports.len() + 1);
    assert_eq!(cameras.main().viewport(), (0.0, 0.0, 800.0, 600.0));
    for (index, viewport) in viewports.iter().enumerate() {
        let camera = cameras.get(index + 1).unwrap();
        assert_eq!(camera.viewport(), *viewport);
        assert_eq!(camera.scene(), Some("level"));
    }
}

#[test]
fn test_invisible_scene_renders_nothing() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("hidden").with_visible(false));
    systems.add_camera(0.0, 0.0, 100.0, 100.0).unwrap();

    let mut renderer = RecordingRenderer::default();
    systems.render(0.0, &mut renderer).unwrap();

    assert!(renderer.passes.is_empty());
    for camera in systems.cameras().unwrap() {
        assert_eq!(camera.frames_rendered(), 0);
        assert!(!camera.is_rendering());
    }
}

#[test]
fn test_invisible_render_still_ends_update_frame() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("hidden").with_visible(false));

    systems.begin(0.0, 0.016).unwrap();
    systems.update(0.016, 0.016).unwrap();
    assert!(systems.context().unwrap().updates.is_processing());

    systems.render(0.0, &mut RecordingRenderer::default()).unwrap();
    assert!(!systems.context().unwrap().updates.is_processing());
}

#[test]
fn test_each_camera_renders_once_in_order() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("level"));
    systems.add_camera(600.0, 0.0, 200.0, 150.0).unwrap();

    let (shown, hidden) = {
        let ctx = systems.context_mut().unwrap();
        let shown = ctx.add.text(&mut ctx.children, 0.0, 0.0, "score", 16.0);
        let hidden = ctx.add.text(&mut ctx.children, 0.0, 0.0, "debug", 16.0);
        if let Some(object) = ctx.children.get_mut(hidden) {
            object.visible = false;
        }
        (shown, hidden)
    };

    let mut renderer = RecordingRenderer::default();
    systems.render(0.5, &mut renderer).unwrap();

    assert_eq!(renderer.passes.len(), 2);
    assert_eq!(renderer.passes[0].viewport, (0.0, 0.0, 800.0, 600.0));
    assert_eq!(renderer.passes[1].viewport, (600.0, 0.0, 200.0, 150.0));
    for (index, pass) in renderer.passes.iter().enumerate() {
        assert_eq!(pass.scene, "level");
        assert_eq!(pass.current_camera, Some(index));
        assert!(pass.camera_rendering);
        assert_eq!(pass.items, vec![shown]);
        assert!(!pass.items.contains(&hidden));
    }

    let ctx = systems.context().unwrap();
    assert_eq!(ctx.current_camera(), None);
    for camera in systems.cameras().unwrap() {
        assert_eq!(camera.frames_rendered(), 1);
        assert!(!camera.is_rendering());
    }
}

#[test]
fn test_renderer_error_stops_remaining_cameras() {
    let game = Game::new(GameConfig::new(800.0, 600.0)).unwrap();
    let mut systems = started(&game, SceneConfig::new("level"));
    systems.add_camera(0.0, 0.0, 10.0, 10.0).unwrap();
    systems.add_camera(0.0, 0.0, 20.0, 20.0).unwrap();

    let mut renderer = RecordingRenderer {
        fail_on_pass: Some(1),
        ..RecordingRenderer::default()
    };
    let err = systems.render(0.0, &mut renderer).unwrap_err();

    assert!(matches!(err, SystemsError::Render(RenderError::Backend(_))));
    assert_eq!(renderer.passes.len(), 2);

    let cameras = systems.cameras().unwrap();
    assert_eq!(cameras.get(1).map(Camera::frames_rendered), Some(1));
    assert_eq!(cameras.get(2).map(Camera::frames_rendered), Some(0));
    assert_eq!(systems.context().unwrap().current_camera(), None);
}

#[test]
fn test_scene_settings_do_not_shape_main_camera() {
    let game = Game::new(GameConfig::new(640.0, 480.0)).unwrap();
    let systems = started(&game, SceneConfig::new("inset").with_size(100.0, 100.0));

    assert_eq!(systems.settings().width, 100.0);
    assert_eq!(systems.main_camera().unwrap().viewport(), (0.0, 0.0, 640.0, 480.0));
}
