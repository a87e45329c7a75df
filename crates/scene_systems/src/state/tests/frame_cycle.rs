//! Lifecycle, update ordering and fault isolation

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::config::{GameConfig, SceneConfig};
use crate::engine::Game;
use crate::events::SceneEvent;
use crate::objects::{GameObject, Updatable, UpdateError};
use crate::render::NullRenderer;
use crate::state::{
    FixedStepLoop, Lifecycle, Scene, SceneContext, SceneError, SceneSystems, SystemsError,
};

type CallLog = Rc<RefCell<Vec<String>>>;

/// Child that records every update and optionally fails
struct Probe {
    name: &'static str,
    log: CallLog,
    fail: bool,
}

impl Updatable for Probe {
    fn update(&mut self, timestep: f32) -> Result<(), UpdateError> {
        self.log.borrow_mut().push(format!("{}:{}", self.name, timestep));
        if self.fail {
            return Err(UpdateError::Failed(format!("{} broke", self.name)));
        }
        Ok(())
    }
}

/// Scene that records its own updates
struct RecordingScene {
    log: CallLog,
}

impl Scene for RecordingScene {
    fn update(&mut self, _ctx: &mut SceneContext, timestep: f32, physics_step: f32) -> Result<(), SceneError> {
        self.log.borrow_mut().push(format!("scene:{}:{}", timestep, physics_step));
        Ok(())
    }
}

fn game() -> Game {
    Game::new(GameConfig::new(800.0, 600.0)).unwrap()
}

fn recording_systems(log: &CallLog) -> SceneSystems {
    SceneSystems::new(SceneConfig::new("level"), RecordingScene { log: Rc::clone(log) })
}

fn add_probe(systems: &mut SceneSystems, name: &'static str, log: &CallLog, fail: bool) {
    let ctx = systems.context_mut().unwrap();
    ctx.add.custom(
        &mut ctx.children,
        0.0,
        0.0,
        Probe {
            name,
            log: Rc::clone(log),
            fail,
        },
    );
}

#[test]
fn test_children_update_in_order_before_scene() {
    let game = game();
    let log = CallLog::default();
    let mut systems = recording_systems(&log);
    systems.init(&game.handle()).unwrap();

    for name in ["a", "b", "c"] {
        add_probe(&mut systems, name, &log, false);
    }

    systems.begin(0.0, 0.016).unwrap();
    let report = systems.update(0.5, 0.25).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.children_updated, 3);
    assert_eq!(*log.borrow(), vec!["a:0.5", "b:0.5", "c:0.5", "scene:0.5:0.25"]);
}

#[test]
fn test_two_steps_in_one_frame_repeat_full_order() {
    let game = game();
    let log = CallLog::default();
    let mut systems = recording_systems(&log);
    systems.init(&game.handle()).unwrap();
    for name in ["a", "b", "c"] {
        add_probe(&mut systems, name, &log, false);
    }

    systems.begin(0.0, 0.032).unwrap();
    systems.update(0.5, 0.5).unwrap();
    systems.update(0.5, 0.5).unwrap();

    let expected = ["a:0.5", "b:0.5", "c:0.5", "scene:0.5:0.5"];
    let expected: Vec<&str> = expected.iter().chain(expected.iter()).copied().collect();
    assert_eq!(*log.borrow(), expected);
    assert_eq!(systems.context().unwrap().frame().steps, 2);
}

#[test]
fn test_failing_child_does_not_stop_siblings() {
    let game = game();
    let log = CallLog::default();
    let mut systems = recording_systems(&log);
    systems.init(&game.handle()).unwrap();
    add_probe(&mut systems, "a", &log, false);
    add_probe(&mut systems, "b", &log, true);
    add_probe(&mut systems, "c", &log, false);

    let report = systems.update(1.0, 1.0).unwrap();

    assert_eq!(*log.borrow(), vec!["a:1", "b:1", "c:1", "scene:1:1"]);
    assert_eq!(report.faults.len(), 1);
    assert_eq!(report.faults[0].index, 1);
    assert_eq!(report.faults[0].error, UpdateError::Failed("b broke".into()));
}

#[test]
fn test_scene_error_propagates_after_children() {
    let game = game();
    let log = CallLog::default();
    let mut systems = SceneSystems::new(
        SceneConfig::new("level"),
        |_ctx: &mut SceneContext, _t: f32, _p: f32| -> Result<(), SceneError> {
            Err(SceneError::Logic("game over".into()))
        },
    );
    systems.init(&game.handle()).unwrap();
    add_probe(&mut systems, "a", &log, false);

    let err = systems.update(1.0, 1.0).unwrap_err();
    assert!(matches!(err, SystemsError::Scene(SceneError::Logic(_))));
    assert_eq!(*log.borrow(), vec!["a:1"]);
}

#[test]
fn test_scene_adds_children_between_steps() {
    let game = game();
    let mut systems = SceneSystems::new(
        SceneConfig::new("spawner"),
        |ctx: &mut SceneContext, _t: f32, _p: f32| -> Result<(), SceneError> {
            ctx.add.text(&mut ctx.children, 0.0, 0.0, "spawned", 12.0);
            Ok(())
        },
    );
    systems.init(&game.handle()).unwrap();

    assert_eq!(systems.update(0.1, 0.1).unwrap().children_updated, 0);
    assert_eq!(systems.update(0.1, 0.1).unwrap().children_updated, 1);
    assert_eq!(systems.context().unwrap().children.len(), 2);
}

#[test]
fn test_frame_calls_before_init_fail() {
    let mut systems = recording_systems(&CallLog::default());

    assert!(matches!(systems.begin(0.0, 0.0), Err(SystemsError::NotInitialized(_))));
    assert!(matches!(systems.update(0.1, 0.1), Err(SystemsError::NotInitialized(_))));
    assert!(matches!(
        systems.render(0.0, &mut NullRenderer),
        Err(SystemsError::NotInitialized(_))
    ));
    assert!(systems.add_camera(0.0, 0.0, 1.0, 1.0).is_err());
    assert!(systems.reset_cameras().is_err());
    assert_eq!(systems.lifecycle(), Lifecycle::Uninitialized);
}

#[test]
fn test_double_init_rejected() {
    let game = game();
    let mut systems = recording_systems(&CallLog::default());
    systems.init(&game.handle()).unwrap();

    assert!(matches!(
        systems.init(&game.handle()),
        Err(SystemsError::AlreadyInitialized(_))
    ));
}

#[test]
fn test_lifecycle_and_handle_release() {
    let game = game();
    let mut systems = recording_systems(&CallLog::default());
    assert_eq!(game.cache_handle_count(), 1);

    systems.init(&game.handle()).unwrap();
    assert_eq!(systems.lifecycle(), Lifecycle::Initialized);
    assert!(game.cache_handle_count() > 1);
    assert!(game.textures_handle_count() > 1);

    systems.begin(0.0, 0.016).unwrap();
    assert_eq!(systems.lifecycle(), Lifecycle::Active);

    systems.shutdown();
    assert_eq!(systems.lifecycle(), Lifecycle::TornDown);
    assert_eq!(game.cache_handle_count(), 1);
    assert_eq!(game.textures_handle_count(), 1);
    assert!(systems.context().is_none());
    assert_eq!(systems.settings().width, 800.0);

    systems.init(&game.handle()).unwrap();
    assert_eq!(systems.cameras().unwrap().len(), 1);
}

#[test]
fn test_init_merges_settings_with_game() {
    let game = game();
    let config = SceneConfig::new("hud").with_position(10.0, 20.0).with_visible(false);
    let mut systems = SceneSystems::new(config, RecordingScene { log: CallLog::default() });

    assert_eq!(systems.settings().width, 0.0);
    systems.init(&game.handle()).unwrap();

    let settings = systems.settings();
    assert_eq!((settings.x, settings.y), (10.0, 20.0));
    assert_eq!((settings.width, settings.height), (800.0, 600.0));
    assert!(!settings.visible);
}

#[test]
fn test_injected_services_share_engine_resources() {
    let game = game();
    let mut systems = recording_systems(&CallLog::default());
    systems.init(&game.handle()).unwrap();

    game.cache_mut().insert("intro", crate::assets::CachedAsset::Text("hi".into()));
    let ctx = systems.context().unwrap();
    assert!(ctx.cache.read().contains("intro"));
    assert!(ctx.game.same_game(&game.handle()));
}

#[test]
fn test_begin_dispatches_events_and_resets_flags() {
    let game = game();
    let mut systems = recording_systems(&CallLog::default());
    systems.init(&game.handle()).unwrap();

    let fired = Rc::new(RefCell::new(0));
    {
        let ctx = systems.context_mut().unwrap();
        let counter = Rc::clone(&fired);
        ctx.events.on("ready", move |_: &SceneEvent| {
            *counter.borrow_mut() += 1;
            false
        });
        ctx.events.emit(SceneEvent::new("ready", 0.0));
        let id = ctx.add.text(&mut ctx.children, 0.0, 0.0, "x", 8.0);
        ctx.updates.add(id);
    }

    systems.begin(100.0, 0.016).unwrap();

    let ctx = systems.context().unwrap();
    assert_eq!(*fired.borrow(), 1);
    assert!(ctx.updates.list().is_empty());
    assert!(ctx.updates.is_processing());
    assert_eq!(ctx.frame().frame, 1);
    assert_eq!(ctx.frame().timestamp, 100.0);
}

#[test]
fn test_fixed_step_loop_runs_whole_steps() {
    let game = game();
    let log = CallLog::default();
    let mut systems = recording_systems(&log);
    systems.init(&game.handle()).unwrap();
    add_probe(&mut systems, "a", &log, false);
    add_probe(&mut systems, "b", &log, true);

    let mut frame_loop = FixedStepLoop::new(0.25, 4).unwrap();
    let summary = frame_loop.tick(&mut systems, 0.0, 0.6, &mut NullRenderer).unwrap();

    assert_eq!(summary.steps, 2);
    assert_eq!(summary.faults, 2);
    assert_eq!(
        *log.borrow(),
        vec!["a:0.25", "b:0.25", "scene:0.25:0.25", "a:0.25", "b:0.25", "scene:0.25:0.25"]
    );
    assert_eq!(systems.context().unwrap().frame().frame, 1);
    assert!(!systems.context().unwrap().updates.is_processing());
}

#[test]
fn test_fixed_step_loop_rejects_zero_step() {
    assert!(FixedStepLoop::new(0.0, 4).is_err());
    assert!(FixedStepLoop::new(f32::NAN, 4).is_err());

    let mut config = GameConfig::new(800.0, 600.0);
    config.fixed_step = 0.0;
    assert!(FixedStepLoop::from_config(&config).is_err());
}

#[test]
fn test_plain_objects_update_through_dispatch() {
    let game = game();
    game.textures_mut().add(crate::assets::Texture::new("coin", 16, 16));
    let mut systems = recording_systems(&CallLog::default());
    systems.init(&game.handle()).unwrap();

    let coin = {
        let ctx = systems.context_mut().unwrap();
        ctx.add.sprite(&mut ctx.children, 0.0, 0.0, "coin", 4, 10.0).unwrap()
    };
    systems.update(0.25, 0.25).unwrap();

    let sprite = systems.context().unwrap().children.get(coin).and_then(GameObject::as_sprite);
    assert_eq!(sprite.map(|s| s.current_frame()), Some(2));
}
