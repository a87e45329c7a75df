//! Scene systems demo
//!
//! Runs a level scene and a HUD scene headless for a few seconds of game time.
//! The level spawns sprites, keeps a score in its data store, asks the host to
//! start the HUD and finally stops itself. A logging renderer stands in for
//! the low-level renderer and reports every camera pass.

use scene_systems::assets::{CachedAsset, Texture};
use scene_systems::core::config::{Config, ConfigError, GameConfig, SceneConfig};
use scene_systems::events::{EventArg, SceneEvent};
use scene_systems::foundation::logging;
use scene_systems::foundation::time::Timer;
use scene_systems::objects::{FactoryError, Updatable, UpdateError};
use scene_systems::render::{Camera, CameraError, RenderError, RenderItem, Renderer};
use scene_systems::state::{AssetKind, FixedStepLoop, Lifecycle, LoaderError, StateRequest};
use scene_systems::{EngineError, Game, SceneContext, SceneError, SceneSystems, SystemsError};
use thiserror::Error;

const DEMO_FRAMES: u32 = 300;
const CONFIG_PATH: &str = "scene_demo.toml";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene systems error: {0}")]
    Systems(#[from] SystemsError),

    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Factory error: {0}")]
    Factory(#[from] FactoryError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
}

/// Custom behaviour: blinks on and off at a fixed period
struct Beacon {
    period: f32,
    elapsed: f32,
    lit: bool,
}

impl Updatable for Beacon {
    fn update(&mut self, timestep: f32) -> Result<(), UpdateError> {
        self.elapsed += timestep;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            self.lit = !self.lit;
        }
        Ok(())
    }
}

/// The playable scene
#[derive(Default)]
struct LevelScene {
    started: bool,
    elapsed: f32,
    spawned: u32,
    hud_requested: bool,
    briefed: bool,
}

impl LevelScene {
    const SPAWN_INTERVAL: f32 = 0.5;
    const HUD_AFTER: f32 = 1.0;
    const DURATION: f32 = 4.0;

    fn spawn_coin(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError> {
        let x = 40.0 * self.spawned as f32;
        let coin = ctx.add.sprite(&mut ctx.children, x, 120.0, "coin", 8, 12.0)?;
        ctx.updates.add(coin);
        self.spawned += 1;

        let score = i64::from(self.spawned) * 10;
        ctx.data.set("score", score)?;
        let timestamp = ctx.frame().timestamp;
        ctx.events.emit(
            SceneEvent::new("coin_spawned", timestamp)
                .with_arg("score", EventArg::Int(score))
                .with_arg("at", EventArg::Position(x, 120.0)),
        );
        Ok(())
    }
}

impl scene_systems::Scene for LevelScene {
    fn update(&mut self, ctx: &mut SceneContext, timestep: f32, _physics_step: f32) -> Result<(), SceneError> {
        if !self.started {
            self.started = true;
            ctx.load.text("briefing", "text/briefing.txt")?;
            ctx.load.image("explosion", "img/explosion.png")?;
            ctx.events.on("coin_spawned", |event: &SceneEvent| {
                if let Some(EventArg::Int(score)) = event.get_arg("score") {
                    log::info!("Coin spawned, score {}", score);
                }
                true
            });
            ctx.add.image(&mut ctx.children, 0.0, 0.0, "ship")?;
            ctx.add.custom(
                &mut ctx.children,
                16.0,
                16.0,
                Beacon {
                    period: 0.25,
                    elapsed: 0.0,
                    lit: false,
                },
            );
            ctx.color.set_background_hex("#102040").map_err(|e| SceneError::Logic(e.to_string()))?;
        }

        if !self.briefed {
            if let Some(text) = ctx.cache.read().get("briefing").and_then(CachedAsset::as_text) {
                log::info!("Briefing: {}", text);
                self.briefed = true;
            }
        }

        let before = self.elapsed;
        self.elapsed += timestep;

        if (before / Self::SPAWN_INTERVAL).floor() != (self.elapsed / Self::SPAWN_INTERVAL).floor() {
            self.spawn_coin(ctx)?;
        }

        if !self.hud_requested && self.elapsed >= Self::HUD_AFTER {
            self.hud_requested = true;
            ctx.state.start("hud");
        }

        if self.elapsed >= Self::DURATION {
            ctx.state.stop("hud");
            ctx.state.stop_self();
        }

        Ok(())
    }
}

/// Overlay scene showing the frame counter
fn hud(ctx: &mut SceneContext, _timestep: f32, _physics_step: f32) -> Result<(), SceneError> {
    if ctx.children.is_empty() {
        ctx.add.text(&mut ctx.children, 8.0, 8.0, "frame", 14.0);
    }
    let frame = i64::try_from(ctx.frame().frame).unwrap_or(i64::MAX);
    ctx.data.set("frame", frame)?;
    Ok(())
}

/// Renderer that logs each camera pass
#[derive(Default)]
struct LoggingRenderer {
    passes: u64,
    items_drawn: u64,
}

impl Renderer for LoggingRenderer {
    fn render(
        &mut self,
        scene: &SceneContext,
        render_list: &[RenderItem],
        interpolation: f32,
        camera: &Camera,
    ) -> Result<(), RenderError> {
        self.passes += 1;
        self.items_drawn += render_list.len() as u64;
        log::trace!(
            "Render '{}' camera {:?} viewport {:?}: {} item(s), interpolation {:.2}",
            scene.key(),
            scene.current_camera(),
            camera.viewport(),
            render_list.len(),
            interpolation
        );
        Ok(())
    }
}

/// Minimal host: owns the game, running scenes and parked scenes
struct DemoHost {
    game: Game,
    running: Vec<SceneSystems>,
    parked: Vec<SceneSystems>,
    frame_loop: FixedStepLoop,
    renderer: LoggingRenderer,
}

impl DemoHost {
    fn new(config: GameConfig) -> Result<Self, DemoError> {
        let game = Game::new(config)?;
        {
            let mut textures = game.textures_mut();
            textures.add(Texture::new("ship", 64, 64));
            textures.add(Texture::new("coin", 16, 16));
        }
        let frame_loop = FixedStepLoop::from_config(&game.config())?;

        Ok(Self {
            game,
            running: Vec::new(),
            parked: Vec::new(),
            frame_loop,
            renderer: LoggingRenderer::default(),
        })
    }

    fn start(&mut self, mut systems: SceneSystems) -> Result<(), DemoError> {
        systems.init(&self.game.handle())?;
        self.running.push(systems);
        Ok(())
    }

    fn start_parked(&mut self, key: &str) -> Result<(), DemoError> {
        match self.parked.iter().position(|s| s.key() == key) {
            Some(index) => {
                let systems = self.parked.remove(index);
                self.start(systems)
            }
            None => {
                log::warn!("No parked scene '{}' to start", key);
                Ok(())
            }
        }
    }

    fn stop(&mut self, key: &str) {
        if let Some(index) = self.running.iter().position(|s| s.key() == key) {
            let mut systems = self.running.remove(index);
            systems.shutdown();
            self.parked.push(systems);
        }
    }

    /// Fetch everything scenes asked their loaders for
    ///
    /// Nothing is read from disk: text assets get placeholder contents and
    /// images are registered as fixed-size textures.
    fn serve_loads(&mut self) -> Result<(), DemoError> {
        for systems in &mut self.running {
            let Some(ctx) = systems.context_mut() else {
                continue;
            };

            for request in ctx.load.start() {
                log::info!("[{}] loading {:?} '{}' from {}", ctx.key(), request.kind, request.key, request.url);
                match request.kind {
                    AssetKind::Image => {
                        self.game.textures_mut().add(Texture::new(request.key.as_str(), 32, 32));
                    }
                    AssetKind::Text => {
                        let text = format!("placeholder for {}", request.url);
                        self.game.cache_mut().insert(request.key.as_str(), CachedAsset::Text(text));
                    }
                    AssetKind::Binary => {
                        self.game.cache_mut().insert(request.key.as_str(), CachedAsset::Binary(Vec::new()));
                    }
                }
                ctx.load.complete(&request.key)?;
            }
        }
        Ok(())
    }

    /// Apply lifecycle requests queued by scenes during the last frame
    fn apply_requests(&mut self) -> Result<(), DemoError> {
        let mut requests = Vec::new();
        for systems in &mut self.running {
            if let Some(ctx) = systems.context_mut() {
                requests.extend(ctx.state.drain());
            }
        }

        for request in requests {
            log::info!("State request: {:?}", request);
            match request {
                StateRequest::Start(key) => self.start_parked(&key)?,
                StateRequest::Stop(key) => self.stop(&key),
                StateRequest::Pause(key) | StateRequest::Resume(key) => {
                    log::warn!("Demo host ignores pause/resume of '{}'", key);
                }
            }
        }
        Ok(())
    }

    fn run(&mut self, frames: u32) -> Result<(), DemoError> {
        let delta = self.game.config().fixed_step;
        let mut timestamp = 0.0_f64;
        let mut timer = Timer::new();

        for _ in 0..frames {
            if self.running.is_empty() {
                log::info!("No scenes running, stopping early");
                break;
            }

            timestamp += f64::from(delta) * 1000.0;
            let summary = self
                .frame_loop
                .tick_all(&mut self.running, timestamp, delta, &mut self.renderer)?;
            if summary.faults > 0 {
                log::warn!("{} child fault(s) this frame", summary.faults);
            }

            self.serve_loads()?;
            self.apply_requests()?;
            timer.update();
        }

        log::info!(
            "Ran {} frame(s) in {:.1}ms: {} camera pass(es), {} item(s) drawn",
            self.frame_loop.frames(),
            timer.timestamp_ms(),
            self.renderer.passes,
            self.renderer.items_drawn
        );
        Ok(())
    }
}

fn load_game_config() -> Result<GameConfig, DemoError> {
    let config = if std::path::Path::new(CONFIG_PATH).exists() {
        log::info!("Loading game config from {}", CONFIG_PATH);
        GameConfig::load_from_file(CONFIG_PATH)?
    } else {
        GameConfig::new(800.0, 600.0).with_title("Scene Systems Demo")
    };
    config.validate()?;
    Ok(config)
}

fn run_demo() -> Result<(), DemoError> {
    let config = load_game_config()?;
    log::info!("Starting '{}' at {}x{}", config.title, config.width, config.height);

    let mut host = DemoHost::new(config)?;

    let mut level = SceneSystems::new(SceneConfig::new("level"), LevelScene::default());
    level.init(&host.game.handle())?;
    level.add_camera(600.0, 0.0, 200.0, 150.0)?.set_zoom(0.25)?;
    host.running.push(level);

    let overlay = SceneSystems::new(SceneConfig::new("hud").with_active(true), hud);
    host.parked.push(overlay);

    host.run(DEMO_FRAMES)?;

    for systems in host.running.iter_mut().chain(host.parked.iter_mut()) {
        if systems.lifecycle() != Lifecycle::TornDown {
            systems.shutdown();
        }
    }
    log::info!("Engine handles outstanding: {}", host.game.cache_handle_count());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    log::info!("Starting scene systems demo");

    match run_demo() {
        Ok(()) => {
            log::info!("Scene systems demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Scene systems demo failed: {}", e);
            Err(e.into())
        }
    }
}
