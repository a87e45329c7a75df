//! Scene state runtime
//!
//! Provides the per-scene orchestrator and the services it wires together.
//!
//! ## Architecture
//!
//! ```text
//! Frame scheduler (FixedStepLoop or host)
//!      ↓ begin / update / render
//! SceneSystems (orchestrator)
//!      ├── Settings
//!      ├── CameraSet ──► Renderer (one pass per camera)
//!      └── SceneContext ──► Scene (user code)
//!            ├── events, add, make, load, updates, state
//!            └── children, color, data, transform, cache, textures
//! ```

pub mod context;
pub mod loader;
pub mod scene;
pub mod scheduler;
pub mod settings;
pub mod state_manager;
pub mod systems;
pub mod update_manager;

#[cfg(test)]
mod tests;

pub use context::{FrameInfo, SceneContext};
pub use loader::{AssetKind, LoadRequest, Loader, LoaderError};
pub use scene::{Scene, SceneError};
pub use scheduler::{FixedStepLoop, FrameSummary};
pub use settings::Settings;
pub use state_manager::{StateManager, StateRequest};
pub use systems::{ChildFault, Lifecycle, SceneSystems, SystemsError, UpdateReport};
pub use update_manager::UpdateManager;
