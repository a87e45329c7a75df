//! Core configuration types shared by the engine host and its scenes

pub mod config;

pub use config::{GameConfig, SceneConfig};
