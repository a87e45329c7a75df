//! Engine-owned asset storage
//!
//! The asset cache and texture registry belong to the engine host. Scenes
//! only ever see them through [`ReadHandle`](crate::foundation::shared::ReadHandle).

pub mod cache;
pub mod textures;

pub use cache::{AssetCache, CachedAsset};
pub use textures::{Texture, TextureHandle, TextureRegistry};
