//! Asset loading boundary.

use std::collections::HashMap;

use frontline_core::constants::GROUND_TEXTURE_PATH;
use frontline_core::types::TextureHandle;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Loads textures for the scene. Called once, before the loop starts.
pub trait AssetLoader: Send {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError>;
}

/// Everything loaded ahead of the first frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assets {
    /// `None` renders the terrain with the default material.
    pub ground_texture: Option<TextureHandle>,
}

impl Assets {
    /// Load every required asset through `loader`.
    pub fn load(loader: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let ground_texture = loader.load_texture(GROUND_TEXTURE_PATH)?;
        Ok(Self {
            ground_texture: Some(ground_texture),
        })
    }
}

/// Loader backed by a fixed set of registered paths.
#[derive(Debug, Default)]
pub struct MemoryAssetLoader {
    textures: HashMap<String, TextureHandle>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that knows every texture the game needs.
    pub fn with_game_assets() -> Self {
        let mut loader = Self::new();
        loader.register(GROUND_TEXTURE_PATH);
        loader
    }

    /// Make `path` loadable. Returns its handle.
    pub fn register(&mut self, path: &str) -> TextureHandle {
        let next = TextureHandle(self.textures.len() as u32 + 1);
        *self.textures.entry(path.to_string()).or_insert(next)
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        self.textures
            .get(path)
            .copied()
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }
}
