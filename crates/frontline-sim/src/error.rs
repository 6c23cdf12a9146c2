use frontline_core::enums::GamePhase;

use crate::assets::AssetError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load assets: {0}")]
    AssetLoad(#[from] AssetError),
    #[error("cannot {operation} while the game is {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: GamePhase,
    },
}
