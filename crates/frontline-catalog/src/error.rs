#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("unknown character: {0}")]
    UnknownCharacter(String),
    #[error("level {level} is outside 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },
}
