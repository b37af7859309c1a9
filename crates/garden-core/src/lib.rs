// crates/garden-core/src/lib.rs
pub mod flowers;
pub mod viewport;
pub mod primitives;

pub use flowers::*;
pub use viewport::*;
pub use primitives::*;

#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid flower data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate flower id: {0}")]
    DuplicateFlowerId(String),

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, GardenError>;
