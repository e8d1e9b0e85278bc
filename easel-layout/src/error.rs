use thiserror::Error;

#[derive(Error, Debug)]
pub enum EaselLayoutError {
    #[error("Invalid interval: min ({min}) must be non-negative and <= max ({max})")]
    InvalidInterval { min: f32, max: f32 },

    #[error("Internal error: `{0}`")]
    InternalError(String),
}
