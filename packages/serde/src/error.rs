use flatstruct_core::Error as CoreError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Transform error: {0}")]
    Transform(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
