#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Coercion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
