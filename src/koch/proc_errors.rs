/// Koch generator error type.
#[derive(Debug, Clone, PartialEq)]
pub enum KochError {
    /// Order, size or heading outside the domain of the curve.
    InvalidArgument(String),
}
impl std::fmt::Display for KochError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KochError::InvalidArgument(error) => write!(f, "Invalid argument: {}", error),
        }
    }
}

/// Result type for the `koch` module.
pub type ProcResult<T> = std::result::Result<T, KochError>;

/// Create a `KochError::InvalidArgument` from a string.
pub fn invalid_arg<T>(error_str: &str) -> ProcResult<T> {
    Err(KochError::InvalidArgument(error_str.to_string()))
}
