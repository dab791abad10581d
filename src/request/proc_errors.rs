use crate::koch;

/// Request handling error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The requested shape `type` is not one of the known shapes.
    UnknownVariant(String),
    /// A request or config value is out of range.
    InvalidArgument(String),
    /// Error from the Koch generator.
    KochError(koch::KochError),
}
impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::UnknownVariant(error) => write!(f, "Unknown shape type: {}", error),
            RequestError::InvalidArgument(error) => write!(f, "Invalid argument: {}", error),
            RequestError::KochError(error) => write!(f, "Koch generator error:\n{}", error),
        }
    }
}
impl From<koch::KochError> for RequestError {
    fn from(error: koch::KochError) -> Self {
        RequestError::KochError(error)
    }
}

/// Result type for the `request` module.
pub type ProcResult<T> = std::result::Result<T, RequestError>;

/// Create a `RequestError::InvalidArgument` from a string.
pub fn invalid_arg<T>(error_str: &str) -> ProcResult<T> {
    Err(RequestError::InvalidArgument(error_str.to_string()))
}
