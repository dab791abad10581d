use crate::{
    args,
    io,
    request,
};

/// Error-type enum for the `kochflake` crate.
/// Wraps the errors of each processing stage.
#[derive(Debug)]
pub enum KochflakeError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    RequestError(request::RequestError),
}
impl std::fmt::Display for KochflakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KochflakeError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            KochflakeError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            KochflakeError::RequestError(error) => write!(f, "! REQUEST ERROR:\n- {}", error),
        }
    }
}
impl From<args::ArgError> for KochflakeError {
    fn from(error: args::ArgError) -> Self {
        KochflakeError::ArgError(error)
    }
}
impl From<io::IoError> for KochflakeError {
    fn from(error: io::IoError) -> Self {
        KochflakeError::IoError(error)
    }
}
impl From<request::RequestError> for KochflakeError {
    fn from(error: request::RequestError) -> Self {
        KochflakeError::RequestError(error)
    }
}

/// Result type for the `kochflake` crate.
pub type KochflakeResult<T> = std::result::Result<T, KochflakeError>;
