use std::io::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::args::Format;

/// File extensions accepted for config and output files.
const SUPPORTED_FILETYPES: &[&str] = &["json", "toml", "yaml", "yml"];

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn at(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Read a file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::at(path, IoErrorType::File(error)))
}

/// Work out the data format from a file extension.
pub fn format_from_path(path: &str) -> IoResult<Format> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|extension| extension.to_str());
    match extension {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => {
            let error_string = format!(
                "Unsupported filetype: {}\nSupported filetypes: {}",
                path,
                SUPPORTED_FILETYPES.iter().join(", "),
            );
            Err(IoError::at(path, IoErrorType::StringOnly(error_string)))
        },
    }
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match format_from_path(path)? {
        Format::Json => serde_json::from_reader(open(path)?)
            .map_err(|error| IoError::at(path, IoErrorType::SerdeJson(error))),
        Format::Toml => toml::from_str(&read_to_string(path)?)
            .map_err(|error| IoError::at(path, IoErrorType::TomlDe(error))),
        Format::Yaml => serde_yaml::from_reader(open(path)?)
            .map_err(|error| IoError::at(path, IoErrorType::SerdeYaml(error))),
    }
}

/// Serialize data to a string in the given format.
pub fn to_format_string<T>(data: &T, format: Format) -> IoResult<String>
where T: Serialize
{
    let result = match format {
        Format::Json => serde_json::to_string_pretty(data).map_err(IoErrorType::SerdeJson),
        Format::Toml => toml::to_string_pretty(data).map_err(IoErrorType::TomlSer),
        Format::Yaml => serde_yaml::to_string(data).map_err(IoErrorType::SerdeYaml),
    };
    result.map_err(|cause| IoError{file: None, cause})
}

/// Write data to a file, in the format given by its extension.
pub fn write_data_file<T>(path: &str, data: &T) -> IoResult<()>
where T: Serialize
{
    let buffer = to_format_string(data, format_from_path(path)?)
        .map_err(|error| IoError::at(path, error.cause))?;
    write_to_file(path, &buffer)
}
