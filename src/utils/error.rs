use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fetch of {url} failed: {source}")]
    FetchError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetch of {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Endpoint specification error: {message}")]
    SpecificationError { message: String },

    #[error("Code generation error: {message}")]
    GenerationError { message: String },

    #[error("Failed to write {file_name}: {source}")]
    WriteError {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Name of the step that failed, attached to log events.
    pub fn operation(&self) -> &'static str {
        match self {
            GenerateError::MissingConfigError { .. }
            | GenerateError::InvalidConfigValueError { .. } => "validate config",
            GenerateError::FetchError { .. } | GenerateError::HttpStatusError { .. } => "fetch",
            GenerateError::ZipError(_) => "zip new reader",
            GenerateError::IoError(_) | GenerateError::SpecificationError { .. } => {
                "endpoint specifications"
            }
            GenerateError::GenerationError { .. } => "generated file contents",
            GenerateError::WriteError { .. } => "write file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenerateError::MissingConfigError { field } => format!("Empty {}.", field),
            GenerateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            GenerateError::FetchError { url, .. } => {
                format!("An error occurred when fetching {}.", url)
            }
            GenerateError::HttpStatusError { url, status } => {
                format!("Fetching {} returned HTTP status {}.", url, status)
            }
            GenerateError::ZipError(_) => {
                "An error occurred when creating a zip reader. Does the body constitute a Zip file?"
                    .to_string()
            }
            GenerateError::IoError(e) => format!(
                "An error occurred when creating endpoint specifications: {}",
                e
            ),
            GenerateError::SpecificationError { message } => format!(
                "An error occurred when creating endpoint specifications: {}",
                message
            ),
            GenerateError::GenerationError { message } => format!(
                "An error occurred when obtaining the generated file contents: {}",
                message
            ),
            GenerateError::WriteError { file_name, .. } => {
                format!("An error occurred when writing the file {}.", file_name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenerateError::MissingConfigError { .. } => "Pass a directory or URL with -path",
            GenerateError::InvalidConfigValueError { .. } => {
                "Check the flag values; names must be valid identifiers"
            }
            GenerateError::FetchError { .. } | GenerateError::HttpStatusError { .. } => {
                "Check that the URL is reachable and serves a zip archive"
            }
            GenerateError::ZipError(_) => "Make sure the URL points at a zip archive",
            GenerateError::IoError(_) => "Check that the path exists and is readable",
            GenerateError::SpecificationError { .. } => {
                "Check the input tree for conflicting or unsafe file names"
            }
            GenerateError::GenerationError { .. } => "Check the package and variable names",
            GenerateError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_error_message_mentions_zip() {
        let err = GenerateError::ZipError(zip::result::ZipError::InvalidArchive("bad".into()));
        assert!(err.user_friendly_message().contains("Zip file"));
        assert_eq!(err.operation(), "zip new reader");
    }

    #[test]
    fn test_write_error_carries_file_name() {
        let err = GenerateError::WriteError {
            file_name: "out_generated.go".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out_generated.go"));
        assert_eq!(err.operation(), "write file");
    }
}
