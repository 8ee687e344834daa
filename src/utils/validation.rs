use crate::utils::error::{GenerateError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

pub fn is_remote_path(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(GenerateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(GenerateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GenerateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenerateError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GenerateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Go identifier rules: a letter or underscore, then letters, digits or underscores.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid_start = chars
        .next()
        .map(|c| c == '_' || c.is_alphabetic())
        .unwrap_or(false);

    if !valid_start || !chars.all(|c| c == '_' || c.is_alphanumeric()) {
        return Err(GenerateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value is not a valid identifier".to_string(),
        });
    }

    if GO_KEYWORDS.contains(&value) {
        return Err(GenerateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value is a reserved keyword".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("path", "https://example.com/site.zip").is_ok());
        assert!(validate_url("path", "http://example.com").is_ok());
        assert!(validate_url("path", "").is_err());
        assert!(validate_url("path", "invalid-url").is_err());
        assert!(validate_url("path", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("path", "./public").is_ok());
        assert!(matches!(
            validate_path("path", ""),
            Err(GenerateError::MissingConfigError { .. })
        ));
        assert!(validate_path("path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("variable", "x").is_ok());
        assert!(validate_identifier("variable", "_staticEndpoints2").is_ok());
        assert!(validate_identifier("variable", "").is_err());
        assert!(validate_identifier("variable", "2x").is_err());
        assert!(validate_identifier("variable", "my-var").is_err());
        assert!(validate_identifier("package_name", "func").is_err());
    }

    #[test]
    fn test_is_remote_path() {
        assert!(is_remote_path("https://example.com/a.zip"));
        assert!(is_remote_path("http://localhost:8080/a.zip"));
        assert!(!is_remote_path("ftp://example.com/a.zip"));
        assert!(!is_remote_path("./https"));
    }
}
