use crate::core::{EndpointSpecification, Header, SourceFile, SpecificationOptions, StaticContent};
use crate::utils::error::{GenerateError, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

const INDEX_FILE: &str = "index.html";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html; charset=utf-8"),
    ("htm", "text/html; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("mjs", "text/javascript; charset=utf-8"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("webmanifest", "application/manifest+json"),
    ("txt", "text/plain; charset=utf-8"),
    ("md", "text/markdown; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("xml", "application/xml"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("ico", "image/x-icon"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("wasm", "application/wasm"),
    ("pdf", "application/pdf"),
];

pub fn content_type_for(relative_path: &str) -> &'static str {
    let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    let extension = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => return "application/octet-stream",
    };

    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
        .unwrap_or("application/octet-stream")
}

pub fn cache_control(private: bool) -> &'static str {
    if private {
        "private, no-cache"
    } else {
        "public, no-cache"
    }
}

pub fn etag(data: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(data)))
}

/// Directory route for an `index.html` file: `/` for the root, `/docs/` for `docs/index.html`.
fn index_alias(relative_path: &str) -> Option<String> {
    let directory = relative_path.strip_suffix(INDEX_FILE)?;
    if directory.is_empty() {
        Some("/".to_string())
    } else if directory.ends_with('/') {
        Some(format!("/{}", directory))
    } else {
        None
    }
}

fn normalize_relative_path(relative_path: &str) -> Result<String> {
    let normalized = relative_path.replace('\\', "/");
    let segments: Vec<&str> = normalized
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    if segments.is_empty() {
        return Err(GenerateError::SpecificationError {
            message: format!("empty file path: {:?}", relative_path),
        });
    }
    if segments.iter().any(|s| *s == "..") {
        return Err(GenerateError::SpecificationError {
            message: format!("file path escapes the source root: {}", relative_path),
        });
    }

    Ok(segments.join("/"))
}

/// Builds one specification per route, sorted by route.
pub fn endpoint_specifications(
    files: Vec<SourceFile>,
    options: SpecificationOptions,
) -> Result<Vec<EndpointSpecification>> {
    let mut routes: BTreeMap<String, EndpointSpecification> = BTreeMap::new();

    for file in files {
        let relative_path = normalize_relative_path(&file.relative_path)?;
        let static_content = StaticContent {
            headers: vec![
                Header::new("Content-Type", content_type_for(&relative_path)),
                Header::new("Cache-Control", cache_control(options.private)),
                Header::new("ETag", etag(&file.data)),
            ],
            data: file.data,
        };

        let mut paths = vec![format!("/{}", relative_path)];
        if options.index_aliases {
            paths.extend(index_alias(&relative_path));
        }

        for path in paths {
            if routes.contains_key(&path) {
                return Err(GenerateError::SpecificationError {
                    message: format!("duplicate route: {}", path),
                });
            }
            tracing::debug!(route = %path, bytes = static_content.data.len(), "Adding endpoint");
            routes.insert(
                path.clone(),
                EndpointSpecification {
                    path,
                    method: "GET".to_string(),
                    static_content: static_content.clone(),
                },
            );
        }
    }

    Ok(routes.into_values().collect())
}
