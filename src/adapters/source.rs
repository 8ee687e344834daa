use crate::adapters::http::HttpFetcher;
use crate::core::specification::endpoint_specifications;
use crate::core::{
    EndpointSpecification, ResolvedSpecifications, SourceFile, SpecificationOptions,
    SpecificationSource,
};
use crate::utils::error::{GenerateError, Result};
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Reads every regular file below `root`, in file-name order.
pub fn files_from_directory(root: &Path) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(GenerateError::SpecificationError {
            message: format!("not a directory: {}", root.display()),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| GenerateError::SpecificationError {
            message: format!("walk {}: {}", root.display(), e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|e| {
            GenerateError::SpecificationError {
                message: format!("strip prefix {}: {}", entry.path().display(), e),
            }
        })?;
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push(SourceFile {
            relative_path,
            data: std::fs::read(entry.path())?,
        });
    }

    Ok(files)
}

/// Reads every file entry of a zip archive, rejecting names that leave the archive root.
pub fn files_from_zip<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<SourceFile>> {
    let mut files = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        let enclosed = entry
            .enclosed_name()
            .ok_or_else(|| GenerateError::SpecificationError {
                message: format!("unsafe zip entry name: {}", name),
            })?;
        let relative_path = enclosed
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        // The declared size comes from the archive and is only checked after reading.
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        if data.len() as u64 != entry.size() {
            return Err(GenerateError::SpecificationError {
                message: format!(
                    "zip entry {} declares {} bytes but holds {}",
                    name,
                    entry.size(),
                    data.len()
                ),
            });
        }
        files.push(SourceFile {
            relative_path,
            data,
        });
    }

    Ok(files)
}

pub fn endpoint_specifications_from_directory(
    root: &Path,
    options: SpecificationOptions,
) -> Result<Vec<EndpointSpecification>> {
    endpoint_specifications(files_from_directory(root)?, options)
}

pub fn endpoint_specifications_from_zip<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    options: SpecificationOptions,
) -> Result<Vec<EndpointSpecification>> {
    endpoint_specifications(files_from_zip(archive)?, options)
}

pub struct DirectorySource {
    root: PathBuf,
    options: SpecificationOptions,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, options: SpecificationOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }
}

#[async_trait::async_trait]
impl SpecificationSource for DirectorySource {
    async fn specifications(&self) -> Result<ResolvedSpecifications> {
        tracing::debug!(path = %self.root.display(), "Scanning directory");
        let root = self.root.clone();
        let options = self.options;
        let specifications = tokio::task::spawn_blocking(move || {
            endpoint_specifications_from_directory(&root, options)
        })
        .await
        .map_err(|e| GenerateError::SpecificationError {
            message: format!("directory scan task: {}", e),
        })??;

        Ok(ResolvedSpecifications {
            specifications,
            resulting_paths: vec![self.root.display().to_string()],
        })
    }
}

/// A zip archive fetched over HTTP(S).
pub struct RemoteZipSource {
    url: String,
    fetcher: HttpFetcher,
    options: SpecificationOptions,
}

impl RemoteZipSource {
    pub fn new(url: impl Into<String>, fetcher: HttpFetcher, options: SpecificationOptions) -> Self {
        Self {
            url: url.into(),
            fetcher,
            options,
        }
    }
}

#[async_trait::async_trait]
impl SpecificationSource for RemoteZipSource {
    async fn specifications(&self) -> Result<ResolvedSpecifications> {
        let fetched = self.fetcher.fetch(&self.url).await?;
        tracing::debug!(
            url = %self.url,
            bytes = fetched.body.len(),
            redirects = fetched.resulting_paths.len() - 1,
            "Reading zip archive"
        );

        let mut archive = ZipArchive::new(Cursor::new(fetched.body))?;
        let specifications = endpoint_specifications_from_zip(&mut archive, self.options)?;

        Ok(ResolvedSpecifications {
            specifications,
            resulting_paths: fetched.resulting_paths,
        })
    }
}
