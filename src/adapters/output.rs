use crate::core::OutputSink;
use crate::utils::error::{GenerateError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Writes the generated file in one go, mode 0644 on unix.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileOutput {
    async fn write_output(&self, data: &[u8]) -> Result<()> {
        let write_error = |source: std::io::Error| GenerateError::WriteError {
            file_name: self.path.display().to_string(),
            source,
        };

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(&self.path).await.map_err(write_error)?;
        tokio::io::AsyncWriteExt::write_all(&mut file, data)
            .await
            .map_err(write_error)?;
        tokio::io::AsyncWriteExt::flush(&mut file)
            .await
            .map_err(write_error)?;

        tracing::info!(file = %self.path.display(), bytes = data.len(), "Wrote generated file");
        Ok(())
    }
}

/// Prints the generated code followed by a newline.
#[derive(Debug, Clone, Default)]
pub struct StdoutOutput;

impl OutputSink for StdoutOutput {
    async fn write_output(&self, data: &[u8]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let write_error = |source: std::io::Error| GenerateError::WriteError {
            file_name: "<stdout>".to_string(),
            source,
        };

        handle.write_all(data).map_err(write_error)?;
        handle.write_all(b"\n").map_err(write_error)?;
        handle.flush().map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_output_writes_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("static_generated.go");
        std::fs::write(&path, "old contents that are longer").unwrap();

        let output = FileOutput::new(&path);
        output.write_output(b"package main\n").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"package main\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_output_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("x_generated.go");
        FileOutput::new(&path).write_output(b"x").await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // the process umask can only clear bits
        assert_eq!(mode & !0o644, 0);
    }

    #[tokio::test]
    async fn test_file_output_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = FileOutput::new(temp_dir.path().join("missing").join("out.go"));

        let result = output.write_output(b"x").await;
        assert!(matches!(result, Err(GenerateError::WriteError { .. })));
    }
}
