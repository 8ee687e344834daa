use crate::core::{CodeGenerator, GeneratorConfig, SpecificationSource};
use crate::utils::error::Result;

/// `// Path: <p>` lines in visiting order.
pub fn path_comments(resulting_paths: &[String]) -> Vec<u8> {
    resulting_paths
        .iter()
        .flat_map(|path| format!("// Path: {}\n", path).into_bytes())
        .collect()
}

pub struct GenerateEngine<S: SpecificationSource, G: CodeGenerator, C: GeneratorConfig> {
    source: S,
    generator: G,
    config: C,
}

impl<S: SpecificationSource, G: CodeGenerator, C: GeneratorConfig> GenerateEngine<S, G, C> {
    pub fn new(source: S, generator: G, config: C) -> Self {
        Self {
            source,
            generator,
            config,
        }
    }

    /// Resolves the source, generates code and returns the bytes to write.
    pub async fn run(&self) -> Result<Vec<u8>> {
        tracing::info!("Creating endpoint specifications");
        let resolved = self.source.specifications().await?;
        tracing::info!(
            endpoints = resolved.specifications.len(),
            "Created endpoint specifications"
        );

        let output = self.generator.generate(
            &resolved.specifications,
            self.config.package_name(),
            self.config.variable_name(),
        )?;

        if !self.config.add_path_comment() {
            return Ok(output);
        }

        let mut with_comments = path_comments(&resolved.resulting_paths);
        with_comments.extend(output);
        Ok(with_comments)
    }
}
