use crate::domain::model::{EndpointSpecification, ResolvedSpecifications};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait OutputSink: Send + Sync {
    fn write_output(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait GeneratorConfig: Send + Sync {
    fn package_name(&self) -> &str;
    fn variable_name(&self) -> &str;
    fn add_path_comment(&self) -> bool;
}

/// Produces endpoint specifications from a directory, an archive or anything else.
#[async_trait]
pub trait SpecificationSource: Send + Sync {
    async fn specifications(&self) -> Result<ResolvedSpecifications>;
}

/// Turns endpoint specifications into source text.
pub trait CodeGenerator: Send + Sync {
    fn generate(
        &self,
        specifications: &[EndpointSpecification],
        package_name: &str,
        variable_name: &str,
    ) -> Result<Vec<u8>>;
}
