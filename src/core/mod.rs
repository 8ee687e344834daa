pub mod codegen;
pub mod engine;
pub mod specification;

pub use crate::domain::model::{
    EndpointSpecification, Header, ResolvedSpecifications, SourceFile, SpecificationOptions,
    StaticContent,
};
pub use crate::domain::ports::{CodeGenerator, GeneratorConfig, OutputSink, SpecificationSource};
pub use crate::utils::error::Result;
