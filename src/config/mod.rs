pub mod cli;

use crate::core::codegen::generated_filename;
use crate::core::{GeneratorConfig, SpecificationOptions};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    is_remote_path, validate_identifier, validate_path, validate_url, Validate,
};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "generate-endpoints")]
#[command(about = "Generate static content endpoint specifications from a directory or a zip URL")]
pub struct CliConfig {
    /// path to generate code from
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub path: String,

    /// The name of the package in the output.
    #[arg(
        long = "package-name",
        env = "GOPACKAGE",
        default_value = "main",
        allow_hyphen_values = true
    )]
    pub package_name: String,

    /// The name of the variable in the output.
    #[arg(long = "variable", default_value = "x", allow_hyphen_values = true)]
    pub variable_name: String,

    /// Add a comment of the path.
    #[arg(
        long,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub add_path_comment: bool,

    /// Whether the generated static content is private. Affects Cache-Control.
    #[arg(
        long,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub private: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// File that triggered `go generate`; output goes next to it when set.
    #[arg(long, env = "GOFILE", hide = true)]
    pub go_file: Option<String>,
}

impl CliConfig {
    /// Parses process arguments, accepting Go-style `-flag` spellings.
    pub fn parse_args() -> Self {
        Self::parse_from(cli::normalize_args(std::env::args_os()))
    }

    pub fn is_remote(&self) -> bool {
        is_remote_path(&self.path)
    }

    pub fn specification_options(&self) -> SpecificationOptions {
        SpecificationOptions {
            index_aliases: true,
            private: self.private,
        }
    }

    pub fn output_filename(&self) -> Option<String> {
        generated_filename(self.go_file.as_deref())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.path)?;
        if self.is_remote() {
            validate_url("path", &self.path)?;
        }
        validate_identifier("package_name", &self.package_name)?;
        validate_identifier("variable", &self.variable_name)?;
        Ok(())
    }
}

impl GeneratorConfig for CliConfig {
    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn variable_name(&self) -> &str {
        &self.variable_name
    }

    fn add_path_comment(&self) -> bool {
        self.add_path_comment
    }
}
