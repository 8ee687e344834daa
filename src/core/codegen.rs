//! Go source emitter for endpoint specifications.
//!
//! The output is a single file declaring one package-level variable holding
//! every endpoint, ready to be registered on a mux.

use crate::core::{CodeGenerator, EndpointSpecification};
use crate::utils::error::{GenerateError, Result};
use crate::utils::validation::validate_identifier;
use std::fmt::Write;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub const GENERATOR_NAME: &str = "github.com/altshiftab/mux_static_content/cmd/generate_endpoints";

const ENDPOINT_SPECIFICATION_IMPORT: &str =
    "github.com/Motmedel/utils_go/pkg/http/mux/types/endpoint_specification";
const STATIC_CONTENT_IMPORT: &str = "github.com/Motmedel/utils_go/pkg/http/mux/types/static_content";
const HTTP_TYPES_IMPORT: &str = "github.com/Motmedel/utils_go/pkg/http/types";

#[derive(Debug, Clone)]
pub struct GoCodeGenerator {
    generator_name: String,
}

impl Default for GoCodeGenerator {
    fn default() -> Self {
        Self::new(GENERATOR_NAME)
    }
}

impl GoCodeGenerator {
    pub fn new(generator_name: impl Into<String>) -> Self {
        Self {
            generator_name: generator_name.into(),
        }
    }
}

/// `<stem>_generated.go` next to the file that triggered `go generate`.
pub fn generated_filename(go_file: Option<&str>) -> Option<String> {
    let go_file = go_file.map(str::trim).filter(|f| !f.is_empty())?;
    let stem = go_file.strip_suffix(".go").unwrap_or(go_file);
    Some(format!("{}_generated.go", stem))
}

/// Interpreted Go string literal; any byte sequence survives the round trip.
pub fn go_string_literal(data: &[u8]) -> String {
    let mut literal = String::with_capacity(data.len() + 2);
    literal.push('"');
    for &byte in data {
        match byte {
            b'"' => literal.push_str("\\\""),
            b'\\' => literal.push_str("\\\\"),
            b'\n' => literal.push_str("\\n"),
            b'\r' => literal.push_str("\\r"),
            b'\t' => literal.push_str("\\t"),
            0x20..=0x7e => literal.push(byte as char),
            _ => {
                literal.push_str("\\x");
                literal.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
                literal.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    literal.push('"');
    literal
}

impl GoCodeGenerator {
    fn write_file(
        &self,
        out: &mut String,
        specifications: &[EndpointSpecification],
        package_name: &str,
        variable_name: &str,
    ) -> std::fmt::Result {
        writeln!(out, "// Code generated by {}; DO NOT EDIT.", self.generator_name)?;
        writeln!(out)?;
        writeln!(out, "package {}", package_name)?;
        writeln!(out)?;
        writeln!(out, "import (")?;
        writeln!(out, "\t\"{}\"", ENDPOINT_SPECIFICATION_IMPORT)?;
        if !specifications.is_empty() {
            writeln!(out, "\t\"{}\"", STATIC_CONTENT_IMPORT)?;
            writeln!(out, "\tmotmedelHttpTypes \"{}\"", HTTP_TYPES_IMPORT)?;
        }
        writeln!(out, ")")?;
        writeln!(out)?;

        writeln!(
            out,
            "var {} = []*endpoint_specification.EndpointSpecification{{",
            variable_name
        )?;
        for specification in specifications {
            writeln!(out, "\t{{")?;
            writeln!(out, "\t\tPath: {},", go_string_literal(specification.path.as_bytes()))?;
            writeln!(
                out,
                "\t\tMethod: {},",
                go_string_literal(specification.method.as_bytes())
            )?;
            writeln!(out, "\t\tStaticContent: &static_content.StaticContent{{")?;
            writeln!(
                out,
                "\t\t\tData: []byte({}),",
                go_string_literal(&specification.static_content.data)
            )?;
            writeln!(out, "\t\t\tHeaders: []*motmedelHttpTypes.HttpHeader{{")?;
            for header in &specification.static_content.headers {
                writeln!(
                    out,
                    "\t\t\t\t{{Name: {}, Value: {}}},",
                    go_string_literal(header.name.as_bytes()),
                    go_string_literal(header.value.as_bytes())
                )?;
            }
            writeln!(out, "\t\t\t}},")?;
            writeln!(out, "\t\t}},")?;
            writeln!(out, "\t}},")?;
        }
        writeln!(out, "}}")
    }
}

impl CodeGenerator for GoCodeGenerator {
    fn generate(
        &self,
        specifications: &[EndpointSpecification],
        package_name: &str,
        variable_name: &str,
    ) -> Result<Vec<u8>> {
        validate_identifier("package_name", package_name).map_err(|e| {
            GenerateError::GenerationError {
                message: e.to_string(),
            }
        })?;
        validate_identifier("variable", variable_name).map_err(|e| {
            GenerateError::GenerationError {
                message: e.to_string(),
            }
        })?;

        let mut out = String::new();
        self.write_file(&mut out, specifications, package_name, variable_name)
            .map_err(|e| GenerateError::GenerationError {
                message: format!("write generated source: {}", e),
            })?;

        tracing::debug!(
            endpoints = specifications.len(),
            bytes = out.len(),
            "Generated file contents"
        );

        Ok(out.into_bytes())
    }
}
