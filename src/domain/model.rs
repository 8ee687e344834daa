/// A response header attached to static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContent {
    pub data: Vec<u8>,
    pub headers: Vec<Header>,
}

impl StaticContent {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// A route and the static content served on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpecification {
    pub path: String,
    pub method: String,
    pub static_content: StaticContent,
}

/// A file taken from a directory or zip archive, keyed by its `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub relative_path: String,
    pub data: Vec<u8>,
}

/// Knobs handed to the specification builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecificationOptions {
    pub index_aliases: bool,
    pub private: bool,
}

/// Input resolved from `-path`, plus every location visited to reach it.
#[derive(Debug, Clone)]
pub struct ResolvedSpecifications {
    pub specifications: Vec<EndpointSpecification>,
    pub resulting_paths: Vec<String>,
}
