// Adapters layer: concrete sources and sinks behind the domain ports.

pub mod http;
pub mod output;
pub mod source;
