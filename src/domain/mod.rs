// Domain layer: models and ports. Concrete sources and sinks live under adapters.

pub mod model;
pub mod ports;
