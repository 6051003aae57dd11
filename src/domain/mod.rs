// Domain layer: fleet models and ports. Only std, chrono and serde.

pub mod model;
pub mod ports;
