// Domain layer: graph models and the ports the pipeline is wired through.

pub mod model;
pub mod ports;
