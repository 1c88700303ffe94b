// Domain layer: the shape contract and its concrete variants.

pub mod model;
pub mod ports;
