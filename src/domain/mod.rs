// Domain layer: scalar types, outcomes and the kata port. No I/O here.

pub mod model;
pub mod ports;
