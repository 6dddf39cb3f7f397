// Domain layer: the input file reference and the console port.

pub mod model;
pub mod ports;
