// Domain layer: log record types, the static taxonomy and the transport port.

pub mod model;
pub mod ports;
pub mod taxonomy;
