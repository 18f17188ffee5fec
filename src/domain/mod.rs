// Domain layer: models, ports and the pure page-to-record transformation.

pub mod direction;
pub mod extractor;
pub mod model;
pub mod ports;
