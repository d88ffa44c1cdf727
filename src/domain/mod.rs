// Domain layer: card records, field names and the card-source port. Only std/serde here.

pub mod model;
pub mod ports;
