// Domain layer: raw inputs and the two entity types. No I/O here.

pub mod model;
pub mod service;
pub mod user;
