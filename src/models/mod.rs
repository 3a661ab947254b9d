//! Scoring models: the opaque `Pipeline` seam, the serialized pipeline formats,
//! model storage and the load-once registry.
//!
//! The ensemble only ever sees `Model`s; how a model turns a record into a
//! number is each pipeline's business.

pub mod artifact;
pub mod model;
pub mod registry;
pub mod store;

pub use artifact::*;
pub use model::*;
pub use registry::*;
pub use store::*;
