pub mod circuit;
pub mod component;
pub mod schema;
pub mod wire;

// Re-export for convenience
pub use circuit::{Circuit, CircuitStats};
pub use component::*;
pub use schema::*;
pub use wire::{Wire, DEFAULT_WIRE_COLOR};
