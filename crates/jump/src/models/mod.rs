//! JUMP data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::Located;
pub use types::{Bike, Envelope, Hub, JumpError, Position, Resource, Result};
