//! # bikealert-jump
//!
//! Client for the JUMP bike-share listing API, plus nearest-first ranking.
//!
//! ## Features
//!
//! - **Typed listings**: bikes and hubs decoded from the vendor's paginated envelope
//! - **Concurrent fetch**: both listings fetched at once, each under its own deadline
//! - **Proximity ranking**: Haversine distance in miles, nearest N with clamping
//! - **Pluggable networking**: implement [`DataFetcher`] to swap the transport
//!
//! ## Example
//!
//! ```
//! use bikealert_jump::prelude::*;
//! use geo::Point;
//!
//! let bikes = vec![
//!     Bike {
//!         name: "Bike 1".into(),
//!         current_position: Position::new(-122.4190, 37.7750),
//!         ..Default::default()
//!     },
//!     Bike {
//!         name: "Bike 2".into(),
//!         current_position: Position::new(-122.2711, 37.8044),
//!         ..Default::default()
//!     },
//! ];
//!
//! let here = Point::new(-122.4194, 37.7749); // x = longitude, y = latitude
//! let closest = nearest(here, &bikes, 5);
//! assert_eq!(closest.len(), 2);
//! assert_eq!(closest[0].item.name, "Bike 1");
//! ```

pub mod identifiers;
pub mod models;
pub mod network;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::network::{DataFetcher, HttpFetcher, JumpConfig};
    pub use crate::provider::{JumpClient, Listings};
    pub use crate::spatial::{EARTH_RADIUS_MILES, Ranked, haversine_miles, nearest, rank};
}

pub use prelude::*;
