//! Distance and ranking utilities.

pub mod queries;
pub mod ranking;

pub use queries::{EARTH_RADIUS_MILES, haversine_miles};
pub use ranking::{Ranked, nearest, rank};
