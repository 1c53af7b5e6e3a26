//! Traits shared by every listing record.

use geo::Point;

use crate::models::types::{Bike, Hub};

/// A record that may carry a geographic position.
pub trait Located {
    /// Position as a point (x = longitude, y = latitude), if the vendor sent one
    fn location(&self) -> Option<Point>;
}

impl Located for Bike {
    fn location(&self) -> Option<Point> {
        self.current_position.point()
    }
}

impl Located for Hub {
    fn location(&self) -> Option<Point> {
        self.middle_point.point()
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Option<Point> {
        (**self).location()
    }
}
