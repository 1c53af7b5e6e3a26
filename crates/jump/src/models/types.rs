//! Core data types for JUMP listings.

use std::fmt;
use std::time::Duration;

use geo::Point;
use serde::{Deserialize, Deserializer};

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Listing endpoints exposed per network
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Bikes,
    Hubs,
}

impl Resource {
    /// Path segment under `/api/networks/<id>/`
    pub fn path(self) -> &'static str {
        match self {
            Self::Bikes => "bikes",
            Self::Hubs => "hubs",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// GeoJSON-style position. Coordinates are ordered `[longitude, latitude]`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            coordinates: vec![longitude, latitude],
        }
    }

    /// The position as a point (x = longitude, y = latitude).
    ///
    /// Returns `None` unless exactly two coordinates are present.
    pub fn point(&self) -> Option<Point> {
        match self.coordinates.as_slice() {
            [longitude, latitude] => Some(Point::new(*longitude, *latitude)),
            _ => None,
        }
    }
}

/// A bike (or other vehicle) and its current location.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bike {
    #[serde(deserialize_with = "null_as_default")]
    pub id: BikeIdentifier,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_id: NetworkIdentifier,
    pub stats_last_por: Option<String>,
    pub battery_level: Option<i64>,
    pub vehicle_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub unlocking_methods: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sponsored: bool,
    pub ebike_battery_level: Option<i64>,
    /// Remaining e-bike range as reported by the vendor
    pub ebike_battery_distance: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub inside_area: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_position: Position,
}

/// A hub (station) and its middle point.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hub {
    #[serde(deserialize_with = "null_as_default")]
    pub id: HubIdentifier,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_id: NetworkIdentifier,
    pub area_id: Option<i64>,

    // Availability
    #[serde(deserialize_with = "null_as_default")]
    pub available_bikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub available_ebikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub available_scooters: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub available_vehicles: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_bikes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_racks: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub racks_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sponsored_bikes: i64,

    // Flags
    #[serde(deserialize_with = "null_as_default")]
    pub has_charging_infrastructure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_kiosk: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub low_charge_bounty_hub: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rebalance_bounty_hub: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub public: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sponsored: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub warehouse: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub middle_point: Position,
}

impl Hub {
    /// Regular plus electric bikes ready to ride
    pub fn bikes_available(&self) -> i64 {
        self.available_bikes + self.available_ebikes
    }
}

/// Paginated response body. Only `items` is consumed.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub current_page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
    #[serde(default)]
    pub total_entries: Option<i64>,
    pub items: Vec<T>,
}

/// Decodes `null` the same way as a missing key: as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum JumpError {
    #[error("invalid url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("network id {0:?} cannot be sent in a header")]
    InvalidNetwork(NetworkIdentifier),

    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{resource}: request failed: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource}: timed out after {}ms", .timeout.as_millis())]
    Timeout { resource: Resource, timeout: Duration },

    #[error("{resource}: got status code {status}: {body}")]
    Status {
        resource: Resource,
        status: u16,
        body: String,
    },

    #[error("{resource}: could not decode response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl JumpError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, JumpError>;
