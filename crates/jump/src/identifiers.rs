//! Type-safe identifiers for JUMP entities.
//!
//! All identifiers use Arc<str> for cheap cloning. The vendor is not
//! consistent about id types (bikes carry integers, hubs carry floats), so
//! every identifier decodes from a string, an integer or a float.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawIdentifier {
    fn into_text(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            // 12.0 -> "12"
            Self::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                format!("{value:.0}")
            }
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new("")
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawIdentifier::deserialize(deserializer).map(|raw| Self::new(raw.into_text()))
            }
        }
    };
}

impl_identifier!(NetworkIdentifier);
impl_identifier!(BikeIdentifier);
impl_identifier!(HubIdentifier);
