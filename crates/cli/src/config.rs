//! Command-line flags and the reference coordinate.

use std::env::VarError;
use std::num::ParseFloatError;
use std::time::Duration;

use bikealert_jump::JumpConfig;
use bikealert_jump::network::http::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use clap::Parser;
use geo::Point;

pub const LATITUDE_VAR: &str = "LAT";
pub const LONGITUDE_VAR: &str = "LNG";

pub const DEFAULT_NETWORK: &str = "4";

#[derive(Parser, Debug)]
#[command(
    name = "bikealert",
    version,
    about = "Show the JUMP bikes and hubs closest to you",
    long_about = "Fetches the live bike and hub listings for one JUMP network and prints \
                  the nearest of each.\n\n\
                  The reference point is read from the LAT and LNG environment variables \
                  (decimal degrees)."
)]
pub struct Args {
    /// JUMP network to query
    #[arg(long, env = "JUMP_NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// API host
    #[arg(long, env = "JUMP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds to wait for each listing
    #[arg(long, env = "JUMP_TIMEOUT", default_value_t = 5)]
    pub timeout: u64,

    /// How many bikes and hubs to show
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn jump_config(&self) -> JumpConfig {
        JumpConfig::new(self.network.as_str())
            .with_base_url(self.base_url.as_str())
            .with_timeout(self.deadline())
            .with_page_size(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("envvar \"{0}\" not set")]
    Missing(&'static str),

    #[error("envvar \"{0}\" is not valid unicode")]
    NotUnicode(&'static str),

    #[error("error parsing envvar \"{name}\" ({value:?}) as float")]
    Invalid {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Reference point from `LAT`/`LNG` (x = longitude, y = latitude).
pub fn origin_from(
    lookup: impl Fn(&str) -> Result<String, VarError>,
) -> Result<Point, ConfigError> {
    let latitude = float_var(&lookup, LATITUDE_VAR)?;
    let longitude = float_var(&lookup, LONGITUDE_VAR)?;

    Ok(Point::new(longitude, latitude))
}

fn float_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    name: &'static str,
) -> Result<f64, ConfigError> {
    let value = lookup(name).map_err(|e| match e {
        VarError::NotPresent => ConfigError::Missing(name),
        VarError::NotUnicode(_) => ConfigError::NotUnicode(name),
    })?;

    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::Invalid {
            name,
            value,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_origin_from_env() {
        let origin = origin_from(env(&[("LAT", "37.7749"), ("LNG", "-122.4194")])).unwrap();
        assert_eq!(origin.y(), 37.7749);
        assert_eq!(origin.x(), -122.4194);
    }

    #[test]
    fn test_missing_latitude() {
        let error = origin_from(env(&[("LNG", "-122.4194")])).unwrap_err();
        assert!(matches!(error, ConfigError::Missing("LAT")));
        assert_eq!(error.to_string(), "envvar \"LAT\" not set");
    }

    #[test]
    fn test_missing_longitude() {
        let error = origin_from(env(&[("LAT", "37.7749")])).unwrap_err();
        assert!(matches!(error, ConfigError::Missing("LNG")));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let error = origin_from(env(&[("LAT", "north"), ("LNG", "-122.4194")])).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { name: "LAT", .. }));
        assert!(error.to_string().contains("\"north\""));
    }

    #[test]
    fn test_out_of_range_is_accepted() {
        let origin = origin_from(env(&[("LAT", "123"), ("LNG", "-540")])).unwrap();
        assert_eq!(origin.y(), 123.0);
    }

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["bikealert"]).unwrap();
        assert_eq!(args.count, 5);
        assert_eq!(args.deadline(), Duration::from_secs(5));

        let config = args.jump_config();
        assert_eq!(config.page_size, 999);
    }

    #[test]
    fn test_args_override_defaults() {
        let args = Args::try_parse_from([
            "bikealert",
            "--network",
            "12",
            "--timeout",
            "2",
            "-n",
            "3",
            "--base-url",
            "http://localhost:8080",
        ])
        .unwrap();

        let config = args.jump_config();
        assert_eq!(config.network_id.as_str(), "12");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(args.count, 3);
    }
}
