use std::env::VarError;
use std::io::Write;

use bikealert_jump::{DataFetcher, HttpFetcher, JumpClient};
use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::info;

mod config;
mod logging;
mod report;

use config::{Args, origin_from};
use logging::setup_logging;
use report::write_report;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let fetcher = HttpFetcher::new(args.jump_config()).wrap_err("building http client")?;
    let mut stdout = std::io::stdout().lock();

    run(&args, |name| std::env::var(name), fetcher, &mut stdout).await
}

/// Resolve the reference point, fetch both listings and print the nearest of each.
///
/// Nothing is written to `out` unless both listings arrive.
async fn run<F: DataFetcher>(
    args: &Args,
    env: impl Fn(&str) -> Result<String, VarError>,
    fetcher: F,
    out: &mut impl Write,
) -> Result<()> {
    let origin = origin_from(env).wrap_err("loading configuration")?;
    info!(
        latitude = origin.y(),
        longitude = origin.x(),
        network = %args.network,
        "looking for nearby bikes"
    );

    let client = JumpClient::with_fetcher(fetcher);
    let listings = client
        .listings(args.deadline())
        .await
        .wrap_err("fetching listings")?;
    info!(
        bikes = listings.bikes.len(),
        hubs = listings.hubs.len(),
        "received listings"
    );

    let bikes = listings.nearest_bikes(origin, args.count);
    let hubs = listings.nearest_hubs(origin, args.count);

    write_report(out, &bikes, &hubs).wrap_err("writing report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{Future, pending};
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use bikealert_jump::{JumpError, Resource};

    const BIKES: &str = r#"{"per_page": 999, "items": [
        {"id": 1, "name": "Bike 1", "address": "Null Island", "ebike_battery_level": 80,
         "current_position": {"coordinates": [0.0, 0.0]}},
        {"id": 2, "name": "Bike 2", "address": "East",
         "current_position": {"coordinates": [1.0, 0.0]}}
    ]}"#;

    const HUBS: &str = r#"{"per_page": 999, "items": [
        {"id": 9.0, "name": "Hub 9", "address": "North",
         "available_bikes": 4, "available_ebikes": 1,
         "middle_point": {"coordinates": [0.0, 0.5]}}
    ]}"#;

    /// Serves canned listings and counts requests
    struct CannedFetcher {
        hubs: Option<&'static str>,
        requests: AtomicUsize,
    }

    impl CannedFetcher {
        fn new(hubs: Option<&'static str>) -> Self {
            Self {
                hubs,
                requests: AtomicUsize::new(0),
            }
        }
    }

    impl DataFetcher for CannedFetcher {
        fn fetch<'a>(
            &'a self,
            resource: Resource,
        ) -> Pin<Box<dyn Future<Output = bikealert_jump::Result<Vec<u8>>> + Send + 'a>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                match resource {
                    Resource::Bikes => Ok(BIKES.as_bytes().to_vec()),
                    Resource::Hubs => match self.hubs {
                        Some(body) => Ok(body.as_bytes().to_vec()),
                        None => pending().await,
                    },
                }
            })
        }
    }

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bikealert").chain(extra.iter().copied())).unwrap()
    }

    fn env(
        lat: Option<&'static str>,
        lng: Option<&'static str>,
    ) -> impl Fn(&str) -> Result<String, VarError> {
        move |name| {
            match name {
                "LAT" => lat,
                "LNG" => lng,
                _ => None,
            }
            .map(str::to_string)
            .ok_or(VarError::NotPresent)
        }
    }

    #[tokio::test]
    async fn test_prints_nearest_bikes_and_hubs() {
        let mut out = Vec::new();
        let fetcher = CannedFetcher::new(Some(HUBS));
        run(&args(&[]), env(Some("0"), Some("0")), fetcher, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bikes\n\
             Bike 1 Null Island (0.00 miles, 80%)\n\
             Bike 2 East (69.09 miles)\n\
             \n\
             Hubs\n\
             Hub 9 North (5 bikes) (34.55 miles)\n"
        );
    }

    #[tokio::test]
    async fn test_count_limits_output() {
        let mut out = Vec::new();
        let fetcher = CannedFetcher::new(Some(HUBS));
        run(&args(&["-n", "1"]), env(Some("0"), Some("0")), fetcher, &mut out)
            .await
            .unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Bike 1"));
        assert!(!report.contains("Bike 2"));
    }

    #[tokio::test]
    async fn test_missing_coordinate_fails_before_fetching() {
        let fetcher = CannedFetcher::new(Some(HUBS));
        let mut out = Vec::new();

        let error = run(&args(&[]), env(Some("37.7"), None), &fetcher, &mut out)
            .await
            .unwrap_err();

        assert!(format!("{error:#}").contains("LNG"));
        assert_eq!(fetcher.requests.load(Ordering::SeqCst), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_hanging_listing_times_out_without_output() {
        let mut out = Vec::new();
        let started = Instant::now();

        // Shortest whole-second deadline the CLI accepts
        let fetcher = CannedFetcher::new(None);
        let error = run(&args(&["--timeout", "1"]), env(Some("0"), Some("0")), fetcher, &mut out)
            .await
            .unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(3));
        let timeout = error.downcast_ref::<JumpError>().unwrap();
        assert!(matches!(
            timeout,
            JumpError::Timeout { resource: Resource::Hubs, .. }
        ));
        assert!(out.is_empty());
    }
}
