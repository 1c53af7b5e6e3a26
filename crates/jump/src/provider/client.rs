//! Typed access to a JUMP network's bikes and hubs.
//!
//! [`JumpClient`] decodes listing envelopes on top of any [`DataFetcher`].
//! [`JumpClient::listings`] fetches both resources concurrently, each
//! under its own deadline. The join is fail-fast: the first error wins and
//! the other fetch is dropped, which cancels its in-flight request.

use std::future::Future;
use std::time::Duration;

use geo::Point;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::types::{Bike, Envelope, Hub, JumpError, Resource, Result};
use crate::network::http::{HttpFetcher, JumpConfig};
use crate::network::traits::DataFetcher;
use crate::spatial::ranking::{Ranked, nearest};

pub struct JumpClient<F = HttpFetcher> {
    fetcher: F,
}

impl JumpClient<HttpFetcher> {
    pub fn new(config: JumpConfig) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new(config)?))
    }
}

impl<F: DataFetcher> JumpClient<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// All bikes in the network
    pub async fn bikes(&self) -> Result<Vec<Bike>> {
        self.items(Resource::Bikes).await
    }

    /// All hubs in the network
    pub async fn hubs(&self) -> Result<Vec<Hub>> {
        self.items(Resource::Hubs).await
    }

    /// Fetch bikes and hubs concurrently, each bounded by `deadline`.
    pub async fn listings(&self, deadline: Duration) -> Result<Listings> {
        let (bikes, hubs) = tokio::try_join!(
            within(Resource::Bikes, deadline, self.bikes()),
            within(Resource::Hubs, deadline, self.hubs()),
        )?;

        Ok(Listings { bikes, hubs })
    }

    async fn items<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let body = self.fetcher.fetch(resource).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|source| JumpError::Decode { resource, source })?;

        debug!(
            items = envelope.items.len(),
            total_entries = envelope.total_entries,
            "decoded {resource}"
        );
        Ok(envelope.items)
    }
}

async fn within<T>(
    resource: Resource,
    deadline: Duration,
    fetch: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(deadline, fetch)
        .await
        .map_err(|_| JumpError::Timeout {
            resource,
            timeout: deadline,
        })?
}

/// One snapshot of a network
#[derive(Clone, Debug, Default)]
pub struct Listings {
    pub bikes: Vec<Bike>,
    pub hubs: Vec<Hub>,
}

impl Listings {
    pub fn nearest_bikes(&self, origin: Point, n: usize) -> Vec<Ranked<&Bike>> {
        nearest(origin, &self.bikes, n)
    }

    pub fn nearest_hubs(&self, origin: Point, n: usize) -> Vec<Ranked<&Hub>> {
        nearest(origin, &self.hubs, n)
    }
}
