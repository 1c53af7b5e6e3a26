//! Pluggable networking traits.
//!
//! The HTTP implementation lives in [`crate::network::http`]; tests and
//! alternative transports implement [`DataFetcher`] directly.

use std::future::Future;
use std::pin::Pin;

use crate::models::types::{Resource, Result};

/// Fetch the raw response body for one listing resource
pub trait DataFetcher: Send + Sync {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

impl<F: DataFetcher + ?Sized> DataFetcher for &F {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        (**self).fetch(resource)
    }
}

impl<F: DataFetcher + ?Sized> DataFetcher for std::sync::Arc<F> {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        (**self).fetch(resource)
    }
}
