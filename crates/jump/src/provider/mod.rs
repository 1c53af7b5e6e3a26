//! Listing providers.

pub mod client;

pub use client::{JumpClient, Listings};
