//! HTTP access to the recycling business search service.

pub mod client;
pub mod service;

pub use client::SearchClient;
pub use service::SearchService;
