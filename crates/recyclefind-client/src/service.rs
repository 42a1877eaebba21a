use std::future::Future;

use recyclefind_core::{FinderError, SearchQuery, SearchResponse};

/// Something that can answer a search query.
///
/// Implemented by [`crate::SearchClient`] for the real service; tests and
/// embedders can supply their own.
pub trait SearchService {
    /// Issues exactly one request for `query`.
    ///
    /// A service-side `"status": "error"` is a successful call that yields
    /// [`SearchResponse::Error`]; only transport and decode problems are
    /// returned as `Err`.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchResponse, FinderError>> + Send;
}
