//! The query handler: validate, show a loading notice, call the service,
//! then show either an error notice or the rendered results.
//!
//! Overlapping searches into one region are ordered by the region's write
//! claims (see [`DisplayRegion::claim`]). When a response arrives after a
//! newer search into the same region has started, it is dropped and the
//! region is left to the newer search. The older request is not cancelled,
//! only ignored. Searches into different regions do not affect each other.

use recyclefind_client::SearchService;
use recyclefind_core::{BusinessRecord, FinderError, SearchQuery, SearchResponse};

use crate::format::{CardFormat, HtmlCards, NoticeKind};
use crate::input::InputSource;
use crate::region::DisplayRegion;
use crate::render::render_with;

pub const LOADING_MESSAGE: &str = "Searching for recycling businesses...";

/// What one call to [`QueryHandler::search`] did to the region.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Input was blank; the missing-input notice is shown and no request was made.
    Rejected,
    /// The records were rendered.
    Rendered(Vec<BusinessRecord>),
    /// An error notice is shown.
    Failed(FinderError),
    /// A newer search into the same region started while this one was in
    /// flight; this search did not touch the region after its loading notice.
    Superseded,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Runs searches against a [`SearchService`] and writes the results to a
/// [`DisplayRegion`].
pub struct QueryHandler<S, F = HtmlCards> {
    service: S,
    format: F,
}

impl<S: SearchService> QueryHandler<S> {
    /// A handler producing HTML.
    pub fn new(service: S) -> Self {
        Self::with_format(service, HtmlCards)
    }
}

impl<S: SearchService, F: CardFormat> QueryHandler<S, F> {
    pub fn with_format(service: S, format: F) -> Self {
        Self { service, format }
    }

    /// Reads the query from `input` and runs one search cycle into `region`.
    pub async fn search(
        &self,
        input: &impl InputSource,
        region: &impl DisplayRegion,
    ) -> SearchOutcome {
        // A rejected search still counts as the newest one.
        let claim = region.claim();

        let query = match SearchQuery::new(&input.city(), &input.country()) {
            Ok(query) => query,
            Err(err) => {
                region.replace(self.format.notice(NoticeKind::Error, &err.to_string()));
                return SearchOutcome::Rejected;
            }
        };

        region.replace(self.format.notice(NoticeKind::Loading, LOADING_MESSAGE));

        let result = self
            .service
            .search(&query)
            .await
            .and_then(SearchResponse::into_records);

        if !region.is_latest(claim) {
            tracing::debug!(
                location = %query.location(),
                claim,
                "discarding response superseded by a newer search"
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(records) => {
                tracing::info!(
                    location = %query.location(),
                    count = records.len(),
                    "rendering search results"
                );
                render_with(&records, region, &self.format);
                SearchOutcome::Rendered(records)
            }
            Err(err) => {
                tracing::warn!(location = %query.location(), error = %err, "search failed");
                region.replace(self.format.notice(NoticeKind::Error, &failure_text(&err)));
                SearchOutcome::Failed(err)
            }
        }
    }
}

/// Service messages are shown verbatim; anything else is prefixed.
fn failure_text(err: &FinderError) -> String {
    match err {
        FinderError::Service(message) => message.clone(),
        other => format!("Error: {other}"),
    }
}
