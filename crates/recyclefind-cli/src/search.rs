//! The `search` subcommand: one query cycle, written to stdout or a file,
//! optionally followed by JSON and SQL exports of the results.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{DateTime, Local};
use recyclefind_client::SearchClient;
use recyclefind_core::{AppConfig, BusinessRecord};
use recyclefind_ui::{
    BufferRegion, CardFormat, FixedInput, HtmlCards, QueryHandler, SearchOutcome, TextCards,
};

use crate::OutputFormat;

#[derive(Debug)]
pub(crate) struct SearchRequest {
    pub city: String,
    pub country: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub save_json: Option<PathBuf>,
    pub save_sql: Option<PathBuf>,
}

/// Whether the search produced results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Runs one search and writes the display region.
///
/// The status is [`RunStatus::Failure`] when the search was rejected or
/// failed; the region still carries the user-facing message in that case.
///
/// # Errors
///
/// Returns an error if the client cannot be built or an output file cannot
/// be written.
pub(crate) async fn run_search(
    config: &AppConfig,
    request: SearchRequest,
) -> anyhow::Result<RunStatus> {
    let client = SearchClient::new(config)
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;
    let input = FixedInput::new(request.city.as_str(), request.country.as_str());
    let region = BufferRegion::new();

    let outcome = match request.format {
        OutputFormat::Html => search_into(client, HtmlCards, &input, &region).await,
        OutputFormat::Text => search_into(client, TextCards, &input, &region).await,
    };

    write_output(request.output.as_deref(), &region.content())?;

    let SearchOutcome::Rendered(records) = outcome else {
        return Ok(RunStatus::Failure);
    };

    if let Some(dir) = request.save_json.as_deref() {
        let path = save_records(dir, &input, &records, Local::now())?;
        tracing::info!(path = %path.display(), "saved results");
    }
    if let Some(dir) = request.save_sql.as_deref() {
        if records.is_empty() {
            tracing::warn!("no results to write SQL for");
        } else {
            let path = save_sql(dir, &input, &records)?;
            tracing::info!(path = %path.display(), "saved SQL statements");
        }
    }
    Ok(RunStatus::Success)
}

async fn search_into<F: CardFormat>(
    client: SearchClient,
    format: F,
    input: &FixedInput,
    region: &BufferRegion,
) -> SearchOutcome {
    QueryHandler::with_format(client, format)
        .search(input, region)
        .await
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// `<city>_<country>`, lower-cased with spaces as `_`.
fn base_name(input: &FixedInput) -> String {
    let slug = |s: &str| s.trim().to_lowercase().replace(' ', "_");
    format!("{}_{}", slug(&input.city), slug(&input.country))
}

/// `<city>_<country>_<YYYYmmdd_HHMMSS>.json`.
pub(crate) fn results_file_name(input: &FixedInput, at: DateTime<Local>) -> String {
    format!("{}_{}.json", base_name(input), at.format("%Y%m%d_%H%M%S"))
}

/// `<city>_<country>.sql`.
pub(crate) fn sql_file_name(input: &FixedInput) -> String {
    format!("{}.sql", base_name(input))
}

pub(crate) fn save_records(
    dir: &Path,
    input: &FixedInput,
    records: &[BusinessRecord],
    at: DateTime<Local>,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(results_file_name(input, at));
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(&path, json)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    Ok(path)
}

pub(crate) fn save_sql(
    dir: &Path,
    input: &FixedInput,
    records: &[BusinessRecord],
) -> anyhow::Result<PathBuf> {
    let path = dir.join(sql_file_name(input));
    let script = recyclefind_report::generate_sql_statements(records);
    std::fs::write(&path, script)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    Ok(path)
}
