//! Query validation and response decoding for the search service.
//!
//! The service wraps every answer in a `{"status": ...}` envelope. Errors
//! carry a `message`; successes carry `data`. The deployed service reports
//! success as `"success"` while older deployments used `"ok"`, so both are
//! accepted.

use serde::Deserialize;

use crate::error::FinderError;
use crate::records::BusinessRecord;

/// A validated city/country pair.
///
/// Both values are trimmed of surrounding whitespace on construction and
/// the trimmed values are what gets sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    city: String,
    country: String,
}

impl SearchQuery {
    /// # Errors
    ///
    /// Returns [`FinderError::MissingInput`] if either value is blank.
    pub fn new(city: &str, country: &str) -> Result<Self, FinderError> {
        let city = city.trim();
        let country = country.trim();
        if city.is_empty() || country.is_empty() {
            return Err(FinderError::MissingInput);
        }
        Ok(Self {
            city: city.to_owned(),
            country: country.to_owned(),
        })
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// `"<city>, <country>"`, the form the service geocodes.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// A decoded service answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    Ok { data: Vec<BusinessRecord> },
    Error { message: String },
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<serde_json::Value>>,
}

impl SearchResponse {
    /// Decodes a response body.
    ///
    /// `context` names the request in error messages.
    ///
    /// # Errors
    ///
    /// - [`FinderError::Deserialize`] if the body is not a JSON envelope, or
    ///   a success envelope has no `data`.
    /// - [`FinderError::UnexpectedStatus`] for a status other than
    ///   `error`/`ok`/`success`.
    /// - [`FinderError::MalformedRecord`] if an entry of `data` is not a
    ///   usable business.
    pub fn from_json(body: &str, context: &str) -> Result<Self, FinderError> {
        let envelope: RawEnvelope =
            serde_json::from_str(body).map_err(|e| FinderError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        match envelope.status.as_str() {
            "error" => Ok(Self::Error {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            }),
            "ok" | "success" => {
                let raw = envelope.data.ok_or_else(|| FinderError::Deserialize {
                    context: context.to_owned(),
                    source: <serde_json::Error as serde::de::Error>::missing_field("data"),
                })?;
                let data = raw
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| decode_record(index, value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Ok { data })
            }
            other => Err(FinderError::UnexpectedStatus(other.to_owned())),
        }
    }

    /// Unwraps the records, turning a service-side error into
    /// [`FinderError::Service`].
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Service`] with the server-supplied message.
    pub fn into_records(self) -> Result<Vec<BusinessRecord>, FinderError> {
        match self {
            Self::Ok { data } => Ok(data),
            Self::Error { message } => Err(FinderError::Service(message)),
        }
    }
}

fn decode_record(index: usize, value: serde_json::Value) -> Result<BusinessRecord, FinderError> {
    let record: BusinessRecord =
        serde_json::from_value(value).map_err(|e| FinderError::MalformedRecord {
            index,
            reason: e.to_string(),
        })?;
    if let Some(reason) = record.defect() {
        return Err(FinderError::MalformedRecord {
            index,
            reason: reason.to_string(),
        });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_both_values() {
        let query = SearchQuery::new("  Newcastle ", "\tUK\n").unwrap();
        assert_eq!(query.city(), "Newcastle");
        assert_eq!(query.country(), "UK");
        assert_eq!(query.location(), "Newcastle, UK");
    }

    #[test]
    fn query_rejects_blank_values() {
        for (city, country) in [("", "UK"), ("Newcastle", ""), ("   ", "UK"), ("", "")] {
            assert!(
                matches!(
                    SearchQuery::new(city, country),
                    Err(FinderError::MissingInput)
                ),
                "expected MissingInput for ({city:?}, {country:?})"
            );
        }
    }

    #[test]
    fn decodes_error_envelope() {
        let response =
            SearchResponse::from_json(r#"{"status":"error","message":"No results"}"#, "test")
                .unwrap();
        assert_eq!(
            response,
            SearchResponse::Error {
                message: "No results".to_string()
            }
        );
    }

    #[test]
    fn error_envelope_without_message_gets_placeholder() {
        let response = SearchResponse::from_json(r#"{"status":"error"}"#, "test").unwrap();
        let err = response.into_records().unwrap_err();
        assert_eq!(err.to_string(), "unknown error");
    }

    #[test]
    fn decodes_ok_and_success_envelopes() {
        for status in ["ok", "success"] {
            let body = format!(
                r#"{{"status":"{status}","count":1,"data":[{{"name":"Acme Recycling","address":"123 Main St","materials":["plastic","glass"]}}]}}"#
            );
            let records = SearchResponse::from_json(&body, "test")
                .unwrap()
                .into_records()
                .unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].name, "Acme Recycling");
        }
    }

    #[test]
    fn success_without_data_is_a_decode_error() {
        let err = SearchResponse::from_json(r#"{"status":"ok"}"#, "test").unwrap_err();
        assert!(
            matches!(err, FinderError::Deserialize { .. }),
            "got: {err:?}"
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = SearchResponse::from_json(r#"{"status":"pending"}"#, "test").unwrap_err();
        assert!(matches!(err, FinderError::UnexpectedStatus(ref s) if s == "pending"));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = SearchResponse::from_json("<html>502</html>", "search").unwrap_err();
        assert!(matches!(err, FinderError::Deserialize { ref context, .. } if context == "search"));
    }

    #[test]
    fn malformed_record_reports_index() {
        let body = r#"{"status":"ok","data":[
            {"name":"Good","address":"1 St"},
            {"address":"2 St"}
        ]}"#;
        let err = SearchResponse::from_json(body, "test").unwrap_err();
        assert!(
            matches!(err, FinderError::MalformedRecord { index: 1, .. }),
            "got: {err:?}"
        );
    }

    #[test]
    fn blank_name_is_a_malformed_record() {
        let body = r#"{"status":"ok","data":[{"name":" ","address":"1 St"}]}"#;
        let err = SearchResponse::from_json(body, "test").unwrap_err();
        assert!(matches!(err, FinderError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn empty_data_decodes_to_no_records() {
        let records = SearchResponse::from_json(r#"{"status":"ok","data":[]}"#, "test")
            .unwrap()
            .into_records()
            .unwrap();
        assert!(records.is_empty());
    }
}
