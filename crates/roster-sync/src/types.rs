//! Wire types for the sheet web-app endpoint.

use serde::{Deserialize, Serialize};

/// One stored schedule entry.
///
/// `day_name` is derived from the date at save time and sent along for
/// the sheet's benefit; it is not authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub date_key: String,
    pub content: String,
    pub day_name: String,
}

/// Result of a successful upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// What the endpoint did with the entry (e.g. "created", "updated").
    pub action: Option<String>,
}

/// One row of the bulk fetch response.
///
/// Rows without a date key come from blank sheet lines and are skipped,
/// matching the endpoint's loose contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEntry {
    #[serde(default)]
    pub date_key: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// POST body for an upsert.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveRequest<'a> {
    pub date_key: &'a str,
    pub content: &'a str,
    pub day_name: &'a str,
}

/// Endpoint reply to an upsert.
#[derive(Debug, Deserialize)]
pub(crate) struct SaveResponse {
    pub status: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_entry_uses_camel_case_keys() {
        let entry = ScheduleEntry {
            date_key: "2024-03-05".to_string(),
            content: "Alice".to_string(),
            day_name: "Tuesday".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"dateKey":"2024-03-05","content":"Alice","dayName":"Tuesday"}"#
        );
    }

    #[test]
    fn test_save_request_serialization() {
        let req = SaveRequest {
            date_key: "2024-03-05",
            content: "Bob",
            day_name: "Tuesday",
        };

        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"dateKey":"2024-03-05","content":"Bob","dayName":"Tuesday"}"#
        );
    }

    #[test]
    fn test_raw_entry_tolerates_missing_fields() {
        let row: RawEntry = serde_json::from_str(r#"{"content":"orphan"}"#).unwrap();
        assert!(row.date_key.is_none());

        let row: RawEntry = serde_json::from_str(r#"{"dateKey":"2024-03-05"}"#).unwrap();
        assert_eq!(row.date_key.as_deref(), Some("2024-03-05"));
        assert!(row.content.is_none());
    }

    #[test]
    fn test_save_response_defaults() {
        let resp: SaveResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(resp.status, "success");
        assert!(resp.action.is_none());
        assert!(resp.message.is_none());
    }
}
