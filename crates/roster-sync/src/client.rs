//! HTTP client for the sheet web-app endpoint.

use std::collections::HashMap;

use tracing::instrument;

use crate::error::SyncError;
use crate::types::{RawEntry, SaveOutcome, SaveRequest, SaveResponse, ScheduleEntry};

/// Client for one schedule endpoint.
///
/// The endpoint exposes the whole dataset on GET and accepts single-entry
/// upserts on POST. Calls are not coordinated against each other; with
/// concurrent writes, last response wins.
pub struct SheetClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SheetClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Build a client honoring the endpoint config.
    ///
    /// `allow_invalid_certs` only takes effect in debug builds.
    pub fn with_config(endpoint: &str, allow_invalid_certs: bool) -> Result<Self, SyncError> {
        let mut builder = reqwest::Client::builder();
        if cfg!(debug_assertions) && allow_invalid_certs {
            tracing::warn!("Certificate validation disabled for {}", endpoint);
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.to_string(),
        })
    }

    /// Fetch the full stored dataset as a date-key to content mapping.
    ///
    /// Rows without a date key are skipped. Transport failures and
    /// malformed bodies are load failures; the caller is expected to
    /// render an empty grid regardless.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_all(&self) -> Result<HashMap<String, String>, SyncError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::EndpointError {
                status: status.as_u16(),
                message: text,
            });
        }

        let rows: Vec<RawEntry> = response
            .json()
            .await
            .map_err(|e| SyncError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        let mut entries = HashMap::with_capacity(rows.len());
        for row in rows {
            if let Some(date_key) = row.date_key {
                entries.insert(date_key, row.content.unwrap_or_default());
            }
        }

        tracing::debug!("Fetched {} entries", entries.len());
        Ok(entries)
    }

    /// Upsert one entry.
    ///
    /// Content is whitespace-trimmed before sending. The JSON body ships
    /// with content-type text/plain because Apps Script web apps reject
    /// preflighted requests. A reply with any status other than "success"
    /// is a rejected save carrying the server's message.
    #[instrument(skip(self, entry), fields(date_key = %entry.date_key), level = "info")]
    pub async fn upsert(&self, entry: &ScheduleEntry) -> Result<SaveOutcome, SyncError> {
        let body = SaveRequest {
            date_key: &entry.date_key,
            content: entry.content.trim(),
            day_name: &entry.day_name,
        };
        let payload = serde_json::to_string(&body)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::EndpointError {
                status: status.as_u16(),
                message: text,
            });
        }

        let reply: SaveResponse = response
            .json()
            .await
            .map_err(|e| SyncError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        if reply.status == "success" {
            tracing::info!(
                action = reply.action.as_deref().unwrap_or("saved"),
                "Entry saved"
            );
            Ok(SaveOutcome {
                action: reply.action,
            })
        } else {
            Err(SyncError::SaveRejected(
                reply.message.unwrap_or_else(|| reply.status.clone()),
            ))
        }
    }
}
