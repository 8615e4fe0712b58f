//! Supabase REST (PostgREST) client
//!
//! Inserts go to `POST {url}/rest/v1/{table}` authenticated with the
//! service role key. No timeout and no retry are applied.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::store::ProjectStore;
use crate::config::StoreConfig;
use crate::import::ProjectRecord;

/// Table receiving imported projects
pub const PROJECTS_TABLE: &str = "projects";

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl SupabaseClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(http: reqwest::Client, config: &StoreConfig) -> Self {
        Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Insert a single row into `table`
    pub async fn insert<T: Serialize + ?Sized>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let url = self.table_url(table);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Api {
            status: status.as_u16(),
            message: describe_error_body(&body),
        })
    }
}

#[async_trait]
impl ProjectStore for SupabaseClient {
    fn describe(&self) -> String {
        format!("Supabase ({})", self.base_url)
    }

    async fn insert_project(&self, record: &ProjectRecord) -> Result<(), StoreError> {
        self.insert(PROJECTS_TABLE, record).await
    }
}

/// Readable message from a PostgREST error body, raw text otherwise
fn describe_error_body(body: &str) -> String {
    let Ok(error) = serde_json::from_str::<PostgrestError>(body) else {
        return body.trim().to_string();
    };

    let parts: Vec<String> = [error.message, error.details, error.hint]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();

    if parts.is_empty() {
        body.trim().to_string()
    } else {
        parts.join(" | ")
    }
}
