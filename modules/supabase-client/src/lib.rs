pub mod error;

pub use error::{Result, SupabaseError};

use serde::Serialize;

/// PostgREST preference asking the store not to echo inserted rows back.
const PREFER_RETURN_MINIMAL: &str = "return=minimal";

pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Bulk insert `rows` into `table` with a single POST.
    ///
    /// The anon key goes out both as `apikey` and as the bearer token, which
    /// is what the Supabase gateway expects for anonymous access.
    pub async fn insert<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        let url = self.table_url(table);
        let body = serde_json::to_vec(rows)?;

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Prefer", PREFER_RETURN_MINIMAL)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(table, rows = rows.len(), status = %status, "Insert accepted");
        Ok(())
    }
}
