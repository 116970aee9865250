use async_trait::async_trait;
use places_common::Place;
use supabase_client::SupabaseClient;
use tracing::info;

use crate::error::IngestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { count: usize },
    /// Nothing to write; no request was made.
    Skipped,
}

/// Destination for the deduplicated places of a run.
#[async_trait]
pub trait PlaceSink: Send + Sync {
    fn name(&self) -> &str;

    async fn save(&self, places: &[Place]) -> Result<SaveOutcome, IngestError>;
}

/// Blind bulk insert into a Supabase table. No upsert, no retry.
pub struct TableStoreSink {
    client: SupabaseClient,
    table: String,
}

impl TableStoreSink {
    pub fn new(client: SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl PlaceSink for TableStoreSink {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn save(&self, places: &[Place]) -> Result<SaveOutcome, IngestError> {
        if places.is_empty() {
            info!("No data to save");
            return Ok(SaveOutcome::Skipped);
        }

        info!(count = places.len(), table = %self.table, "Saving places to Supabase");
        self.client.insert(&self.table, places).await?;
        info!(count = places.len(), "Places saved to Supabase");

        Ok(SaveOutcome::Saved {
            count: places.len(),
        })
    }
}
