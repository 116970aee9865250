// Ingest pipeline: fetch -> concatenate -> dedupe -> save.
//
// Straight-line, one pass per invocation. Each stage reports an outcome and
// the pipeline keeps going: a failed source contributes nothing, a failed
// save is logged and recorded in the report.

use chrono::Utc;
use places_common::{Config, Place};
use railway_stations_client::RailwayStationsClient;
use supabase_client::SupabaseClient;
use tracing::{error, info};
use uuid::Uuid;

use crate::dedup::dedupe_by_name;
use crate::report::{RunReport, StageOutcome, StageReport};
use crate::sink::{PlaceSink, SaveOutcome, TableStoreSink};
use crate::source::{PlaceSource, RailwayStationSource, WebScrapeSource};

pub struct Pipeline {
    sources: Vec<Box<dyn PlaceSource>>,
    sink: Box<dyn PlaceSink>,
}

impl Pipeline {
    pub fn new(sources: Vec<Box<dyn PlaceSource>>, sink: Box<dyn PlaceSink>) -> Self {
        Self { sources, sink }
    }

    /// Production wiring: railway stations, then the disabled web scraper,
    /// saved to the configured Supabase table.
    pub fn from_config(config: &Config) -> Self {
        let stations = RailwayStationsClient::new(&config.stations_base_url);
        let store = SupabaseClient::new(&config.store_url, &config.store_api_key);

        Self::new(
            vec![
                Box::new(RailwayStationSource::new(stations, &config.stations_country)),
                Box::new(WebScrapeSource),
            ],
            Box::new(TableStoreSink::new(store, &config.store_table)),
        )
    }

    pub async fn run(&self) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, sources = self.sources.len(), "Starting places ingest");

        let (all, sources) = self.fetch_all().await;
        let fetched = all.len();

        let unique = dedupe_by_name(all);
        info!(fetched, unique = unique.len(), "Deduplicated places by name");

        let sink = self.save(&unique).await;

        let report = RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            sources,
            fetched,
            unique: unique.len(),
            sink,
        };
        info!(%run_id, "Places ingest completed");
        report
    }

    /// Run every source in order and concatenate what they return.
    async fn fetch_all(&self) -> (Vec<Place>, Vec<StageReport>) {
        let mut all = Vec::new();
        let mut reports = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let outcome = match source.fetch().await {
                Ok(places) => {
                    let records = places.len();
                    all.extend(places);
                    StageOutcome::Succeeded { records }
                }
                Err(e) => {
                    error!(source = source.name(), error = %e, "Source failed, continuing without it");
                    StageOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            reports.push(StageReport::new(source.name(), outcome));
        }

        (all, reports)
    }

    async fn save(&self, places: &[Place]) -> StageReport {
        let outcome = match self.sink.save(places).await {
            Ok(SaveOutcome::Saved { count }) => StageOutcome::Succeeded { records: count },
            Ok(SaveOutcome::Skipped) => StageOutcome::Skipped {
                reason: "nothing to save".to_string(),
            },
            Err(e) => {
                error!(sink = self.sink.name(), error = %e, "Saving places failed");
                StageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        StageReport::new(self.sink.name(), outcome)
    }
}
