use railway_stations_client::RailwayStationsError;
use supabase_client::SupabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Source '{source_name}' failed: {message}")]
    Source { source_name: String, message: String },

    #[error("Sink '{sink_name}' failed: {message}")]
    Sink { sink_name: String, message: String },
}

impl IngestError {
    pub fn source_failed(source_name: &str, err: impl std::fmt::Display) -> Self {
        IngestError::Source {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    }

    pub fn sink_failed(sink_name: &str, err: impl std::fmt::Display) -> Self {
        IngestError::Sink {
            sink_name: sink_name.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<RailwayStationsError> for IngestError {
    fn from(err: RailwayStationsError) -> Self {
        IngestError::source_failed("railway-stations", err)
    }
}

impl From<SupabaseError> for IngestError {
    fn from(err: SupabaseError) -> Self {
        IngestError::sink_failed("supabase", err)
    }
}
