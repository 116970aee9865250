// Test doubles for the pipeline's two trait boundaries:
// - MockSource / FailingSource (PlaceSource)
// - RecordingSink / FailingSink (PlaceSink)

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use places_common::{Location, Place};

use crate::error::IngestError;
use crate::sink::{PlaceSink, SaveOutcome};
use crate::source::PlaceSource;

/// Minimal place keyed by name; `province` doubles as a marker to tell
/// duplicates apart.
pub fn place(name: &str, province: &str) -> Place {
    Place {
        name: name.to_string(),
        description: format!("{name} description"),
        province: province.to_string(),
        place_type: "test".to_string(),
        image_url: None,
        location: Location { lat: 0.0, lng: 0.0 },
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Returns a fixed list of places.
pub struct MockSource {
    name: String,
    places: Vec<Place>,
}

impl MockSource {
    pub fn new(name: &str, places: Vec<Place>) -> Self {
        Self {
            name: name.to_string(),
            places,
        }
    }
}

#[async_trait]
impl PlaceSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<Place>, IngestError> {
        Ok(self.places.clone())
    }
}

/// Always fails with the given message.
pub struct FailingSource {
    name: String,
    message: String,
}

impl FailingSource {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PlaceSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<Place>, IngestError> {
        Err(IngestError::source_failed(&self.name, &self.message))
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Records every batch it is handed. Clones share the same record, so keep a
/// clone to inspect after handing one to the pipeline.
#[derive(Clone, Default)]
pub struct RecordingSink {
    batches: Arc<Mutex<Vec<Vec<Place>>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> Vec<Vec<Place>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn save(&self, places: &[Place]) -> Result<SaveOutcome, IngestError> {
        self.batches.lock().unwrap().push(places.to_vec());
        if places.is_empty() {
            return Ok(SaveOutcome::Skipped);
        }
        Ok(SaveOutcome::Saved {
            count: places.len(),
        })
    }
}

/// Always fails with the given message.
pub struct FailingSink {
    message: String,
}

impl FailingSink {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl PlaceSink for FailingSink {
    fn name(&self) -> &str {
        "failing"
    }

    async fn save(&self, _places: &[Place]) -> Result<SaveOutcome, IngestError> {
        Err(IngestError::sink_failed("failing", &self.message))
    }
}
