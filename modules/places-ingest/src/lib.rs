pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sink;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dedup::dedupe_by_name;
pub use error::IngestError;
pub use pipeline::Pipeline;
pub use report::{RunReport, StageOutcome, StageReport};
pub use sink::{PlaceSink, SaveOutcome, TableStoreSink};
pub use source::{PlaceSource, RailwayStationSource, WebScrapeSource};
