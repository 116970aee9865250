use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

/// How a single stage of a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    Succeeded { records: usize },
    Skipped { reason: String },
    Failed { reason: String },
}

impl StageOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StageOutcome::Failed { .. })
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageOutcome::Succeeded { records } => write!(f, "succeeded ({records} records)"),
            StageOutcome::Skipped { reason } => write!(f, "skipped ({reason})"),
            StageOutcome::Failed { reason } => write!(f, "failed ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub outcome: StageOutcome,
}

impl StageReport {
    pub fn new(stage: impl Into<String>, outcome: StageOutcome) -> Self {
        Self {
            stage: stage.into(),
            outcome,
        }
    }
}

/// Summary of one pipeline run.
///
/// A run always completes; failures only show up here and in the logs.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// One entry per source, in invocation order.
    pub sources: Vec<StageReport>,
    /// Places across all sources before dedupe.
    pub fetched: usize,
    /// Places after dedupe, i.e. what was handed to the sink.
    pub unique: usize,
    pub sink: StageReport,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.sink.outcome.is_failure() || self.sources.iter().any(|s| s.outcome.is_failure())
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    pub fn log_summary(&self) {
        for source in &self.sources {
            info!(run_id = %self.run_id, source = %source.stage, outcome = %source.outcome, "Source summary");
        }
        info!(
            run_id = %self.run_id,
            fetched = self.fetched,
            unique = self.unique,
            sink = %self.sink.stage,
            outcome = %self.sink.outcome,
            duration_ms = self.duration_ms(),
            "Run summary"
        );
        if self.has_failures() {
            warn!(run_id = %self.run_id, "Run completed with failures");
        }
    }
}
