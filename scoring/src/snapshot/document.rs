use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::models::{
    Athlete, Division, Event, EventPart, Heat, LaneAssignment, PartDivisionSpec, Score,
};
use crate::services::points::PointsTable;

use super::Snapshot;
use super::validator::SnapshotValidator;

pub const FORMAT_VERSION: &str = "1.0.0";

/// Self-contained competition state as exchanged on disk or over the wire.
///
/// A document is inert data; [`SnapshotDocument::into_snapshot`] validates it
/// and produces the indexed form the ranking services read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub format_version: String,
    pub competition: CompetitionInfo,
    pub divisions: Vec<Division>,
    pub athletes: Vec<Athlete>,
    pub events: Vec<Event>,
    pub parts: Vec<EventPart>,
    pub scores: Vec<Score>,
    #[serde(default)]
    pub heats: Vec<Heat>,
    #[serde(default)]
    pub lane_assignments: Vec<LaneAssignment>,
    #[serde(default)]
    pub part_specs: Vec<PartDivisionSpec>,
    /// Points-per-place table override. Absent means the standard table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_table: Option<PointsTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionInfo {
    pub name: String,
    pub slug: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl SnapshotDocument {
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(raw)?;
        if document.format_version != FORMAT_VERSION {
            return Err(ScoringError::UnsupportedFormatVersion(
                document.format_version,
            ));
        }
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the document and freezes it into a queryable [`Snapshot`].
    /// Validation warnings are logged; errors abort the conversion.
    pub fn into_snapshot(self) -> Result<Snapshot> {
        let report = SnapshotValidator::validate(&self)?;
        report.log_warnings();
        Ok(Snapshot::from_document(self))
    }
}
