//! Report models for the Reports tab.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Activity,
    Security,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub kind: ReportKind,
    pub generated: NaiveDate,
    /// Display size (e.g., `2.5 MB`).
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReport {
    pub id: String,
    pub name: String,
    /// Human-readable schedule (e.g., `Every Monday at 9:00 AM`).
    pub schedule: String,
}
