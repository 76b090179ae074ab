//! Boundary data-transfer objects for the management screens.
//!
//! These types pin down the JSON shapes the screens render (payroll runs,
//! attendance, leave requests, database objects, service directories).
//! No transport is attached; records arrive as plain JSON documents.

pub mod attendance;
pub mod database;
pub mod directory;
pub mod payroll;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::styles::BadgeVariant;

pub use attendance::{AttendanceRecord, AttendanceStatus, LeaveRequest, LeaveStatus};
pub use database::{
    BackupInfo, CollectionInfo, DatabaseObject, DbUserInfo, IndexInfo, RelationInfo, SchemaInfo,
    TableInfo,
};
pub use directory::DirectoryClass;
pub use payroll::{
    EmployeeRef, PayPeriod, PayPeriodType, PayrollRecord, PayrollStatus, PayrollTotals,
};

/// A record that carries a displayable status.
pub trait HasStatus {
    /// Label shown in the status chip.
    fn status_label(&self) -> String;

    /// Colour scheme of the status chip.
    fn badge_variant(&self) -> BadgeVariant;
}

/// Counts records per status label.
#[must_use]
pub fn summarize_statuses<T: HasStatus>(records: &[T]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status_label()).or_insert(0) += 1;
    }
    counts
}

/// Which record shape a JSON document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Payroll runs.
    Payroll,
    /// Daily attendance.
    Attendance,
    /// Leave requests.
    Leave,
    /// Database objects of any class.
    Database,
    /// Service directory classes.
    Directory,
}

impl RecordKind {
    /// Every kind.
    pub const ALL: &'static [Self] = &[
        Self::Payroll,
        Self::Attendance,
        Self::Leave,
        Self::Database,
        Self::Directory,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payroll => "payroll",
            Self::Attendance => "attendance",
            Self::Leave => "leave",
            Self::Database => "database",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown record kind '{s}'"))
    }
}

/// Per-status counts of a parsed record document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// Kind that was parsed.
    pub kind: RecordKind,
    /// Number of records.
    pub total: usize,
    /// Records per status label (per file type for directories).
    pub counts: BTreeMap<String, usize>,
    /// Badge variant of each status label.
    pub variants: BTreeMap<String, BadgeVariant>,
}

/// Parses a JSON array of `kind` records and counts them by status.
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of the expected shape.
pub fn summarize_json(kind: RecordKind, source: &str) -> Result<RecordSummary> {
    match kind {
        RecordKind::Payroll => status_summary::<PayrollRecord>(kind, source),
        RecordKind::Attendance => status_summary::<AttendanceRecord>(kind, source),
        RecordKind::Leave => status_summary::<LeaveRequest>(kind, source),
        RecordKind::Database => status_summary::<DatabaseObject>(kind, source),
        RecordKind::Directory => {
            let records: Vec<DirectoryClass> = parse_array(kind, source)?;
            Ok(RecordSummary {
                kind,
                total: records.len(),
                counts: directory::count_file_types(&records),
                variants: BTreeMap::new(),
            })
        }
    }
}

fn status_summary<T: HasStatus + DeserializeOwned>(
    kind: RecordKind,
    source: &str,
) -> Result<RecordSummary> {
    let records: Vec<T> = parse_array(kind, source)?;
    let variants = records
        .iter()
        .map(|r| (r.status_label(), r.badge_variant()))
        .collect();
    Ok(RecordSummary {
        kind,
        total: records.len(),
        counts: summarize_statuses(&records),
        variants,
    })
}

fn parse_array<T: DeserializeOwned>(kind: RecordKind, source: &str) -> Result<Vec<T>> {
    serde_json::from_str(source).with_context(|| format!("Failed to parse {kind} records"))
}
