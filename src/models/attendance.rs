//! Attendance and leave records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::HasStatus;
use crate::styles::BadgeVariant;

/// Presence state for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// On site for the full day.
    Present,
    /// Did not show up.
    Absent,
    /// Arrived after the start time.
    Late,
    /// Worked half a day.
    #[serde(rename = "Half Day")]
    HalfDay,
    /// Worked remotely.
    #[serde(rename = "Work from Home")]
    WorkFromHome,
}

impl AttendanceStatus {
    /// Label as shown on screen and on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::HalfDay => "Half Day",
            Self::WorkFromHome => "Work from Home",
        }
    }

    /// Badge colour for the status chip.
    #[must_use]
    pub const fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Present => BadgeVariant::Success,
            Self::Absent => BadgeVariant::Error,
            Self::Late => BadgeVariant::Warning,
            Self::HalfDay => BadgeVariant::Info,
            Self::WorkFromHome => BadgeVariant::Secondary,
        }
    }
}

/// One employee's attendance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Record id.
    pub id: u64,
    /// Badge number.
    pub employee_id: String,
    /// Display name.
    pub employee_name: String,
    /// Department name.
    pub department: String,
    /// Day recorded.
    pub date: NaiveDate,
    /// Clock-in time as `HH:MM`, absent when the employee did not clock in.
    pub check_in: Option<String>,
    /// Clock-out time as `HH:MM`.
    pub check_out: Option<String>,
    /// Hours worked.
    pub work_hours: f64,
    /// Presence state.
    pub status: AttendanceStatus,
    /// Overtime hours.
    #[serde(default)]
    pub overtime: f64,
    /// Break windows such as `12:00-13:00`.
    #[serde(default)]
    pub breaks: Vec<String>,
}

impl AttendanceRecord {
    /// Parsed clock-in time.
    #[must_use]
    pub fn check_in_time(&self) -> Option<NaiveTime> {
        self.check_in.as_deref().and_then(parse_clock)
    }

    /// Parsed clock-out time.
    #[must_use]
    pub fn check_out_time(&self) -> Option<NaiveTime> {
        self.check_out.as_deref().and_then(parse_clock)
    }
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

impl HasStatus for AttendanceRecord {
    fn status_label(&self) -> String {
        self.status.label().to_string()
    }

    fn badge_variant(&self) -> BadgeVariant {
        self.status.badge_variant()
    }
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Waiting for a decision.
    Pending,
    /// Granted.
    Approved,
    /// Refused.
    Rejected,
}

impl LeaveStatus {
    /// Wire label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A request for time off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Record id.
    pub id: u64,
    /// Badge number.
    pub employee_id: String,
    /// Display name.
    pub employee_name: String,
    /// Kind of leave (`Annual Leave`, `Sick Leave`, ...).
    pub leave_type: String,
    /// First day off.
    pub start_date: NaiveDate,
    /// Last day off.
    pub end_date: NaiveDate,
    /// Working days requested.
    pub days: u32,
    /// Free-text reason.
    pub reason: String,
    /// Approval state.
    pub status: LeaveStatus,
    /// Day the request was filed.
    pub request_date: NaiveDate,
    /// Person deciding.
    pub approver: String,
    /// Why the request was refused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl LeaveRequest {
    /// Calendar days covered, inclusive of both ends.
    #[must_use]
    pub fn calendar_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl HasStatus for LeaveRequest {
    fn status_label(&self) -> String {
        self.status.label().to_string()
    }

    fn badge_variant(&self) -> BadgeVariant {
        match self.status {
            LeaveStatus::Pending => BadgeVariant::Warning,
            LeaveStatus::Approved => BadgeVariant::Success,
            LeaveStatus::Rejected => BadgeVariant::Error,
        }
    }
}
