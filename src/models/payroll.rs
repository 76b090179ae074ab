//! Payroll run records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::HasStatus;
use crate::styles::BadgeVariant;

/// Employee the payroll run belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    /// Internal id.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Badge number such as `EMP001`.
    pub employee_id: String,
    /// Department name.
    pub department: String,
    /// Job title.
    pub position: String,
}

impl EmployeeRef {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Pay cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayPeriodType {
    /// Every week.
    Weekly,
    /// Every other week.
    BiWeekly,
    /// Twice a month.
    SemiMonthly,
    /// Once a month.
    Monthly,
}

impl PayPeriodType {
    /// Number of periods in a year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::SemiMonthly => 24,
            Self::Monthly => 12,
        }
    }
}

/// The period a payroll run covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// Cadence.
    #[serde(rename = "type")]
    pub period_type: PayPeriodType,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
    /// Day the pay is disbursed.
    pub pay_date: NaiveDate,
    /// Calendar year.
    pub year: i32,
    /// 1-based period number within the year.
    pub period: u32,
}

impl PayPeriod {
    /// Whether the dates are ordered and the period number fits the cadence.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.start_date <= self.end_date
            && self.end_date <= self.pay_date
            && (1..=self.period_type.periods_per_year()).contains(&self.period)
    }
}

/// Money totals of a payroll run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Pay before deductions.
    pub gross_pay: f64,
    /// Pay after deductions.
    pub net_pay: f64,
    /// All taxes withheld.
    pub total_taxes: f64,
    /// Deductions taken before tax.
    pub total_pre_tax_deductions: f64,
}

impl PayrollTotals {
    /// Component-wise sum.
    #[must_use]
    pub fn sum<'a>(totals: impl IntoIterator<Item = &'a Self>) -> Self {
        totals.into_iter().fold(Self::default(), |acc, t| Self {
            gross_pay: acc.gross_pay + t.gross_pay,
            net_pay: acc.net_pay + t.net_pay,
            total_taxes: acc.total_taxes + t.total_taxes,
            total_pre_tax_deductions: acc.total_pre_tax_deductions + t.total_pre_tax_deductions,
        })
    }
}

/// Lifecycle of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Being prepared.
    Draft,
    /// Waiting for sign-off.
    PendingApproval,
    /// Signed off.
    Approved,
    /// Paid out.
    Processed,
    /// Voided.
    Cancelled,
}

impl PayrollStatus {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Processed => "processed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One payroll run for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// Record id.
    pub id: u64,
    /// Employee paid.
    pub employee: EmployeeRef,
    /// Period covered.
    pub pay_period: PayPeriod,
    /// Amounts.
    pub totals: PayrollTotals,
    /// Lifecycle state.
    pub status: PayrollStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl HasStatus for PayrollRecord {
    fn status_label(&self) -> String {
        self.status.as_str().to_string()
    }

    fn badge_variant(&self) -> BadgeVariant {
        match self.status {
            PayrollStatus::Draft => BadgeVariant::Default,
            PayrollStatus::PendingApproval => BadgeVariant::Warning,
            PayrollStatus::Approved => BadgeVariant::Info,
            PayrollStatus::Processed => BadgeVariant::Success,
            PayrollStatus::Cancelled => BadgeVariant::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::summarize_statuses;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "employee": {
                "id": 1, "firstName": "Mario", "lastName": "Rossi",
                "employeeId": "EMP001", "department": "Engineering",
                "position": "Senior Developer"
            },
            "payPeriod": {
                "type": "monthly", "startDate": "2024-01-01", "endDate": "2024-01-31",
                "payDate": "2024-02-01", "year": 2024, "period": 1
            },
            "totals": {"grossPay": 5500, "netPay": 4200, "totalTaxes": 1100, "totalPreTaxDeductions": 200},
            "status": "processed",
            "createdAt": "2024-01-15T10:00:00Z"
        },
        {
            "id": 2,
            "employee": {
                "id": 2, "firstName": "Giulia", "lastName": "Bianchi",
                "employeeId": "EMP002", "department": "Marketing",
                "position": "Marketing Manager"
            },
            "payPeriod": {
                "type": "bi-weekly", "startDate": "2024-01-01", "endDate": "2024-01-14",
                "payDate": "2024-01-19", "year": 2024, "period": 1
            },
            "totals": {"grossPay": 4800, "netPay": 3700, "totalTaxes": 960, "totalPreTaxDeductions": 140},
            "status": "pending_approval",
            "createdAt": "2024-01-15T10:00:00Z"
        }
    ]"#;

    fn sample() -> Vec<PayrollRecord> {
        serde_json::from_str(SAMPLE).expect("sample payroll parses")
    }

    #[test]
    fn test_parse_payroll_records() {
        let records = sample();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee.full_name(), "Mario Rossi");
        assert_eq!(records[1].pay_period.period_type, PayPeriodType::BiWeekly);
        assert_eq!(records[1].status, PayrollStatus::PendingApproval);
        assert!(records.iter().all(|r| r.pay_period.is_consistent()));
    }

    #[test]
    fn test_status_badges() {
        let records = sample();
        assert_eq!(records[0].badge_variant(), BadgeVariant::Success);
        assert_eq!(records[1].badge_variant(), BadgeVariant::Warning);

        let counts = summarize_statuses(&records);
        assert_eq!(counts.get("processed"), Some(&1));
        assert_eq!(counts.get("pending_approval"), Some(&1));
    }

    #[test]
    fn test_totals_sum() {
        let records = sample();
        let sum = PayrollTotals::sum(records.iter().map(|r| &r.totals));
        assert!((sum.gross_pay - 10300.0).abs() < f64::EPSILON);
        assert!((sum.net_pay - 7900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let bad = SAMPLE.replace("\"processed\"", "\"archived\"");
        assert!(serde_json::from_str::<Vec<PayrollRecord>>(&bad).is_err());
    }

    #[test]
    fn test_inconsistent_period() {
        let mut record = sample().remove(0);
        record.pay_period.period = 13;
        assert!(!record.pay_period.is_consistent());
    }
}
