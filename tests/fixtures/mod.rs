//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// The built-in token table, used as a base for custom tables.
pub const BUILTIN_TABLE: &str = include_str!("../../src/data/tokens.json");

/// Path to the platform-tokens binary
pub fn platform_tokens_bin() -> String {
    std::env::var("CARGO_BIN_EXE_platform-tokens")
        .unwrap_or_else(|_| "target/release/platform-tokens".to_string())
}

/// Creates a Command with isolated config directory for testing.
/// Pass in a config directory path to share between multiple commands in the same test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(platform_tokens_bin());
    cmd.env("PLATFORM_TOKENS_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in a fresh or shared config directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Writes a token table derived from the built-in one.
///
/// `overrides` replace or add keys; `removed` keys are dropped.
pub fn write_token_table(
    dir: &Path,
    name: &str,
    overrides: &[(&str, &str)],
    removed: &[&str],
) -> PathBuf {
    let mut table: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(BUILTIN_TABLE).expect("Built-in table is valid JSON");
    for (key, value) in overrides {
        table.insert((*key).to_string(), serde_json::Value::String((*value).to_string()));
    }
    for key in removed {
        table.remove(*key);
    }

    let path = dir.join(name);
    fs::write(
        &path,
        serde_json::to_string_pretty(&table).expect("Failed to serialize table"),
    )
    .expect("Failed to write token table");
    path
}

/// Writes a file into the directory and returns its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Creates a temp dir used as the config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Three attendance records: two present, one working from home.
pub const ATTENDANCE_JSON: &str = r#"[
  {"id": 1, "employeeId": "EMP001", "employeeName": "Ana Silva", "department": "Engineering",
   "date": "2025-01-20", "checkIn": "09:00", "checkOut": "17:30", "workHours": 8.5,
   "status": "Present", "overtime": 0.5, "breaks": ["12:00-12:30"]},
  {"id": 2, "employeeId": "EMP002", "employeeName": "Bruno Costa", "department": "Sales",
   "date": "2025-01-20", "checkIn": "09:05", "checkOut": "17:00", "workHours": 7.9,
   "status": "Present"},
  {"id": 3, "employeeId": "EMP003", "employeeName": "Carla Dias", "department": "Design",
   "date": "2025-01-20", "checkIn": null, "checkOut": null, "workHours": 8,
   "status": "Work from Home"}
]"#;

/// Two leave requests, one pending and one rejected.
pub const LEAVE_JSON: &str = r#"[
  {"id": 1, "employeeId": "EMP001", "employeeName": "Ana Silva", "leaveType": "Vacation",
   "startDate": "2025-02-03", "endDate": "2025-02-07", "days": 5, "reason": "Family trip",
   "status": "Pending", "requestDate": "2025-01-15", "approver": "Maria Santos"},
  {"id": 2, "employeeId": "EMP002", "employeeName": "Bruno Costa", "leaveType": "Personal",
   "startDate": "2025-01-27", "endDate": "2025-01-27", "days": 1, "reason": "Errand",
   "status": "Rejected", "requestDate": "2025-01-20", "approver": "Maria Santos",
   "rejectionReason": "Quarter close"}
]"#;

/// One processed payroll run.
pub const PAYROLL_JSON: &str = r#"[
  {"id": 1,
   "employee": {"id": 7, "firstName": "Ana", "lastName": "Silva", "employeeId": "EMP001",
                "department": "Engineering", "position": "Developer"},
   "payPeriod": {"type": "bi-weekly", "startDate": "2025-01-01", "endDate": "2025-01-14",
                 "payDate": "2025-01-17", "year": 2025, "period": 1},
   "totals": {"grossPay": 4200.0, "netPay": 3150.5, "totalTaxes": 849.5,
              "totalPreTaxDeductions": 200.0},
   "status": "processed",
   "createdAt": "2025-01-15T10:00:00Z"}
]"#;

/// Database objects of mixed classes.
pub const DATABASE_JSON: &str = r#"[
  {"class": "tables", "id": 1, "name": "users", "type": "Table", "rows": 15420,
   "size": "2.4 MB", "engine": "InnoDB", "status": "active",
   "lastModified": "2025-01-24T10:30:00"},
  {"class": "backups", "id": 2, "name": "nightly", "type": "Full", "size": "1.1 GB",
   "status": "failed", "created": "2025-01-24T02:00:00", "retention": "30 days"}
]"#;

/// Two service directories.
pub const DIRECTORY_JSON: &str = r##"[
  {"key": "backups", "name": "Backups", "path": "./backups/",
   "description": "Session backups and archives", "color": "#1976d2",
   "size": "3.7MB", "fileCount": 18, "types": ["tar.gz", "txt"]},
  {"key": "development-logs", "name": "Development Logs", "path": "./development-logs/",
   "description": "Application and development logs", "color": "#388e3c",
   "size": "1.2KB", "fileCount": 5, "types": ["log", "txt"]}
]"##;
