//! Database objects listed by the database manager screen.
//!
//! Each object class has its own shape; the `class` field on the wire
//! selects which one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::HasStatus;
use crate::styles::BadgeVariant;

/// A relational table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    /// Record id.
    pub id: u64,
    /// Table name.
    pub name: String,
    /// Storage type such as `InnoDB`.
    #[serde(rename = "type")]
    pub table_type: String,
    /// Row count.
    pub rows: u64,
    /// Human-readable size.
    pub size: String,
    /// Database engine.
    pub engine: String,
    /// Status word.
    pub status: String,
    /// Last change.
    pub last_modified: NaiveDateTime,
}

/// A document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    /// Record id.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Storage type.
    #[serde(rename = "type")]
    pub collection_type: String,
    /// Document count.
    pub documents: u64,
    /// Human-readable size.
    pub size: String,
    /// Database engine.
    pub engine: String,
    /// Status word.
    pub status: String,
    /// Last change.
    pub last_modified: NaiveDateTime,
}

/// An index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    /// Record id.
    pub id: u64,
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Index kind such as `BTREE` or `UNIQUE`.
    #[serde(rename = "type")]
    pub index_type: String,
    /// Indexed columns in order.
    pub columns: Vec<String>,
    /// Human-readable size.
    pub size: String,
    /// Status word.
    pub status: String,
    /// Hit ratio as a percentage string.
    pub efficiency: String,
}

/// A foreign-key relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationInfo {
    /// Record id.
    pub id: u64,
    /// Constraint name.
    pub name: String,
    /// Referencing table.
    pub from_table: String,
    /// Referenced table.
    pub to_table: String,
    /// Cardinality such as `MANY_TO_ONE`.
    #[serde(rename = "type")]
    pub relation_type: String,
    /// Delete rule such as `CASCADE`.
    pub constraint: String,
    /// Status word.
    pub status: String,
}

/// A database account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUserInfo {
    /// Record id.
    pub id: u64,
    /// Login name.
    pub username: String,
    /// Role name.
    pub role: String,
    /// Granted permissions.
    pub permissions: Vec<String>,
    /// Last login.
    pub last_login: NaiveDateTime,
    /// Status word.
    pub status: String,
}

/// A schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    /// Record id.
    pub id: u64,
    /// Schema name.
    pub name: String,
    /// Number of tables.
    pub tables: u32,
    /// Human-readable size.
    pub size: String,
    /// Schema version.
    pub version: String,
    /// Status word.
    pub status: String,
    /// Last migration.
    pub last_updated: NaiveDateTime,
}

/// A backup archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupInfo {
    /// Record id.
    pub id: u64,
    /// Archive name.
    pub name: String,
    /// `Full` or `Incremental`.
    #[serde(rename = "type")]
    pub backup_type: String,
    /// Human-readable size.
    pub size: String,
    /// Status word.
    pub status: String,
    /// Creation time.
    pub created: NaiveDateTime,
    /// Retention policy such as `30 days`.
    pub retention: String,
}

/// Any object the database manager lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum DatabaseObject {
    /// Relational table.
    #[serde(rename = "tables")]
    Table(TableInfo),
    /// Document collection.
    #[serde(rename = "collections")]
    Collection(CollectionInfo),
    /// Index.
    #[serde(rename = "indexes")]
    Index(IndexInfo),
    /// Relation.
    #[serde(rename = "relations")]
    Relation(RelationInfo),
    /// Account.
    #[serde(rename = "users")]
    User(DbUserInfo),
    /// Schema.
    #[serde(rename = "schemas")]
    Schema(SchemaInfo),
    /// Backup.
    #[serde(rename = "backups")]
    Backup(BackupInfo),
}

impl DatabaseObject {
    /// Wire name of the object class.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Table(_) => "tables",
            Self::Collection(_) => "collections",
            Self::Index(_) => "indexes",
            Self::Relation(_) => "relations",
            Self::User(_) => "users",
            Self::Schema(_) => "schemas",
            Self::Backup(_) => "backups",
        }
    }

    /// Status word of the object.
    #[must_use]
    pub fn status(&self) -> &str {
        match self {
            Self::Table(t) => &t.status,
            Self::Collection(c) => &c.status,
            Self::Index(i) => &i.status,
            Self::Relation(r) => &r.status,
            Self::User(u) => &u.status,
            Self::Schema(s) => &s.status,
            Self::Backup(b) => &b.status,
        }
    }
}

/// Badge colour for a database status word. Unknown words are neutral.
#[must_use]
pub fn status_variant(status: &str) -> BadgeVariant {
    match status.to_ascii_lowercase().as_str() {
        "active" | "healthy" | "completed" => BadgeVariant::Success,
        "optimized" => BadgeVariant::Primary,
        "secured" => BadgeVariant::Secondary,
        "monitoring" => BadgeVariant::Info,
        "warning" => BadgeVariant::Warning,
        "error" => BadgeVariant::Error,
        _ => BadgeVariant::Default,
    }
}

impl HasStatus for DatabaseObject {
    fn status_label(&self) -> String {
        self.status().to_string()
    }

    fn badge_variant(&self) -> BadgeVariant {
        status_variant(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::summarize_statuses;

    #[test]
    fn test_parse_mixed_classes() {
        let json = r#"[
            {"class": "tables", "id": 1, "name": "users", "type": "InnoDB", "rows": 15420,
             "size": "2.3MB", "engine": "MySQL", "status": "active",
             "lastModified": "2025-01-24T10:30:00"},
            {"class": "indexes", "id": 1, "name": "idx_users_email", "table": "users",
             "type": "UNIQUE", "columns": ["email"], "size": "145KB", "status": "active",
             "efficiency": "98.5%"},
            {"class": "backups", "id": 1, "name": "daily_backup_2025_01_24", "type": "Full",
             "size": "2.8GB", "status": "completed", "created": "2025-01-24T02:00:00",
             "retention": "30 days"},
            {"class": "users", "id": 2, "username": "hr_manager", "role": "hr_admin",
             "permissions": ["HR_READ", "HR_WRITE"], "lastLogin": "2025-01-24T10:15:00",
             "status": "inactive"}
        ]"#;
        let objects: Vec<DatabaseObject> = serde_json::from_str(json).unwrap();
        assert_eq!(objects.len(), 4);
        assert_eq!(objects[0].class(), "tables");
        assert!(matches!(&objects[1], DatabaseObject::Index(i) if i.columns == ["email"]));
        assert_eq!(objects[2].badge_variant(), BadgeVariant::Success);
        assert_eq!(objects[3].badge_variant(), BadgeVariant::Default);

        let counts = summarize_statuses(&objects);
        assert_eq!(counts.get("active"), Some(&2));
        assert_eq!(counts.get("completed"), Some(&1));
    }

    #[test]
    fn test_unknown_class_rejected() {
        let json = r#"{"class": "views", "id": 1, "name": "v"}"#;
        assert!(serde_json::from_str::<DatabaseObject>(json).is_err());
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(status_variant("optimized"), BadgeVariant::Primary);
        assert_eq!(status_variant("Secured"), BadgeVariant::Secondary);
        assert_eq!(status_variant("healthy"), BadgeVariant::Success);
        assert_eq!(status_variant("monitoring"), BadgeVariant::Info);
        assert_eq!(status_variant("warning"), BadgeVariant::Warning);
        assert_eq!(status_variant("error"), BadgeVariant::Error);
        assert_eq!(status_variant("inactive"), BadgeVariant::Default);
        // Not in the screen's table
        assert_eq!(status_variant("failed"), BadgeVariant::Default);
        assert_eq!(status_variant("archived"), BadgeVariant::Default);
    }
}
