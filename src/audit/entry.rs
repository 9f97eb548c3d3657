//! Audit entry data structures
//!
//! An entry records one change to the catalog: what kind of record changed,
//! its key, and JSON snapshots of the record on either side of the change.
//! Loans reuse the generic operations: checkout creates a loan, renewal
//! updates it, and return deletes it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// Kind of catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Book,
    Copy,
    Borrower,
    Loan,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Book => "Book",
            EntityType::Copy => "Copy",
            EntityType::Borrower => "Borrower",
            EntityType::Loan => "Loan",
        })
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Call number, "call number #copy", or email
    pub entity_id: String,

    /// Book title or borrower name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Field-level summary for updates, e.g. `renewed: false -> true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// A record (or loan) came into existence
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: snapshot(entity),
            ..Self::new(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// A record changed in place
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    /// A record (or loan) ended
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: snapshot(entity),
            ..Self::new(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// Library wording for the change: loans read as checkout, renew, return
    pub fn action(&self) -> &'static str {
        match (self.entity_type, self.operation) {
            (EntityType::Loan, Operation::Create) => "CHECKOUT",
            (EntityType::Loan, Operation::Update) => "RENEW",
            (EntityType::Loan, Operation::Delete) => "RETURN",
            (_, Operation::Create) => "ADD",
            (_, Operation::Update) => "UPDATE",
            (_, Operation::Delete) => "REMOVE",
        }
    }

    /// One line per entry, plus a changes line when there is a diff
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {:<8} {:<8} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action(),
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }
        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
