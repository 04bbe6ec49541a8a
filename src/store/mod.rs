mod supabase;

pub use supabase::SupabaseStore;

use crate::types::{Employee, NewEmployee};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors raised by the remote store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Store request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Unexpected store response: {0}")]
    InvalidResponse(String),
}

/// Single-field update payload. Fields left unset are omitted from the
/// request body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl EmployeePatch {
    pub fn id(id: Option<i64>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn name(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn availability(availability: Option<String>) -> Self {
        Self {
            availability,
            ..Self::default()
        }
    }
}

/// Operations against the hosted employee table.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Insert a record and return the row as stored.
    async fn insert(&self, record: NewEmployee) -> Result<Employee>;

    /// Delete every row whose `name` column matches.
    async fn delete_by_name(&self, name: &str) -> Result<()>;

    /// Apply a single-field update to rows where `filter_column` equals
    /// `filter_value`.
    async fn update(
        &self,
        filter_column: &str,
        filter_value: &str,
        patch: EmployeePatch,
    ) -> Result<()>;

    /// Fetch the full roster, unfiltered, in store order.
    async fn fetch_all(&self) -> Result<Vec<Employee>>;
}
