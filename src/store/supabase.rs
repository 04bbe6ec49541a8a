use super::{EmployeePatch, EmployeeStore, StoreError};
use crate::types::{Employee, NewEmployee};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

/// Logical table holding employee records.
const EMPLOYEE_TABLE: &str = "userdata";

/// Client for a Supabase-hosted table, speaking the PostgREST HTTP surface.
///
/// The underlying `reqwest` client manages its own connection pool, so a
/// single instance can be shared across concurrent tool invocations.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    // For testing: allows pointing the client at a mock server
    #[cfg(test)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self::new(base_url, api_key)
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            EMPLOYEE_TABLE
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::RequestFailed {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

#[async_trait]
impl EmployeeStore for SupabaseStore {
    async fn insert(&self, record: NewEmployee) -> Result<Employee> {
        debug!("Inserting employee record: {:?}", record);

        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .query(&[("select", "*")])
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let mut rows: Vec<Employee> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        if rows.len() != 1 {
            return Err(StoreError::InvalidResponse(format!(
                "expected a single inserted row, got {}",
                rows.len()
            ))
            .into());
        }
        Ok(rows.remove(0))
    }

    async fn delete_by_name(&self, name: &str) -> Result<()> {
        debug!("Deleting employee records named {:?}", name);

        let response = self
            .authorize(self.client.delete(self.table_url()))
            .query(&[("name", format!("eq.{name}"))])
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn update(
        &self,
        filter_column: &str,
        filter_value: &str,
        patch: EmployeePatch,
    ) -> Result<()> {
        debug!(
            "Updating employee records where {} = {:?}: {:?}",
            filter_column, filter_value, patch
        );

        let response = self
            .authorize(self.client.patch(self.table_url()))
            .query(&[(filter_column, format!("eq.{filter_value}"))])
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let rows = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        Ok(rows)
    }
}
