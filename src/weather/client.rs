use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Current conditions block of a forecast response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
}

/// Units reported by the provider for the current conditions block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: String,
    pub apparent_temperature: String,
    pub relative_humidity_2m: String,
    pub wind_speed_10m: String,
}

/// Hourly series block of a forecast response. All vectors are parallel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyUnits {
    pub temperature_2m: String,
    pub precipitation_probability: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
    current_units: Option<CurrentUnits>,
    hourly: Option<HourlySeries>,
    hourly_units: Option<HourlyUnits>,
}

/// Client for the public Open-Meteo forecast API. Values are passed along
/// exactly as the provider returns them; no unit conversion is applied.
pub struct ForecastClient {
    http_client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: "https://api.open-meteo.com".to_string(),
        }
    }

    // For testing: allows pointing the client at a mock server
    #[cfg(test)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    async fn forecast(&self, query: &[(&str, String)]) -> Result<ForecastResponse> {
        let endpoint = format!("{}/v1/forecast", self.base_url);
        let response = self.http_client.get(endpoint).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Forecast API error: {} {}\n{}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                error_text
            ));
        }

        Ok(response.json().await?)
    }

    /// Fetch current conditions for a coordinate pair.
    pub async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(CurrentConditions, CurrentUnits)> {
        let response = self
            .forecast(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "current",
                    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m"
                        .to_string(),
                ),
            ])
            .await?;

        match (response.current, response.current_units) {
            (Some(current), Some(units)) => Ok((current, units)),
            _ => Err(anyhow::anyhow!(
                "Forecast response is missing the current conditions block"
            )),
        }
    }

    /// Fetch the hourly series for the next day for a coordinate pair.
    pub async fn hourly(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(HourlySeries, HourlyUnits)> {
        let response = self
            .forecast(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "hourly",
                    "temperature_2m,precipitation_probability".to_string(),
                ),
                ("forecast_days", "1".to_string()),
            ])
            .await?;

        match (response.hourly, response.hourly_units) {
            (Some(hourly), Some(units)) => Ok((hourly, units)),
            _ => Err(anyhow::anyhow!(
                "Forecast response is missing the hourly block"
            )),
        }
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{RawQuery, State};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    async fn create_forecast_mock_server(response: Value) -> (String, Arc<Mutex<Vec<String>>>) {
        let queries: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let state = (queries.clone(), response);

        async fn respond(
            State((queries, response)): State<(Arc<Mutex<Vec<String>>>, Value)>,
            RawQuery(query): RawQuery,
        ) -> impl IntoResponse {
            queries.lock().await.push(query.unwrap_or_default());
            Json(response)
        }

        let app = Router::new()
            .route("/v1/forecast", get(respond))
            .with_state(state);

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).await.unwrap();
        let server_addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", server_addr), queries)
    }

    #[tokio::test]
    async fn test_current_conditions() {
        let response = json!({
            "current_units": {
                "temperature_2m": "°C",
                "apparent_temperature": "°C",
                "relative_humidity_2m": "%",
                "wind_speed_10m": "km/h"
            },
            "current": {
                "time": "2025-03-22T10:00",
                "temperature_2m": 18.3,
                "apparent_temperature": 17.1,
                "relative_humidity_2m": 62,
                "wind_speed_10m": 11.2
            }
        });
        let (base_url, queries) = create_forecast_mock_server(response).await;

        let client = ForecastClient::with_base_url(base_url);
        let (current, units) = client.current(33.77, -118.19).await.unwrap();

        assert_eq!(current.temperature_2m, 18.3);
        assert_eq!(current.relative_humidity_2m, 62.0);
        assert_eq!(units.wind_speed_10m, "km/h");

        let queries = queries.lock().await;
        assert!(queries[0].contains("latitude=33.77"));
        assert!(queries[0].contains("current=temperature_2m"));
    }

    #[tokio::test]
    async fn test_hourly_series() {
        let response = json!({
            "hourly_units": {
                "temperature_2m": "°C",
                "precipitation_probability": "%"
            },
            "hourly": {
                "time": ["2025-03-22T00:00", "2025-03-22T01:00"],
                "temperature_2m": [12.0, 11.4],
                "precipitation_probability": [5, 10]
            }
        });
        let (base_url, queries) = create_forecast_mock_server(response).await;

        let client = ForecastClient::with_base_url(base_url);
        let (hourly, units) = client.hourly(33.77, -118.19).await.unwrap();

        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.temperature_2m[1], 11.4);
        assert_eq!(hourly.precipitation_probability[0], 5.0);
        assert_eq!(units.precipitation_probability, "%");

        let queries = queries.lock().await;
        assert!(queries[0].contains("forecast_days=1"));
    }

    #[tokio::test]
    async fn test_missing_block_is_an_error() {
        let (base_url, _) = create_forecast_mock_server(json!({})).await;

        let client = ForecastClient::with_base_url(base_url);
        let error = client.current(0.0, 0.0).await.err().unwrap();

        assert!(error.to_string().contains("current conditions"));
    }
}
