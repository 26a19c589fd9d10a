use super::TripApi;
use crate::errors::{AppError, AppResult};
use crate::models::api_error::{ApiErrorEnvelope, ErrorReport};
use crate::models::trip::{TripInput, TripResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://spotter-trip-planner.onrender.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `TripApi` over the service's JSON REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpTripApi {
    client: Client,
    base: Url,
}

impl HttpTripApi {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let mut base = Url::parse(base_url)?;
        // `Url::join` replaces the last path segment unless it ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .user_agent(concat!("rtripplanner/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        Ok(self.base.join(path)?)
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> AppResult<(StatusCode, String)> {
        let response = request.send().await.map_err(|e| {
            warn!("request to planning service failed: {e}");
            AppError::Api(ErrorReport::network())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(%status, "failed to read planning service response: {e}");
            AppError::Api(ErrorReport::network())
        })?;
        debug!(%status, bytes = body.len(), "planning service answered");

        Ok((status, body))
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> AppResult<T> {
        let (status, body) = self.fetch(request).await?;
        decode_body(status, &body)
    }
}

/// Turn a raw answer into a value, a structured service error, or a locally
/// synthesized network error.
pub fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> AppResult<T> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|e| {
            warn!(%status, "malformed planning service response: {e}");
            AppError::Api(ErrorReport::network())
        });
    }

    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => Err(AppError::Api(envelope.error.into())),
        Err(_) => {
            warn!(%status, "planning service failed without a structured error");
            Err(AppError::Api(ErrorReport::network()))
        }
    }
}

#[async_trait]
impl TripApi for HttpTripApi {
    async fn create_trip(&self, input: &TripInput) -> AppResult<TripResult> {
        let url = self.endpoint("trips/create/")?;
        debug!(%url, "creating trip");

        let trip: TripResult = self.send(self.client.post(url).json(input)).await?;

        // a planned trip can still carry an error object
        if let Some(err) = trip.error.clone() {
            return Err(AppError::Api(err.into()));
        }
        Ok(trip)
    }

    async fn list_trips(&self) -> AppResult<Vec<TripResult>> {
        let url = self.endpoint("trips/")?;
        debug!(%url, "listing trips");
        self.send(self.client.get(url)).await
    }

    async fn get_trip(&self, id: u64) -> AppResult<TripResult> {
        let url = self.endpoint(&format!("trips/{id}/"))?;
        debug!(%url, "fetching trip");

        let (status, body) = self.fetch(self.client.get(url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::TripNotFound(id));
        }
        decode_body(status, &body)
    }
}
