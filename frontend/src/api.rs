use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use shared::{ClassificationClient, ClientError, DashboardConfig, PredictRequest};

const CONFIG_STORAGE_KEY: &str = "review-dashboard.config";

/// Reads an optional JSON override from local storage, e.g.
/// `{"predict_url": "/api/predict", "response_policy": "strict"}`.
pub fn load_config() -> DashboardConfig {
    match LocalStorage::get::<DashboardConfig>(CONFIG_STORAGE_KEY) {
        Ok(config) => match config.validate() {
            Ok(config) => {
                log::info!("Loaded dashboard config from local storage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring stored config: {}", e);
                DashboardConfig::default()
            }
        },
        Err(StorageError::KeyNotFound(_)) => DashboardConfig::default(),
        Err(e) => {
            log::warn!("Failed to read stored config, using defaults: {}", e);
            DashboardConfig::default()
        }
    }
}

/// `POST`s reviews to the classification service with `gloo-net`.
#[derive(Clone, Debug)]
pub struct PredictClient {
    url: String,
    timeout_ms: Option<u32>,
}

impl PredictClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            url: config.predict_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    async fn send(&self, request: &PredictRequest) -> Result<Value, ClientError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| ClientError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // Error statuses with a JSON body are still handed to the controller.
        if !response.ok() {
            log::warn!(
                "Classification service answered {} {}",
                response.status(),
                response.status_text()
            );
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl ClassificationClient for PredictClient {
    async fn predict(&self, request: &PredictRequest) -> Result<Value, ClientError> {
        let Some(timeout_ms) = self.timeout_ms else {
            return self.send(request).await;
        };

        let send = self.send(request);
        let timeout = TimeoutFuture::new(timeout_ms);
        pin_mut!(send, timeout);

        match select(send, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => {
                log::warn!("No answer from {} after {} ms", self.url, timeout_ms);
                Err(ClientError::Timeout(timeout_ms))
            }
        }
    }
}
