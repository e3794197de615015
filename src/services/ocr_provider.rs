use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const READ_MODEL_PATH: &str =
    "formrecognizer/documentModels/prebuilt-read:analyze?api-version=2023-07-31";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "operation-location";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Reads all text lines from an image, one line per `\n`.
    async fn extract_text(&self, image: Vec<u8>, content_type: String) -> AppResult<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeOperation {
    pub status: String,
    #[serde(rename = "analyzeResult", default)]
    pub analyze_result: Option<AnalyzeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub pages: Vec<AnalyzedPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzedPage {
    #[serde(default)]
    pub lines: Vec<AnalyzedLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzedLine {
    pub content: String,
}

impl AnalyzeOperation {
    pub fn text(&self) -> String {
        self.analyze_result
            .iter()
            .flat_map(|result| &result.pages)
            .flat_map(|page| &page.lines)
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Polls `fetch` every `interval` until the operation settles or `max_polls` runs out.
pub async fn poll_operation<F, Fut>(
    interval: Duration,
    max_polls: u32,
    mut fetch: F,
) -> AppResult<AnalyzeOperation>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<AnalyzeOperation>>,
{
    for attempt in 1..=max_polls {
        tokio::time::sleep(interval).await;
        let operation = fetch().await?;
        match operation.status.as_str() {
            "succeeded" => return Ok(operation),
            "failed" => {
                return Err(AppError::ProviderError {
                    message: "OCR processing failed".to_string(),
                    details: Some("the OCR provider reported a failed analysis".to_string()),
                })
            }
            status => log::debug!("OCR poll {}/{}: {}", attempt, max_polls, status),
        }
    }

    Err(AppError::OcrTimeout(
        "Timed out waiting for the OCR result".to_string(),
    ))
}

pub struct AzureOcrProvider {
    http: reqwest::Client,
    endpoint: String,
    key: SecretString,
    poll_interval: Duration,
    max_polls: u32,
}

impl AzureOcrProvider {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: config.ocr_endpoint.trim_end_matches('/').to_string(),
            key: config.ocr_key.clone(),
            poll_interval: config.ocr_poll_interval(),
            max_polls: config.ocr_max_polls,
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/{}", self.endpoint, READ_MODEL_PATH)
    }

    async fn fetch_operation(&self, operation_location: &str) -> AppResult<AnalyzeOperation> {
        let operation = self
            .http
            .get(operation_location)
            .header(SUBSCRIPTION_KEY_HEADER, self.key.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json::<AnalyzeOperation>()
            .await?;
        Ok(operation)
    }
}

#[async_trait]
impl OcrProvider for AzureOcrProvider {
    async fn extract_text(&self, image: Vec<u8>, content_type: String) -> AppResult<String> {
        if self.endpoint.is_empty() {
            return Err(AppError::ProviderError {
                message: "OCR processing failed".to_string(),
                details: Some("AZURE_OCR_ENDPOINT is not configured".to_string()),
            });
        }

        let response = self
            .http
            .post(self.analyze_url())
            .header(CONTENT_TYPE, content_type)
            .header(SUBSCRIPTION_KEY_HEADER, self.key.expose_secret())
            .body(image)
            .send()
            .await
            .map_err(|e| AppError::provider("OCR processing failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("OCR submission rejected with {}: {}", status, body);
            return Err(AppError::provider(
                "OCR processing failed",
                format!("{}: {}", status, body),
            ));
        }

        let operation_location = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| AppError::ProviderError {
                message: "OCR provider did not return an operation-location".to_string(),
                details: None,
            })?;

        let operation = poll_operation(self.poll_interval, self.max_polls, || {
            self.fetch_operation(&operation_location)
        })
        .await?;

        Ok(operation.text())
    }
}
