use super::types::{Currency, GenericError, Product};
use crate::config::Config;
use crate::error::ApiError;
use crate::upload::UploadRequest;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode, Url};
use tracing::{debug, info, instrument, warn};

/// HTTP client for the product API and the image upload endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    api_url: Url,
    upload_url: Url,
}

impl StorefrontClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::Client)?;

        // Fail at startup rather than on the first request.
        api_path(&config.api_url, "products")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            upload_url: config.upload_url.clone(),
        })
    }

    pub fn products_url(&self, currency: Currency) -> Result<Url, ApiError> {
        let mut url = api_path(&self.api_url, "products")?;
        if let Some(code) = currency.query_value() {
            url.query_pairs_mut().append_pair("currency", code);
        }
        Ok(url)
    }

    pub fn docs_url(&self) -> Result<Url, ApiError> {
        api_path(&self.api_url, "docs")
    }

    #[instrument(skip_all, fields(currency = %currency))]
    pub async fn list_products(&self, currency: Currency) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url(currency)?;
        debug!(%url, "Fetching products");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        let response = check_status(response).await?;

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| if e.is_timeout() { ApiError::Timeout } else { ApiError::Decode(e) })?;
        info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip_all, fields(product_id = %request.product_id, file = %request.file.display()))]
    pub async fn upload(&self, request: UploadRequest) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(&request.file)
            .await
            .map_err(|source| ApiError::ReadFile {
                path: request.file.clone(),
                source,
            })?;
        let size = bytes.len();

        let file_name = request
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("id", request.product_id);

        let response = self
            .http
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        check_status(response).await?;

        info!(bytes = size, "Uploaded product image");
        Ok(())
    }
}

/// Appends one path segment to `base`, tolerating a trailing slash.
fn api_path(base: &Url, segment: &str) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base.clone()))?
        .pop_if_empty()
        .push(segment);
    url.set_query(None);
    Ok(url)
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_detail(status, &body);

    warn!(%status, %message, "Server rejected request");
    Err(ApiError::Status { status, message })
}

/// Detail for a rejected request: the API's `message`, else the raw body,
/// else the status's canonical reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    let canonical = || status.canonical_reason().unwrap_or("no details").to_string();
    match serde_json::from_str::<GenericError>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        Ok(_) => canonical(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => canonical(),
    }
}
