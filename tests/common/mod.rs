//! In-process stand-in for the product API and the image upload endpoint.

#![allow(dead_code)]

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use storefront_admin::{Config, Storefront};

#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub id: String,
    pub file_name: Option<String>,
    pub file: Vec<u8>,
    pub part_order: Vec<String>,
}

#[derive(Debug)]
struct Inner {
    upload_status: StatusCode,
    upload_message: String,
    upload_raw_body: Option<String>,
    upload_delay: Duration,
    uploads: Vec<ReceivedUpload>,
    catalog: HashMap<Option<String>, Value>,
    listing_delays: HashMap<Option<String>, Duration>,
    listing_failure: Option<(StatusCode, String)>,
    product_queries: Vec<Option<String>>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            upload_status: StatusCode::OK,
            upload_message: String::new(),
            upload_raw_body: None,
            upload_delay: Duration::ZERO,
            uploads: Vec::new(),
            catalog: HashMap::new(),
            listing_delays: HashMap::new(),
            listing_failure: None,
            product_queries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockApi {
    /// Starts the server on an ephemeral port and returns it with its base URL.
    pub fn start() -> (Self, String) {
        let mock = MockApi::default();
        let router = Router::new()
            .route("/products", get(list_products))
            .route("/images", post(upload_image))
            .with_state(mock.clone());

        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock server");
                addr_tx
                    .send(listener.local_addr().expect("mock address"))
                    .expect("report mock address");
                axum::serve(listener, router).await.expect("mock server");
            });
        });

        let addr = addr_rx.recv().expect("mock server start");
        (mock, format!("http://{}", addr))
    }

    fn with<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        f(&mut self.inner.lock().expect("mock state"))
    }

    pub fn set_products(&self, currency: Option<&str>, products: Value) {
        self.with(|inner| {
            inner.catalog.insert(currency.map(str::to_owned), products);
        });
    }

    pub fn delay_products(&self, currency: Option<&str>, delay: Duration) {
        self.with(|inner| {
            inner.listing_delays.insert(currency.map(str::to_owned), delay);
        });
    }

    pub fn fail_products(&self, status: StatusCode, message: &str) {
        self.with(|inner| inner.listing_failure = Some((status, message.to_owned())));
    }

    pub fn respond_to_uploads(&self, status: StatusCode, message: &str) {
        self.with(|inner| {
            inner.upload_status = status;
            inner.upload_message = message.to_owned();
            inner.upload_raw_body = None;
        });
    }

    /// Replies to uploads with `body` verbatim instead of a JSON error.
    pub fn respond_to_uploads_with_body(&self, status: StatusCode, body: &str) {
        self.with(|inner| {
            inner.upload_status = status;
            inner.upload_raw_body = Some(body.to_owned());
        });
    }

    pub fn delay_uploads(&self, delay: Duration) {
        self.with(|inner| inner.upload_delay = delay);
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.with(|inner| inner.uploads.clone())
    }

    pub fn product_queries(&self) -> Vec<Option<String>> {
        self.with(|inner| inner.product_queries.clone())
    }
}

async fn list_products(
    State(mock): State<MockApi>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let currency = params.get("currency").cloned();
    let (delay, failure, products) = mock.with(|inner| {
        inner.product_queries.push(currency.clone());
        (
            inner.listing_delays.get(&currency).copied(),
            inner.listing_failure.clone(),
            inner.catalog.get(&currency).cloned().unwrap_or_else(|| json!([])),
        )
    });

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    match failure {
        Some((status, message)) => (status, Json(json!({ "message": message }))).into_response(),
        None => Json(products).into_response(),
    }
}

async fn upload_image(State(mock): State<MockApi>, mut multipart: Multipart) -> Response {
    let mut received = ReceivedUpload::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await.unwrap_or_default();
        received.part_order.push(name.clone());
        match name.as_str() {
            "id" => received.id = String::from_utf8_lossy(&data).into_owned(),
            "file" => {
                received.file_name = file_name;
                received.file = data.to_vec();
            }
            _ => {}
        }
    }

    let (status, message, raw_body, delay) = mock.with(|inner| {
        inner.uploads.push(received);
        (
            inner.upload_status,
            inner.upload_message.clone(),
            inner.upload_raw_body.clone(),
            inner.upload_delay,
        )
    });

    tokio::time::sleep(delay).await;
    match raw_body {
        Some(body) => (status, body).into_response(),
        None if status.is_success() => status.into_response(),
        None => (status, Json(json!({ "message": message }))).into_response(),
    }
}

pub fn config(base: &str, timeout_ms: u64) -> Config {
    Config {
        api_url: base.parse().expect("api url"),
        upload_url: format!("{}/images", base).parse().expect("upload url"),
        request_timeout_ms: timeout_ms,
        log_level: "debug".into(),
    }
}

/// Mock server plus an app pointed at it, with the initial fetch settled.
pub fn storefront(mock_setup: impl FnOnce(&MockApi)) -> (MockApi, Storefront) {
    let (mock, base) = MockApi::start();
    mock_setup(&mock);
    let mut app = Storefront::from_config(&config(&base, 2_000)).expect("storefront");
    settle(&mut app, |app| !app.catalog().is_loading());
    (mock, app)
}

/// Pumps background results until `done` holds.
pub fn settle(app: &mut Storefront, mut done: impl FnMut(&Storefront) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.pump();
        if done(app) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for background work");
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Keeps pumping for `duration` so late responses get a chance to land.
pub fn pump_for(app: &mut Storefront, duration: Duration) {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        app.pump();
        std::thread::sleep(Duration::from_millis(10));
    }
    app.pump();
}
