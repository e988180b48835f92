mod state;
mod ui;

use crate::api::{Currency, StorefrontClient};
use crate::catalog::{FetchTicket, ProductList};
use crate::config::Config;
use crate::error::AppError;
use crate::upload::{SubmitError, UploadForm};
use derivative::Derivative;
use eframe::{egui, App};
pub use state::{Screen, TaskEvent, TaskState};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Poll interval while a request is in flight.
const BUSY_REPAINT: Duration = Duration::from_millis(50);

/// The storefront window: the product menu and the image upload form.
///
/// UI state is only touched on the thread that owns this value. Requests run
/// on the embedded runtime and report back through [`TaskState`], which is
/// drained by [`Storefront::pump`] every frame.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Storefront {
    screen: Screen,
    upload: UploadForm,
    file_label: Option<String>,
    catalog: ProductList,
    client: StorefrontClient,
    tasks: TaskState,
    #[derivative(Debug = "ignore")]
    runtime: Runtime,
}

impl Storefront {
    /// Builds the app and starts the initial product fetch. No window is
    /// needed until [`App::update`] runs.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        info!("Initializing storefront");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("storefront-io")
            .enable_all()
            .build()
            .map_err(AppError::Runtime)?;
        let client = StorefrontClient::new(config)?;

        let mut app = Self {
            screen: Screen::default(),
            upload: UploadForm::new(),
            file_label: None,
            catalog: ProductList::new(),
            client,
            tasks: TaskState::default(),
            runtime,
        };
        let ticket = app.catalog.begin_fetch();
        app.dispatch_fetch(ticket);
        Ok(app)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn upload(&self) -> &UploadForm {
        &self.upload
    }

    pub fn catalog(&self) -> &ProductList {
        &self.catalog
    }

    pub fn set_product_id(&mut self, value: impl Into<String>) {
        self.upload.set_product_id(value);
    }

    pub fn select_file(&mut self, file: Option<PathBuf>) {
        self.file_label = file.as_deref().map(state::describe_file);
        self.upload.set_file(file);
    }

    pub fn submit_upload(&mut self) {
        let request = match self.upload.submit() {
            Ok(request) => request,
            Err(SubmitError::InFlight) => {
                debug!("Ignoring submit while an upload is running");
                return;
            }
            Err(SubmitError::Invalid(_)) => return,
        };

        info!(product_id = %request.product_id, "Starting upload");
        let client = self.client.clone();
        let sender = self.tasks.sender.clone();
        self.runtime.spawn(async move {
            let outcome = client.upload(request).await;
            let _ = sender.send(TaskEvent::UploadFinished(outcome));
        });
    }

    pub fn select_currency(&mut self, currency: Currency) {
        let ticket = self.catalog.select_currency(currency);
        self.dispatch_fetch(ticket);
    }

    pub fn refresh_products(&mut self) {
        let ticket = self.catalog.refresh();
        self.dispatch_fetch(ticket);
    }

    fn dispatch_fetch(&mut self, ticket: FetchTicket) {
        let client = self.client.clone();
        let sender = self.tasks.sender.clone();
        let handle = self.runtime.spawn(async move {
            let result = client.list_products(ticket.currency).await;
            let _ = sender.send(TaskEvent::ProductsFetched {
                generation: ticket.generation,
                result,
            });
        });
        self.tasks.replace_fetch(handle.abort_handle());
    }

    pub fn is_busy(&self) -> bool {
        self.upload.is_submitting() || self.catalog.is_loading()
    }

    /// Applies every finished background result. Returns whether anything
    /// changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.tasks.receiver.try_recv() {
            match event {
                TaskEvent::UploadFinished(outcome) => {
                    self.upload.finish(outcome);
                    changed = true;
                }
                TaskEvent::ProductsFetched { generation, result } => {
                    if self.catalog.apply(generation, result) {
                        self.tasks.fetch_settled();
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.pump() {
            ctx.request_repaint();
        }
        if self.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}

impl App for Storefront {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
