use super::types::{
    Field, Notification, NotificationKind, SubmitError, UploadPhase, UploadRequest,
    UPLOAD_SUCCESS_MESSAGE,
};
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// State of the product image upload form.
///
/// Holds no I/O: `submit` hands back an [`UploadRequest`] for the caller to
/// send, and `finish` feeds the outcome back in.
#[derive(Debug, Default)]
pub struct UploadForm {
    product_id: String,
    file: Option<PathBuf>,
    phase: UploadPhase,
    show_validation: bool,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }

    pub fn set_product_id(&mut self, value: impl Into<String>) {
        self.product_id = value.into();
        self.field_changed();
    }

    pub fn set_file(&mut self, file: Option<PathBuf>) {
        self.file = file;
        self.field_changed();
    }

    fn field_changed(&mut self) {
        if matches!(self.phase, UploadPhase::Succeeded | UploadPhase::Failed(_)) {
            self.phase = UploadPhase::Idle;
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.product_id.trim().is_empty() {
            missing.push(Field::ProductId);
        }
        if self.file.is_none() {
            missing.push(Field::File);
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.missing_fields().is_empty()
    }

    /// Inline feedback for `field`, shown once a submit has been rejected.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if self.show_validation && self.missing_fields().contains(&field) {
            Some(field.feedback())
        } else {
            None
        }
    }

    pub fn submit(&mut self) -> Result<UploadRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let missing = self.missing_fields();
        let file = match (&self.file, missing.is_empty()) {
            (Some(file), true) => file.clone(),
            _ => {
                self.show_validation = true;
                info!(?missing, "Upload form incomplete");
                return Err(SubmitError::Invalid(missing));
            }
        };

        self.show_validation = false;
        self.phase = UploadPhase::Submitting;
        Ok(UploadRequest {
            product_id: self.product_id.trim().to_string(),
            file,
        })
    }

    pub fn finish(&mut self, outcome: Result<(), ApiError>) {
        if !self.is_submitting() {
            warn!("Upload result arrived with no submission in flight");
            return;
        }

        self.phase = match outcome {
            Ok(()) => UploadPhase::Succeeded,
            Err(e) => {
                warn!(error = %e, "Upload failed");
                UploadPhase::Failed(e.to_string())
            }
        };
    }

    pub fn notification(&self) -> Option<Notification> {
        match &self.phase {
            UploadPhase::Succeeded => Some(Notification {
                kind: NotificationKind::Success,
                message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            }),
            UploadPhase::Failed(reason) => Some(Notification {
                kind: NotificationKind::Error,
                message: format!("unable to upload file. {}", reason),
            }),
            UploadPhase::Idle | UploadPhase::Submitting => None,
        }
    }
}
