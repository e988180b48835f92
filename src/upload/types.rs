use std::path::PathBuf;

/// Notification text shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "uploaded file";

/// A validated submission, consumed by the upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub product_id: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductId,
    File,
}

impl Field {
    pub fn feedback(self) -> &'static str {
        match self {
            Field::ProductId => "Please provide a product ID",
            Field::File => "Please select a file to upload",
        }
    }
}

/// Where the form is in its submit cycle.
///
/// The notification is derived from the phase, so a visible notification and
/// an in-flight submission can never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already running; the click is ignored.
    InFlight,
    /// Required fields are missing; nothing was sent.
    Invalid(Vec<Field>),
}
