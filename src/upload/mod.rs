mod form;
mod types;

pub use form::UploadForm;
pub use types::{
    Field, Notification, NotificationKind, SubmitError, UploadPhase, UploadRequest,
    UPLOAD_SUCCESS_MESSAGE,
};
