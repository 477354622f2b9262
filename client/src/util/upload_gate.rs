//! Scan form gating: enable the scan button and block empty submissions.
//!
//! Consumes only "is a file selected" and the raw URL text, so the rules can
//! be checked without a browser. `UploadForm` feeds it from input events.

#[cfg(test)]
#[path = "upload_gate_test.rs"]
mod upload_gate_test;

use crate::state::notice::Tone;

/// Why a scan submission was blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("⚠️ Please select an image or enter a URL before scanning!")]
    NothingSelected,
}

/// Inline message under the upload form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadMessage {
    pub text: String,
    pub tone: Tone,
}

impl UploadMessage {
    fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Query parameter the host sets when redirecting back from `/scan`.
pub const SCAN_STATUS_PARAM: &str = "scan";
pub const SCAN_STATUS_MISSING: &str = "missing";
pub const SCAN_STATUS_RECEIVED: &str = "received";

/// Message for the `?scan=` status after the host redirect. Unknown or
/// absent values show nothing.
pub fn scan_status_message(status: Option<&str>) -> UploadMessage {
    match status {
        Some(SCAN_STATUS_MISSING) => {
            UploadMessage { text: "No file or image URL provided".to_owned(), tone: Tone::Error }
        }
        Some(SCAN_STATUS_RECEIVED) => {
            UploadMessage::success("✅ Image received. Nutrition scanning is not enabled on this host.")
        }
        _ => UploadMessage::default(),
    }
}

fn has_url(url: &str) -> bool {
    !url.trim().is_empty()
}

/// The scan button is enabled when either input is populated.
pub fn scan_enabled(has_file: bool, url: &str) -> bool {
    has_file || has_url(url)
}

/// Message after the file input changes. `None` means no file is selected.
pub fn on_file_change(file_name: Option<&str>) -> UploadMessage {
    match file_name {
        Some(name) => UploadMessage::success(format!("✅ Photo uploaded: {name}")),
        None => UploadMessage::default(),
    }
}

/// Message after the URL input changes.
///
/// A blank URL only clears the message when no file is selected; otherwise
/// the file confirmation stays put.
pub fn on_url_input(url: &str, has_file: bool, current: &UploadMessage) -> UploadMessage {
    if has_url(url) {
        UploadMessage::success("✅ Image URL entered!")
    } else if !has_file {
        UploadMessage::default()
    } else {
        current.clone()
    }
}

/// Decide whether the form may submit.
///
/// # Errors
///
/// Returns [`UploadError::NothingSelected`] when there is no file and the URL
/// is blank. The caller prevents the default submit and focuses the button.
pub fn check_submit(has_file: bool, url: &str) -> Result<(), UploadError> {
    if scan_enabled(has_file, url) {
        Ok(())
    } else {
        log::debug!("upload: submission blocked, nothing selected");
        Err(UploadError::NothingSelected)
    }
}

impl From<UploadError> for UploadMessage {
    fn from(err: UploadError) -> Self {
        Self { text: err.to_string(), tone: Tone::Error }
    }
}
