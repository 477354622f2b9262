//! `POST /scan` — accepts the upload form and redirects back to `/`.
//!
//! Mirrors the form's presence rule on the host side: a submission needs a
//! non-empty file part or a non-blank `image_url`. Nothing is stored and no
//! recognition runs; the redirect carries a `?scan=` status for the page.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::response::Redirect;
use client::util::upload_gate::{SCAN_STATUS_MISSING, SCAN_STATUS_PARAM, SCAN_STATUS_RECEIVED};

/// Upload size cap for the scan route.
pub const MAX_SCAN_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Which input a scan submission used. File wins over URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSource {
    File { file_name: String, bytes: usize },
    Url(String),
}

/// Pick the scan source from the parsed form parts.
pub(crate) fn classify(file: Option<(String, usize)>, image_url: Option<&str>) -> Option<ScanSource> {
    if let Some((file_name, bytes)) = file.filter(|(name, bytes)| !name.is_empty() && *bytes > 0) {
        return Some(ScanSource::File { file_name, bytes });
    }
    image_url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|u| ScanSource::Url(u.to_owned()))
}

fn redirect_with_status(status: &str) -> Redirect {
    Redirect::to(&format!("/?{SCAN_STATUS_PARAM}={status}"))
}

pub async fn scan(mut multipart: Multipart) -> Result<Redirect, MultipartError> {
    let mut file = None;
    let mut image_url = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await?.len();
                file = Some((file_name, bytes));
            }
            Some("image_url") => image_url = Some(field.text().await?),
            _ => {}
        }
    }

    match classify(file, image_url.as_deref()) {
        Some(source) => {
            tracing::info!(?source, "scan request received");
            Ok(redirect_with_status(SCAN_STATUS_RECEIVED))
        }
        None => {
            tracing::debug!("scan request without file or image url");
            Ok(redirect_with_status(SCAN_STATUS_MISSING))
        }
    }
}
