use thiserror::Error;

/// Failures that abort a fetch outright. Remote-side rejections (non-2xx
/// statuses, missing result link) are not errors; they surface as an absent
/// report from [`crate::CovSurverClient::fetch_report`].
#[derive(Error, Debug)]
pub enum CovSurverError {
    #[error("CovSurver request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Failed to read FASTA input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid base URL: {message}")]
    InvalidBaseUrl { message: String },
}

pub type Result<T> = std::result::Result<T, CovSurverError>;
