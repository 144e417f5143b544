use crate::core::result_link::find_result_link;
use crate::utils::error::{CovSurverError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Production CovSurver deployment queried by [`CovSurverClient::new`].
pub const COVSURVER_BASE_URL: &str = "https://mendel3.bii.a-star.edu.sg/METHODS/corona/delta6";

/// CGI endpoint, relative to the base URL, that accepts FASTA submissions.
pub const ANNOTATION_PATH: &str = "/cgi-bin/coronamapBlastAnno.pl";

/// Client for the CovSurver mutation-annotation service.
///
/// Submits FASTA sequences and downloads the per-query TSV report the service
/// generates for them. Both requests of a fetch go through one pooled
/// `reqwest::Client`, so the report download reuses the connection opened for
/// the submission.
#[derive(Debug, Clone)]
pub struct CovSurverClient {
    client: Client,
    base_url: String,
}

impl CovSurverClient {
    /// Client pointed at the production CovSurver deployment.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: COVSURVER_BASE_URL.to_string(),
        }
    }

    /// Client pointed at an alternative deployment (mirrors, mock servers).
    ///
    /// The URL must parse and use an `http`/`https` scheme. A trailing `/` is
    /// stripped so the discovered result path can be appended directly.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| CovSurverError::InvalidBaseUrl {
            message: format!("{}: {}", base_url, e),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(CovSurverError::InvalidBaseUrl {
                    message: format!("{}: unsupported scheme '{}'", base_url, scheme),
                });
            }
        }

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the CovSurver report for the given FASTA content.
    ///
    /// The content is submitted verbatim; nothing is parsed or validated on
    /// the way in. Returns the raw TSV report text, or `None` when the
    /// service turned the submission down: a non-2xx status on either
    /// request, or a response carrying no result link (the service answers
    /// 200 with an explanation page when it cannot process the sequences).
    /// Which of those happened is only visible in the logs. Transport-level
    /// failures are returned as errors.
    pub async fn fetch_report(&self, fasta: impl Into<String>) -> Result<Option<String>> {
        let submit_url = format!("{}{}", self.base_url, ANNOTATION_PATH);
        tracing::debug!("POST request to: {}", submit_url);

        let form = Form::new().part("seqfile", Part::text(fasta.into()).file_name("query.fasta"));
        let response = self.client.post(&submit_url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!("POST response status: {}, body: {}", status, body);
            return Ok(None);
        }
        tracing::debug!("POST response status: {}", status);

        let link = match find_result_link(&body) {
            Some(link) => link,
            None => {
                tracing::error!("No result link in response, response body: {}", body);
                return Ok(None);
            }
        };

        // The link is server-relative but the report lives under the base
        // URL's own path, so plain concatenation is the correct join here.
        let result_url = format!("{}{}", self.base_url, link);
        tracing::debug!("GET request to: {}", result_url);

        let response = self.client.get(&result_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("GET response status: {}", status);
            return Ok(None);
        }
        tracing::debug!("GET response status: {}", status);

        let report = response.text().await?;
        Ok(Some(report))
    }

    /// Reads FASTA content from `path` and fetches its report.
    pub async fn fetch_report_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<String>> {
        let path = path.as_ref();
        tracing::debug!("Reading FASTA input from: {}", path.display());
        let fasta = tokio::fs::read_to_string(path).await?;
        self.fetch_report(fasta).await
    }
}

impl Default for CovSurverClient {
    fn default() -> Self {
        Self::new()
    }
}
