use std::path::{Path, PathBuf};

/// Downloads named artifact files from a fixed remote base URL into the
/// local build context.
pub struct ArtifactFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ArtifactFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one named file into `dest_dir`, creating the directory if
    /// needed. Any network error or non-success status is fatal.
    pub async fn fetch_to(&self, file: &str, dest_dir: &Path) -> Result<PathBuf, FetchError> {
        let url = join_url(&self.base_url, file);
        tracing::debug!(%url, "fetching artifact");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| FetchError::Write {
                path: dest_dir.to_path_buf(),
                source: e,
            })?;

        let dest = dest_dir.join(file);
        tokio::fs::write(&dest, &bytes)
            .await
            .map_err(|e| FetchError::Write {
                path: dest.clone(),
                source: e,
            })?;

        tracing::debug!(path = %dest.display(), bytes = bytes.len(), "artifact written");
        Ok(dest)
    }
}

fn join_url(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file)
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request for {url} failed")]
    Request { url: String, source: reqwest::Error },

    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
