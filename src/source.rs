use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::FetchConfig;
use crate::error::{HdobError, Result};

/// Where the IWG1 text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Url(String),
}

impl InputSource {
    /// Name used for mission inference and log messages.
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }

    /// Retrieve the whole input as text.
    ///
    /// One attempt only: URL fetches are bounded by the configured timeout
    /// and a failure is returned to the caller as is. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn read_text(&self, config: &FetchConfig) -> Result<String> {
        match self {
            Self::Path(path) => {
                let bytes = std::fs::read(path).map_err(|source| HdobError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Self::Url(url) => fetch_url(url, Duration::from_secs(config.timeout_secs)),
        }
    }
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    let fetch_err = |source: reqwest::Error| HdobError::Fetch {
        url: url.to_string(),
        source,
    };

    log::info!("Fetching {} (timeout {}s)", url, timeout.as_secs());
    let client = Client::builder().timeout(timeout).build().map_err(fetch_err)?;
    let resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;
    let bytes = resp.bytes().map_err(fetch_err)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
