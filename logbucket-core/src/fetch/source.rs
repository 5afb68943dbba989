use crate::fetch::FetchError;
use crate::pipeline::constants::FETCH_TIMEOUT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One remote log file: a validated address plus the fixed read timeout.
#[derive(Debug, Clone)]
pub struct LogSource {
    url: Url,
    timeout: Duration,
}

impl LogSource {
    /// Validate the address eagerly so a bad URL is rejected before any
    /// network activity starts.
    pub fn new(address: &str) -> Result<Self, FetchError> {
        let url = Url::parse(address).map_err(|source| FetchError::InvalidUrl {
            url: address.to_string(),
            source,
        })?;

        Ok(Self {
            url,
            timeout: FETCH_TIMEOUT,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Read one source and split its body into lines.
///
/// No retries at this layer; a timeout, transport failure, non-success
/// status or undecodable body is reported with the source address attached.
pub async fn read_source(client: &Client, source: &LogSource) -> Result<Vec<String>, FetchError> {
    let url = source.url.as_str();

    let response = client
        .get(source.url.clone())
        .timeout(source.timeout)
        .send()
        .await
        .map_err(|e| classify_transport(url, source.timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: source.timeout,
            }
        } else {
            FetchError::Decode {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    Ok(body.lines().map(str::to_string).collect())
}

fn classify_transport(url: &str, timeout: Duration, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout,
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: e,
        }
    }
}
