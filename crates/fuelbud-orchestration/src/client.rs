//! Blocking HTTP client for the prediction service.

use std::io::{self, Read};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use fuelbud_core::constants::DEFAULT_ENDPOINT;

use crate::error::ServiceError;
use crate::interfaces::PredictionService;
use crate::wire::{CompareRequest, CompareResponse, PredictRequest, PredictResponse};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Connection settings for [`HttpPredictionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://127.0.0.1:8000`.
    pub endpoint: String,
    /// Overall per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`PredictionService`] backed by `ureq`.
#[derive(Debug)]
pub struct HttpPredictionService {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpPredictionService {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT.min(config.timeout))
            .timeout(config.timeout)
            .build();
        Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            agent,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ServiceError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let request = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(body) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = read_body_limited(response).unwrap_or_else(|err| err.to_string());
                return Err(ServiceError::HttpStatus {
                    status,
                    body: truncate(&body),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ServiceError::Transport(err.to_string()));
            }
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            let body = read_body_limited(response).unwrap_or_else(|err| err.to_string());
            return Err(ServiceError::HttpStatus {
                status,
                body: truncate(&body),
            });
        }

        let body = read_body_limited(response).map_err(classify_read_error)?;
        parse_json(&body)
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        self.post("/predict", request)
    }

    fn compare(&self, request: &CompareRequest) -> Result<CompareResponse, ServiceError> {
        self.post("/compare", request)
    }
}

/// Parse a success body. Anything that is not the expected shape is malformed.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::MalformedResponse(
            "empty response body".to_string(),
        ));
    }
    serde_json::from_str(trimmed)
        .map_err(|err| ServiceError::MalformedResponse(format!("{err}: {}", truncate(trimmed))))
}

fn read_body_limited(response: ureq::Response) -> Result<String, io::Error> {
    let mut limited = response.into_reader().take(MAX_RESPONSE_BYTES as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > MAX_RESPONSE_BYTES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response exceeded {MAX_RESPONSE_BYTES} bytes"),
        ));
    }
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn classify_read_error(err: io::Error) -> ServiceError {
    if err.kind() == io::ErrorKind::InvalidData {
        ServiceError::MalformedResponse(err.to_string())
    } else {
        ServiceError::Transport(err.to_string())
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
