use super::dto::validate_all;
use super::model::Event;
use lazy_static::lazy_static;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Where the events payload is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Url(String),
    File(PathBuf),
}

impl From<&str> for EventSource {
    fn from(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            EventSource::Url(source.to_string())
        } else {
            EventSource::File(PathBuf::from(source))
        }
    }
}

impl Display for EventSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventSource::Url(url) => write!(f, "{}", url),
            EventSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request answered with status {0}")]
    Status(StatusCode),
    #[error("couldn't read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("load ended without an outcome")]
    Interrupted,
}

pub struct AgendaAPI;

impl AgendaAPI {
    /**
    Returns the valid events of the payload, in source order.
    There is no retry, a failed load stays failed for the session.
    */
    #[tracing::instrument(skip(source), fields(source = %source))]
    pub async fn get_events(source: &EventSource) -> Result<Vec<Event>, LoadError> {
        info!("Getting events");

        let json_response = match source {
            EventSource::Url(url) => Self::fetch(url).await?,
            EventSource::File(path) => Self::read(path).await?,
        };

        Self::parse_events(&json_response)
    }

    pub fn parse_events(json: &str) -> Result<Vec<Event>, LoadError> {
        match serde_json::from_str::<Vec<Value>>(json) {
            Ok(payload) => {
                let payload_size = payload.len();
                let events = validate_all(payload);

                info!("Kept {} of {} events", events.len(), payload_size);

                Ok(events)
            }
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(LoadError::InvalidResponse(e))
            }
        }
    }

    async fn fetch(url: &str) -> Result<String, LoadError> {
        let response = REST_CLIENT.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        Ok(response.text().await?)
    }

    async fn read(path: &Path) -> Result<String, LoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}
