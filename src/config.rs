use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::ClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one reporting-service project.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub project: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, project: &str) -> Result<Self, ClientError> {
        let mut url =
            Url::parse(base_url).map_err(|e| ClientError::Transport(e.to_string()))?;
        // joining relative endpoint paths requires the base to end with a slash
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(Self {
            base_url: url,
            project: project.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `REPORTAGE_URL`, `REPORTAGE_PROJECT` and, when set,
    /// `REPORTAGE_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        let url = env::var("REPORTAGE_URL")
            .map_err(|_| ClientError::Transport("REPORTAGE_URL is not set".to_string()))?;
        let project = env::var("REPORTAGE_PROJECT")
            .map_err(|_| ClientError::Transport("REPORTAGE_PROJECT is not set".to_string()))?;
        let mut config = Self::new(&url, &project)?;
        if let Ok(token) = env::var("REPORTAGE_TOKEN") {
            config = config.with_token(token);
        }
        Ok(config)
    }
}
