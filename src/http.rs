use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReqParam {
    pub key: String,
    pub value: String,
}

impl ReqParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        ReqParam {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ReqBody {
    pub value: Option<Value>,
}

impl ReqBody {
    pub fn empty() -> Self {
        ReqBody { value: None }
    }

    pub fn json<T: Serialize>(payload: &T) -> Result<Self, ClientError> {
        Ok(ReqBody {
            value: Some(serde_json::to_value(payload)?),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub enum HttpMethod {
    POST,
    GET,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    fn as_reqwest(&self) -> Method {
        match self {
            HttpMethod::POST => Method::POST,
            HttpMethod::GET => Method::GET,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::DELETE => Method::DELETE,
        }
    }
}

/// An endpoint path relative to the configured base URL.
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
    pub query_params: Vec<ReqParam>,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: String, query_params: Vec<ReqParam>) -> Endpoint {
        Endpoint {
            method,
            path,
            query_params,
        }
    }
}

pub struct HttpRequest {
    pub endpoint: Endpoint,
    pub req_body: ReqBody,
}

impl HttpRequest {
    pub fn new(endpoint: Endpoint, req_body: ReqBody) -> HttpRequest {
        HttpRequest { endpoint, req_body }
    }
}

/// JSON transport over one base URL, with optional bearer authentication.
///
/// Success bodies deserialize into the caller's type; non-success statuses
/// become [`ClientError::Remote`] carrying the server's diagnostic, and
/// connectivity failures become [`ClientError::Transport`].
#[derive(Clone)]
pub struct ApiTransport {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, ClientError> {
        let req = self.build_reqwest(request)?;
        match req.send().await {
            Ok(response) => {
                let status_code = response.status();
                debug!("request executed, status_code: {}", status_code);
                let text = response
                    .text()
                    .await
                    .map_err(|e| ClientError::Transport(e.to_string()))?;
                if status_code.is_success() {
                    Ok(serde_json::from_str::<T>(&text)?)
                } else {
                    debug!("request rejected: {}", text);
                    Err(ClientError::rejection(status_code.as_u16(), &text))
                }
            }
            Err(error) => {
                debug!("request failed: {}", error);
                Err(ClientError::Transport(error.to_string()))
            }
        }
    }

    fn build_reqwest(&self, request: HttpRequest) -> Result<RequestBuilder, ClientError> {
        let endpoint = request.endpoint;
        let mut url = self
            .base_url
            .join(&endpoint.path)
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        for param in &endpoint.query_params {
            url.query_pairs_mut().append_pair(&param.key, &param.value);
        }
        debug!("url: {}, method: {:?}", url, endpoint.method);
        let mut req = self.client.request(endpoint.method.as_reqwest(), url);
        if let Some(token) = &self.token {
            let header = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            req = req.header(AUTHORIZATION, header);
        }
        if let Some(body) = &request.req_body.value {
            req = req.json(body);
        }
        Ok(req)
    }
}
