use async_trait::async_trait;
use portfolio_contact::ContactSubmission;
use serde::Deserialize;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message";

/// What the contact endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Accepted { message: String },
    Failed { error: String, fallback: bool },
}

#[derive(Debug, thiserror::Error)]
#[error("contact endpoint unreachable: {0}")]
pub struct EndpointError(pub String);

#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn post(&self, fields: &ContactSubmission) -> Result<Reply, EndpointError>;
}

#[derive(Clone)]
pub struct HttpEndpoint {
    http_client: reqwest::Client,
    url: String,
}

#[derive(Deserialize, Default)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
    #[serde(default)]
    fallback: bool,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Endpoint for HttpEndpoint {
    async fn post(&self, fields: &ContactSubmission) -> Result<Reply, EndpointError> {
        let response = self
            .http_client
            .post(&self.url)
            .json(fields)
            .send()
            .await
            .map_err(|e| EndpointError(e.to_string()))?;

        let ok = response.status().is_success();
        let body = response.json::<ReplyBody>().await.unwrap_or_default();

        if ok {
            return Ok(Reply::Accepted {
                message: body.message.unwrap_or_default(),
            });
        }

        Ok(Reply::Failed {
            error: body
                .error
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned()),
            fallback: body.fallback,
        })
    }
}
