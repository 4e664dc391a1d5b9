use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::{
    AppState,
    config::{Config, ContactConfig, ObservabilityConfig, ServerConfig},
};
use portfolio_contact::{ComposedMessage, DeliveryError, DeliveryReceipt, Mailer};
use portfolio_notification::EmailConfig;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub failure: Option<fn() -> DeliveryError>,
    pub sent: Arc<Mutex<Vec<ComposedMessage>>>,
}

impl RecordingMailer {
    #[allow(dead_code)]
    pub fn failing(failure: fn() -> DeliveryError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<ComposedMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &ComposedMessage) -> Result<DeliveryReceipt, DeliveryError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(DeliveryReceipt {
            message_id: Some("msg-1".to_owned()),
        })
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        email: EmailConfig::default(),
        contact: ContactConfig {
            recipient: "owner@portfolio.localhost".to_owned(),
            success_message: "Message sent successfully".to_owned(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(mailer: Option<RecordingMailer>) -> Router {
    let config = config();
    let contact_command = portfolio_contact::Command::new(
        config.contact_settings(),
        mailer.map(|m| Arc::new(m) as Arc<dyn Mailer>),
    );

    portfolio::routes::router(AppState {
        config,
        contact_command,
    })
}

pub async fn post_json(app: Router, body: impl Into<String>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8_lossy(&bytes).into_owned(), content_type)
}
