use async_trait::async_trait;
use gloo_net::http::Request;
use slide_portfolio::contact::{ContactError, EmailRequest, EmailSender};

pub struct EmailJsClient {
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsClient {
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|error| ContactError::Encode(error.to_string()))?
            .send()
            .await
            .map_err(|error| ContactError::Transport(error.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}
