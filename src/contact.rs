use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("email request could not be encoded: {0}")]
    Encode(String),
    #[error("email service unreachable: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "SEND MESSAGE",
            Self::Sending => "TRANSMITTING...",
            Self::Sent => "DATA TRANSMITTED",
            Self::Failed => "TRANSMISSION FAILED",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Idle => "fas fa-paper-plane",
            Self::Sending => "fas fa-spinner fa-spin",
            Self::Sent => "fas fa-check",
            Self::Failed => "fas fa-times",
        }
    }

    /// Background and text colour overrides for the submit button.
    pub fn accent(self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            Self::Idle | Self::Sending => (None, None),
            Self::Sent => (Some("#00ff88"), Some("#000")),
            Self::Failed => (Some("#ff0055"), None),
        }
    }
}

/// Body of an EmailJS `email/send` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

impl EmailRequest {
    pub fn new<I>(config: &EmailConfig, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: fields
                .into_iter()
                .filter(|(name, _)| !name.trim().is_empty())
                .collect(),
        }
    }
}

#[async_trait(?Send)]
pub trait EmailSender {
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError>;
}

/// Value of an input's `data-filled` marker.
pub fn filled_flag(value: &str) -> &'static str {
    if value.trim().is_empty() {
        "false"
    } else {
        "true"
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    state: SubmitState,
}

impl ContactForm {
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Claims the form for a submission. A second submit while one is in
    /// flight is ignored.
    pub fn begin(&mut self) -> bool {
        if self.state == SubmitState::Sending {
            return false;
        }
        self.state = SubmitState::Sending;
        true
    }

    pub fn finish(&mut self, outcome: &Result<(), ContactError>) -> SubmitState {
        self.state = match outcome {
            Ok(()) => SubmitState::Sent,
            Err(_) => SubmitState::Failed,
        };
        self.state
    }

    pub fn reset(&mut self) {
        self.state = SubmitState::Idle;
    }
}
