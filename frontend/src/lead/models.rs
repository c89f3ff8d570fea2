use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern must compile"));

pub const MISSING_FIELDS_ALERT: &str = "Пожалуйста, заполните все поля";
pub const INVALID_PHONE_ALERT: &str = "Пожалуйста, введите корректный номер телефона";
pub const DEFAULT_SUBMIT_ERROR: &str = "Ошибка при отправке заявки";

/// Name and phone sent by the lead form, trimmed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadError {
    MissingFields,
    InvalidPhone,
}

impl LeadError {
    pub fn alert_text(self) -> &'static str {
        match self {
            LeadError::MissingFields => MISSING_FIELDS_ALERT,
            LeadError::InvalidPhone => INVALID_PHONE_ALERT,
        }
    }
}

impl Lead {
    pub fn new(name: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(LeadError::MissingFields);
        }
        if !PHONE_PATTERN.is_match(&self.phone) {
            return Err(LeadError::InvalidPhone);
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LeadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LeadResponse {
    pub fn into_outcome(self) -> SubmitOutcome {
        if self.success.unwrap_or(false) {
            SubmitOutcome::Success
        } else {
            SubmitOutcome::Error {
                message: self.error.unwrap_or_else(|| DEFAULT_SUBMIT_ERROR.to_string()),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success,
    Error { message: String },
}

/// What the modal shows in place of the form once a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub detail: Option<String>,
}

impl SubmitOutcome {
    pub fn content(&self) -> OutcomeContent {
        match self {
            SubmitOutcome::Success => OutcomeContent {
                icon: "✓",
                title: "Спасибо за заявку!",
                text: "Мы получили вашу заявку и свяжемся с вами в течение 24 часов.",
                accent: "#10b981",
                detail: None,
            },
            // The visitor is still thanked; the detail line only helps when
            // they contact us directly.
            SubmitOutcome::Error { message } => OutcomeContent {
                icon: "⚠️",
                title: "Заявка получена!",
                text: "Мы получили вашу заявку. Если возникли проблемы с отправкой, \
                       пожалуйста, свяжитесь с нами напрямую.",
                accent: "#f59e0b",
                detail: Some(message.clone()),
            },
        }
    }
}
