use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern must compile"));

pub const MISSING_FIELDS_ERROR: &str = "Имя и телефон обязательны для заполнения";
pub const INVALID_PHONE_ERROR: &str = "Некорректный номер телефона";
pub const PROCESSING_ERROR: &str = "Произошла ошибка при обработке заявки";
pub const FORWARDED_MESSAGE: &str = "Заявка успешно отправлена!";
pub const RECEIVED_MESSAGE: &str = "Заявка получена!";

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// A lead that passed server-side checks; fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadRejection {
    MissingFields,
    InvalidPhone,
}

impl LeadRejection {
    pub fn message(self) -> &'static str {
        match self {
            LeadRejection::MissingFields => MISSING_FIELDS_ERROR,
            LeadRejection::InvalidPhone => INVALID_PHONE_ERROR,
        }
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

impl LeadRequest {
    pub fn into_lead(self) -> Result<Lead, LeadRejection> {
        let name = self.name.trim();
        let phone = self.phone.trim();

        if name.is_empty() || phone.is_empty() {
            return Err(LeadRejection::MissingFields);
        }
        if !is_valid_phone(phone) {
            return Err(LeadRejection::InvalidPhone);
        }

        Ok(Lead {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn accepted(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn rejected(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub bot_configured: bool,
}
