use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::RelayConfig;
use crate::error::AppError;
use crate::logging::{redact_email, redact_phone, SensitiveValue};
use crate::pricing::{EventType, PriceBreakdown};

/// Booking request sent from the contact screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: EventType,
    pub event_date: Option<NaiveDate>,
    pub message: String,
    /// Quote shown to the customer in the package builder, if any
    pub quote: Option<PriceBreakdown>,
}

impl BookingInquiry {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInquiry("name is required".to_string()));
        }

        let email_ok = match self.email.trim().split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
            None => false,
        };
        if !email_ok {
            return Err(AppError::InvalidInquiry(format!(
                "invalid email address '{}'",
                redact_email(&self.email)
            )));
        }

        let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            return Err(AppError::InvalidInquiry(
                "phone number needs at least 10 digits".to_string(),
            ));
        }

        Ok(())
    }

    fn template_params(&self) -> serde_json::Value {
        serde_json::json!({
            "from_name": self.name.trim(),
            "reply_to": self.email.trim(),
            "phone": self.phone.trim(),
            "event_type": self.event_type.label(),
            "event_date": self
                .event_date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_else(|| "Not decided".to_string()),
            "message": self.message,
            "quoted_price": self.quote.map(|q| q.total.to_string()).unwrap_or_default(),
        })
    }
}

/// Relay payload: the account identifiers plus the template variables
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: serde_json::Value,
}

/// Submits booking inquiries to the email relay service
pub struct InquiryRelay {
    client: Client,
    config: RelayConfig,
}

impl InquiryRelay {
    pub fn new(config: RelayConfig) -> Result<Self, AppError> {
        if !config.is_configured() {
            return Err(AppError::ConfigError(
                "relay.service_id, relay.template_id and relay.public_key must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Validate and send one inquiry. No retry.
    #[instrument(skip_all, fields(
        email = %redact_email(&inquiry.email),
        phone = %redact_phone(&inquiry.phone),
        service = %SensitiveValue::new(&self.config.service_id),
    ))]
    pub async fn submit(&self, inquiry: &BookingInquiry) -> Result<(), AppError> {
        inquiry.validate()?;

        let result = self.send(inquiry).await;
        match &result {
            Ok(()) => {
                crate::metrics::record_inquiry("success");
                info!("Booking inquiry submitted");
            }
            Err(e) => {
                crate::metrics::record_inquiry("failure");
                warn!(error = %e, "Inquiry relay submission failed");
            }
        }
        result
    }

    async fn send(&self, inquiry: &BookingInquiry) -> Result<(), AppError> {
        let request = RelayRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: inquiry.template_params(),
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::RelayError { status, message });
        }

        Ok(())
    }
}
