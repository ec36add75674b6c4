use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for `POST {base}/initialize`.
#[derive(Debug, Clone, Serialize)]
pub struct ChapaInitializeRequest {
    pub amount: String,
    pub currency: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub tx_ref: String,
    pub callback_url: String,
    pub return_url: String,
    pub customization: ChapaCustomization,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapaCustomization {
    pub title: String,
    pub description: String,
}

/// Common response shape: `{"status": "success" | "failed", "message": ..., "data": ...}`.
#[derive(Debug, Deserialize)]
pub struct ChapaEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ChapaEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Chapa reports validation failures as an object keyed by field, so
    /// non-string messages are passed through as JSON text.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChapaCheckoutData {
    pub checkout_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChapaVerifyData {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tx_ref: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Outcome of a successful verify call: the parsed status and the raw body.
#[derive(Debug, Clone)]
pub struct ChapaVerification {
    pub provider_status: Option<String>,
    pub raw: Value,
}
