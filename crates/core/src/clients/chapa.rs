use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{error, info, warn};
use travelapp_primitives::error::{ApiError, ChapaError};
use travelapp_primitives::models::providers::chapa::{
    ChapaCheckoutData, ChapaEnvelope, ChapaInitializeRequest, ChapaVerification, ChapaVerifyData,
};

pub const INITIALIZE_FAILED: &str = "Payment initialization failed.";
pub const VERIFY_FAILED: &str = "Verification failed.";

/// Thin client over the Chapa transaction API.
///
/// `base_url` points at the transaction root, e.g.
/// `https://api.chapa.co/v1/transaction`.
#[derive(Clone)]
pub struct ChapaClient {
    http: Client,
    base_url: Url,
    secret_key: SecretString,
}

impl ChapaClient {
    pub fn new(http: Client, base_url: &str, secret_key: SecretString) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::Internal("Invalid Chapa base URL".into()))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::Internal("Invalid Chapa base URL".into()));
        }

        Ok(Self {
            http,
            base_url,
            secret_key,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Starts a hosted checkout and returns its `checkout_url`.
    pub async fn initialize(&self, payload: &ChapaInitializeRequest) -> Result<String, ChapaError> {
        let url = self.endpoint(&["initialize"]);

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.secret_key.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, tx_ref = %payload.tx_ref, "Failed to reach Chapa");
                ChapaError::Network(e.to_string())
            })?;

        let (ok, raw) = Self::read_body(resp).await?;
        let envelope = Self::envelope(&raw)?;

        if !ok || !envelope.is_success() {
            warn!(
                tx_ref = %payload.tx_ref,
                chapa_status = %envelope.status,
                chapa_message = ?envelope.message_text(),
                "Chapa initialize rejected"
            );
            return Err(ChapaError::Rejected(
                envelope
                    .message_text()
                    .unwrap_or_else(|| INITIALIZE_FAILED.to_string()),
            ));
        }

        let data: ChapaCheckoutData = envelope
            .data
            .ok_or_else(|| ChapaError::InvalidResponse("missing data".into()))
            .and_then(|d| {
                serde_json::from_value(d).map_err(|e| ChapaError::InvalidResponse(e.to_string()))
            })?;

        info!(tx_ref = %payload.tx_ref, "Chapa checkout created");
        Ok(data.checkout_url)
    }

    /// Looks up a transaction by merchant reference.
    pub async fn verify(&self, tx_ref: &str) -> Result<ChapaVerification, ChapaError> {
        let url = self.endpoint(&["verify", tx_ref]);

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.secret_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, tx_ref, "Failed to reach Chapa");
                ChapaError::Network(e.to_string())
            })?;

        let (ok, raw) = Self::read_body(resp).await?;
        let envelope = Self::envelope(&raw)?;

        if !ok || !envelope.is_success() {
            warn!(
                tx_ref,
                chapa_status = %envelope.status,
                chapa_message = ?envelope.message_text(),
                "Chapa verify rejected"
            );
            return Err(ChapaError::Rejected(
                envelope
                    .message_text()
                    .unwrap_or_else(|| VERIFY_FAILED.to_string()),
            ));
        }

        let data = envelope
            .data
            .and_then(|d| serde_json::from_value::<ChapaVerifyData>(d).ok())
            .unwrap_or_default();

        info!(
            tx_ref,
            chapa_reference = ?data.reference,
            provider_status = ?data.status,
            "Chapa transaction verified"
        );

        Ok(ChapaVerification {
            provider_status: data.status,
            raw,
        })
    }

    async fn read_body(resp: Response) -> Result<(bool, Value), ChapaError> {
        let ok = resp.status().is_success();
        let http_status = resp.status().as_u16();

        let text = resp
            .text()
            .await
            .map_err(|e| ChapaError::Network(e.to_string()))?;

        let raw = serde_json::from_str::<Value>(&text).map_err(|e| {
            error!(
                http_status,
                response = %text.chars().take(200).collect::<String>(),
                "Chapa returned an unreadable body"
            );
            ChapaError::InvalidResponse(e.to_string())
        })?;

        Ok((ok, raw))
    }

    fn envelope(raw: &Value) -> Result<ChapaEnvelope<Value>, ChapaError> {
        serde_json::from_value(raw.clone()).map_err(|e| ChapaError::InvalidResponse(e.to_string()))
    }
}
