use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::info;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::mail_details::MailInfo;

/// Outbound mail seam; the notification worker only depends on this.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct EmailClient {
    from: Mailbox,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailClient {
    /// Builds an SMTP client when `SMTP_HOST` was configured, otherwise a
    /// client that writes every message to the log.
    pub fn new(info: &MailInfo) -> Result<Self, ApiError> {
        let from: Mailbox = info.default_from_email.parse().map_err(|e| {
            ApiError::Internal(format!("Invalid DEFAULT_FROM_EMAIL: {}", e))
        })?;

        let transport = match &info.smtp {
            Some(smtp) => {
                let builder = if smtp.port == 465 {
                    AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                } else {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
                }
                .map_err(|e| ApiError::Internal(format!("Invalid SMTP relay: {}", e)))?
                .port(smtp.port);

                let builder = match (&smtp.username, &smtp.password) {
                    (Some(user), Some(pass)) => builder.credentials(Credentials::new(
                        user.clone(),
                        pass.expose_secret().to_string(),
                    )),
                    _ => builder,
                };

                Some(builder.build())
            }
            None => None,
        };

        Ok(Self { from, transport })
    }

    pub fn is_smtp(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl Mailer for EmailClient {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let Some(transport) = &self.transport else {
            info!(to, subject, body, from = %self.from, "email (log transport)");
            return Ok(());
        };

        let recipient: Mailbox = to
            .parse()
            .map_err(|e| ApiError::BadRequest(format!("Invalid recipient {}: {}", to, e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| ApiError::Internal(format!("Failed to build email: {}", e)))?;

        transport
            .send(message)
            .await
            .map_err(|e| ApiError::Internal(format!("SMTP delivery failed: {}", e)))?;

        info!(to, subject, "email sent");
        Ok(())
    }
}
