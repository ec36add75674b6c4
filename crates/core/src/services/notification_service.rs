use crate::clients::email::Mailer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Confirmation mail for a freshly created booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub email: String,
    pub listing_name: String,
    pub booking_id: Uuid,
}

impl BookingConfirmation {
    pub fn subject(&self) -> String {
        format!("Booking Confirmation - {}", self.listing_name)
    }

    pub fn body(&self, sent_at: DateTime<Utc>) -> String {
        format!(
            "Hello,\n\
             \n\
             Thank you for booking with us!\n\
             \n\
             Booking ID: {}\n\
             Listing: {}\n\
             Date: {}\n\
             \n\
             Your booking has been successfully received and is being processed.\n\
             \n\
             Best regards,\n\
             The Travel App Team",
            self.booking_id,
            self.listing_name,
            sent_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationJob {
    BookingConfirmation(BookingConfirmation),
}

/// Producer half of the in-process job queue.
#[derive(Clone)]
pub struct NotificationQueue {
    sender: mpsc::UnboundedSender<NotificationJob>,
}

impl NotificationQueue {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NotificationJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Never blocks; a closed queue only loses the job.
    pub fn enqueue(&self, job: NotificationJob) {
        if let Err(e) = self.sender.send(job) {
            error!(job = ?e.0, "notification queue closed, job dropped");
        }
    }
}

pub struct NotificationService;

impl NotificationService {
    /// Drains jobs in arrival order until every sender is gone.
    pub async fn run_worker(
        mut receiver: mpsc::UnboundedReceiver<NotificationJob>,
        mailer: Arc<dyn Mailer>,
    ) {
        info!("notification worker started");

        while let Some(job) = receiver.recv().await {
            Self::handle(mailer.as_ref(), job).await;
        }

        warn!("notification queue closed, worker exiting");
    }

    pub async fn handle(mailer: &dyn Mailer, job: NotificationJob) {
        match job {
            NotificationJob::BookingConfirmation(confirmation) => {
                let result = mailer
                    .send_email(
                        &confirmation.email,
                        &confirmation.subject(),
                        &confirmation.body(Utc::now()),
                    )
                    .await;

                match result {
                    Ok(()) => info!(
                        booking_id = %confirmation.booking_id,
                        "booking confirmation sent"
                    ),
                    Err(e) => error!(
                        booking_id = %confirmation.booking_id,
                        error = %e,
                        "booking confirmation failed"
                    ),
                }
            }
        }
    }
}
