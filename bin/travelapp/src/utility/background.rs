use eyre::Report;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use travelapp_core::app_state::AppState;
use travelapp_core::clients::{EmailClient, Mailer};
use travelapp_core::services::notification_service::{NotificationJob, NotificationService};

pub fn spawn_background_tasks(
    state: &Arc<AppState>,
    jobs: UnboundedReceiver<NotificationJob>,
) -> Result<(), Report> {
    let email = EmailClient::new(&state.config.mail_details)?;

    info!(
        smtp = email.is_smtp(),
        "Starting booking notification worker"
    );

    let mailer: Arc<dyn Mailer> = Arc::new(email);
    tokio::spawn(NotificationService::run_worker(jobs, mailer));

    Ok(())
}
