use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::{eyre, Report};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// `HOST` and `PORT`, falling back to all interfaces on 8080.
pub fn bind_address() -> Result<SocketAddr, Report> {
    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
    let port = match env::var("PORT") {
        Ok(port) => port
            .parse::<u16>()
            .map_err(|e| eyre!("Invalid PORT {}: {}", port, e))?,
        Err(_) => DEFAULT_PORT,
    };

    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| eyre!("Invalid bind address {}:{}: {}", host, port, e))
}

pub async fn serve(router: Router) -> Result<(), Report> {
    let addr = bind_address()?;
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, docs = %format!("http://{}/swagger-ui/", addr), "Travel API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
