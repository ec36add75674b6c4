#[tokio::main]
async fn main() -> eyre::Result<()> {
    travelapp::run().await
}
