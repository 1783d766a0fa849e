#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dealerbot_server::start().await
}
