//! Server

use bankdemo_api::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let cfg = AppConfig::load();
    bankdemo_api::start_server(cfg).await
}
