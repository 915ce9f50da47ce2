// One-shot debugging entry point: summarize the first argument and print
// the raw result.

use anyhow::Context;
use pereskaz::core::config::AppConfig;
use pereskaz::summarize::{SummarizeClient, summarize};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pereskaz::setup_logging();

    let input = std::env::args()
        .nth(1)
        .context("usage: pereskaz-cli <url or text>")?;

    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let client = SummarizeClient::new(config.yandex_session_id);
    let result = summarize(&client, &input).await?;
    println!("{:#?}", result);

    Ok(())
}
