// Long-running bot entry point: load .env, init logging, poll Telegram.

use pereskaz::bot::Bot;
use pereskaz::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pereskaz::setup_logging();

    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let bot = Bot::new(&config);
    bot.run().await?;

    Ok(())
}
