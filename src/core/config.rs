use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub yandex_session_id: String,
    pub telegraph_access_token: String,
}

impl AppConfig {
    /// Build the config from the process environment.
    ///
    /// `APP_ENV=development` selects `BOT_TOKEN_DEV`, anything else selects
    /// `BOT_TOKEN_PROD`. The summarizer cookie and the Telegraph token are
    /// required in both modes.
    pub fn from_env() -> Result<Self, String> {
        let is_production = env::var("APP_ENV")
            .map(|v| v != "development")
            .unwrap_or(true);
        let bot_token_var = if is_production {
            "BOT_TOKEN_PROD"
        } else {
            "BOT_TOKEN_DEV"
        };

        Ok(Self {
            bot_token: env::var(bot_token_var).map_err(|e| format!("{}: {}", bot_token_var, e))?,
            yandex_session_id: env::var("YANDEX_SESSION_ID")
                .map_err(|e| format!("YANDEX_SESSION_ID: {}", e))?,
            telegraph_access_token: env::var("TELEGRAPH_ACCESS_TOKEN")
                .map_err(|e| format!("TELEGRAPH_ACCESS_TOKEN: {}", e))?,
        })
    }
}
