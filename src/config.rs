use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Lookup provider settings
    pub api_url: String,
    pub http_timeout_secs: u64,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://viacep.com.br".to_string(),
            http_timeout_secs: 10,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let api_url = std::env::var("CEP_API_URL")
        .unwrap_or_else(|_| "https://viacep.com.br".to_string());

    let http_timeout_secs = std::env::var("CEP_HTTP_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        api_url,
        http_timeout_secs,
        debug,
    })
}
