use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub sentiment_model: String,
    pub generation_model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
pub struct SymbolConfig {
    pub symbol: String,
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub symbols: Vec<SymbolConfig>,
    pub check_interval_seconds: u64,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
