use crate::application::session_store::DEFAULT_MAX_SESSIONS;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub sources: SourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound on retained sessions before the least recently used is evicted
    pub max_sessions: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub item_column: String,
    pub count_column: String,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load settings from `config/dashboard.*` (optional) and `DASHBOARD__*` variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_sessions", DEFAULT_MAX_SESSIONS as u64)?
        .set_default("sources.csv_path", "data/data.csv")?
        .set_default("sources.json_path", "data/data.json")?
        .set_default("sources.item_column", "Grocery Item")?
        .set_default("sources.count_column", "Number of Items")?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
