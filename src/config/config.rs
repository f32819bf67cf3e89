use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub file: FileConfig,
    pub scraping: ScrapingConfig,
    pub comments: CommentsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub source_html: String,
    pub output_json: String,
    pub output_csv: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingConfig {
    pub card_selector: String,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsConfig {
    pub enabled: bool,
    pub api_url: String,
    pub count: u32,
    pub user_agent: String,
    pub min_delay: u64,
    pub max_delay: u64,
}

/// Loads `path`, then applies `APP_<SECTION>__<KEY>` environment overrides.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
