use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("feedbackdb.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fill in all missing values from the embedded default configuration.
    pub fn or_default(self) -> Result<Self, toml::de::Error> {
        let Self { db, webserver } = self;
        let defaults = Self::embedded_default()?;
        Ok(Self {
            db: Some(db.unwrap_or_default().or(defaults.db.unwrap_or_default())),
            webserver: Some(
                webserver
                    .unwrap_or_default()
                    .or(defaults.webserver.unwrap_or_default()),
            ),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub connection_timeout: Option<Duration>,
}

impl Db {
    fn or(self, other: Self) -> Self {
        Self {
            connection_sqlite: self.connection_sqlite.or(other.connection_sqlite),
            connection_pool_size: self.connection_pool_size.or(other.connection_pool_size),
            connection_timeout: self.connection_timeout.or(other.connection_timeout),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: Option<bool>,
}

impl WebServer {
    fn or(self, other: Self) -> Self {
        Self {
            cors: self.cors.or(other.cors),
        }
    }
}
