use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "feedbackdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&cfg_string)?
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::warn!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            log::info!("Use database URL from {ENV_NAME_DB_URL}");
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
    /// Bounds the wait for a pooled connection
    /// and for a locked database.
    pub conn_timeout: Duration,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
}

fn missing(key: &str) -> anyhow::Error {
    anyhow!("Missing configuration value '{key}'")
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from.or_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
        } = db.unwrap_or_default();

        let conn_sqlite = connection_sqlite.ok_or_else(|| missing("db.connection-sqlite"))?;
        let conn_pool_size =
            connection_pool_size.ok_or_else(|| missing("db.connection-pool-size"))?;
        if conn_pool_size == 0 {
            return Err(anyhow!("The database connection pool must not be empty"));
        }
        let conn_timeout = connection_timeout.ok_or_else(|| missing("db.connection-timeout"))?;
        if conn_timeout.is_zero() {
            return Err(anyhow!("The database connection timeout must not be zero"));
        }
        let db = Db {
            conn_sqlite,
            conn_pool_size,
            conn_timeout,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors.ok_or_else(|| missing("webserver.cors"))?,
        };

        Ok(Self { db, webserver })
    }
}
