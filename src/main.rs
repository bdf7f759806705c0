use clap::Parser;
use std::path::PathBuf;

mod config;

#[derive(Debug, Parser)]
#[command(version, about = "Collects ratings and short messages from the people around you")]
struct Args {
    /// TOML configuration file [default: feedbackdb.toml]
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long, conflicts_with = "disable_cors")]
    enable_cors: bool,

    /// Only allow requests from the same origin
    #[arg(long)]
    disable_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    if args.disable_cors {
        cfg.webserver.enable_cors = false;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = fbdb_db_sqlite::Connections::init(
        &cfg.db.conn_sqlite,
        cfg.db.conn_pool_size,
        cfg.db.conn_timeout,
    )?;
    fbdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    log::info!("Starting web server");
    fbdb_webserver::run(
        Box::new(connections),
        cfg.webserver.enable_cors,
        env!("CARGO_PKG_VERSION"),
    )
    .await
}
