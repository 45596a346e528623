use anyhow::{Context, Result};
use clap::Parser;
use funko_collection_server::cli_style::get_styles;
use funko_collection_server::collection::FileFunkoStore;
use funko_collection_server::config::{AppConfig, CliConfig, FileConfig};
use funko_collection_server::server::{
    run_server, DEFAULT_MAX_REQUEST_BYTES, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[command(styles = get_styles())]
struct CliArgs {
    /// Root directory of the collections, one subdirectory per user.
    #[clap(long, value_parser = parse_path, default_value = "./data")]
    pub data_dir: PathBuf,

    /// The host to listen on.
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Seconds to wait for a client to finish sending its request.
    #[clap(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Largest request accepted, in bytes.
    #[clap(long, default_value_t = DEFAULT_MAX_REQUEST_BYTES)]
    pub max_request_bytes: usize,

    /// Optional TOML file, its values override the flags above.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            data_dir: self.data_dir.clone(),
            host: self.host.clone(),
            port: self.port,
            request_timeout_secs: self.request_timeout_secs,
            max_request_bytes: self.max_request_bytes,
        }
    }
}

async fn run(cli_args: CliArgs) -> Result<()> {
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Opening Funko collections at {:?}...", config.data_dir);
    let store = FileFunkoStore::new(&config.data_dir)
        .with_context(|| format!("Could not open data directory {:?}", config.data_dir))?;

    run_server(Arc::new(store), config.server_config()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    if let Err(err) = run(cli_args).await {
        error!("Fatal error: {:#}", err);
        std::process::exit(1);
    }
}
