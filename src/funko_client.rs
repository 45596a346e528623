use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use funko_collection_server::cli_style::{
    get_styles, print_empty_list, print_error, print_funko, print_success, print_warning,
};
use funko_collection_server::client::send_request;
use funko_collection_server::collection::{Funko, FunkoGenre, FunkoPatch, FunkoType};
use funko_collection_server::protocol::{CommandKind, RequestEnvelope, ResponseEnvelope};
use funko_collection_server::server::DEFAULT_PORT;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(styles = get_styles(), name = "funko-client")]
struct CliArgs {
    /// Server host.
    #[clap(long, global = true, default_value = "127.0.0.1")]
    pub host: String,

    /// Server port.
    #[clap(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Seconds to wait for the whole exchange.
    #[clap(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    command: ClientCommand,
}

#[derive(Subcommand, Debug)]
enum ClientCommand {
    /// Adds a Funko to a user's collection, every field is required.
    Add(AddArgs),

    /// Modifies some fields of a Funko, the ones not given are kept.
    Update(UpdateArgs),

    /// Removes a Funko from a user's collection.
    Remove {
        #[clap(long)]
        user: String,
        #[clap(long)]
        id: u32,
    },

    /// Shows a single Funko.
    Read {
        #[clap(long)]
        user: String,
        #[clap(long)]
        id: u32,
    },

    /// Shows every Funko of a user, ordered by id.
    List {
        #[clap(long)]
        user: String,
    },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[clap(long)]
    user: String,
    #[clap(long)]
    id: u32,
    #[clap(long)]
    name: String,
    #[clap(long)]
    desc: String,
    #[clap(long = "type", value_enum)]
    funko_type: FunkoType,
    #[clap(long, value_enum)]
    genre: FunkoGenre,
    #[clap(long)]
    franchise: String,
    #[clap(long)]
    number: u32,
    #[clap(long)]
    exclusive: bool,
    #[clap(long, default_value = "None")]
    special_features: String,
    #[clap(long)]
    market_value: f64,
}

impl AddArgs {
    fn to_funko(&self) -> Funko {
        Funko {
            id: self.id,
            name: self.name.clone(),
            description: self.desc.clone(),
            funko_type: self.funko_type,
            genre: self.genre,
            franchise: self.franchise.clone(),
            number: self.number,
            exclusive: self.exclusive,
            special_features: self.special_features.clone(),
            market_value: self.market_value,
        }
    }
}

#[derive(Args, Debug)]
struct UpdateArgs {
    #[clap(long)]
    user: String,
    #[clap(long)]
    id: u32,
    #[clap(long)]
    name: Option<String>,
    #[clap(long)]
    desc: Option<String>,
    #[clap(long = "type", value_enum)]
    funko_type: Option<FunkoType>,
    #[clap(long, value_enum)]
    genre: Option<FunkoGenre>,
    #[clap(long)]
    franchise: Option<String>,
    #[clap(long)]
    number: Option<u32>,
    #[clap(long)]
    exclusive: Option<bool>,
    #[clap(long)]
    special_features: Option<String>,
    #[clap(long)]
    market_value: Option<f64>,
}

impl UpdateArgs {
    fn to_patch(&self) -> FunkoPatch {
        FunkoPatch {
            name: self.name.clone(),
            description: self.desc.clone(),
            funko_type: self.funko_type,
            genre: self.genre,
            franchise: self.franchise.clone(),
            number: self.number,
            exclusive: self.exclusive,
            special_features: self.special_features.clone(),
            market_value: self.market_value,
        }
    }
}

fn build_request(command: &ClientCommand) -> Result<RequestEnvelope> {
    let request = match command {
        ClientCommand::Add(args) => RequestEnvelope::add(&args.user, args.to_funko()),
        ClientCommand::Update(args) => {
            let patch = args.to_patch();
            if patch.is_empty() {
                bail!("Nothing to update, give at least one field to change.");
            }
            RequestEnvelope::update(&args.user, args.id, patch)
        }
        ClientCommand::Remove { user, id } => RequestEnvelope::remove(user, *id),
        ClientCommand::Read { user, id } => RequestEnvelope::read(user, *id),
        ClientCommand::List { user } => RequestEnvelope::list(user),
    };
    Ok(request)
}

fn render_response(request: &RequestEnvelope, response: &ResponseEnvelope) {
    let message = response.message.as_deref().unwrap_or_default();
    if !response.success {
        print_error(message);
        return;
    }

    if !message.is_empty() {
        print_success(message);
    }
    let funkos = response.funkos.as_deref().unwrap_or_default();
    if funkos.is_empty() && request.kind == CommandKind::List {
        print_empty_list(&format!("{} has no Funko collection.", request.user));
    }
    for funko in funkos {
        print_funko(funko);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    let request = match build_request(&cli_args.command) {
        Ok(request) => request,
        Err(err) => {
            print_warning(&err.to_string());
            std::process::exit(2);
        }
    };

    let address = format!("{}:{}", cli_args.host, cli_args.port);
    let timeout = Duration::from_secs(cli_args.timeout_secs);
    match send_request(address.as_str(), &request, timeout).await {
        Ok(response) => {
            render_response(&request, &response);
            if !response.success {
                std::process::exit(1);
            }
        }
        Err(err) => {
            print_error(&format!("{:#}", err));
            std::process::exit(1);
        }
    }
}
