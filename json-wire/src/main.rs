use clap::{Parser, Subcommand};
use json_wire::window::handle_size::{self, Arguments};
use json_wire::{Client, HttpDispatcher};
use json_wire_config::get_config;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Talk to a JSON Wire remote end.
///
/// The remote end is read from `json-wire.toml` and `JSON_WIRE_*` environment variables.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get or change the size of a window.
    WindowHandleSize {
        /// Print the request instead of sending it.
        #[arg(long)]
        dry_run: bool,
        /// Window handle and/or new size as json, e.g. `'{"width":800,"height":600}'`.
        /// Anything that isn't json is taken as a window handle.
        arguments: Vec<String>,
    },
}

fn parse_argument(argument: &str) -> Value {
    serde_json::from_str(argument).unwrap_or_else(|_| Value::String(argument.to_owned()))
}

fn render(result: &handle_size::Result) -> serde_json::Result<String> {
    match result {
        handle_size::Result::Size(size) => serde_json::to_string(size),
        handle_size::Result::Acknowledged(value) => Ok(value.to_string()),
    }
}

#[tokio::main]
pub async fn main() -> Result<(), json_wire::Error> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Command::WindowHandleSize { dry_run, arguments } => {
            let arguments: Vec<Value> = arguments
                .iter()
                .map(String::as_str)
                .map(parse_argument)
                .collect();
            let arguments = Arguments::from_positional(&arguments)?;

            if dry_run {
                let descriptor = handle_size::request(arguments)?;
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
                return Ok(());
            }

            let config = get_config()?;
            info!(url = %config.url, "connecting to remote end");
            let client = Client::new(HttpDispatcher::from_config(&config)?);

            let result = client.window_handle_size(arguments)?.await?;
            println!("{}", render(&result)?);
        }
    }

    Ok(())
}
