use std::net::IpAddr;

use anyhow::Context;
use axum::http::StatusCode;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ridgeback_testing::webhook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Webhook {
            host,
            port,
            fail_with,
        } => {
            let fail_with = fail_with
                .map(StatusCode::from_u16)
                .transpose()
                .context("Invalid status code")?;
            webhook::start_server(host, port, fail_with).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the automation webhook testing server
    Webhook {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        /// Answer every delivery with this status code instead of 200
        #[arg(long)]
        fail_with: Option<u16>,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
