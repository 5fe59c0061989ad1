//! Diagnostic CLI: fetch a game object from a fullnode and print the board.
//!
//! Read-only. It never signs or submits transactions.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use solitaire_client::display::render_board;
use solitaire_client::ledger::dto::ObjectResponse;
use solitaire_client::ledger::rpc::RpcSnapshotReader;
use solitaire_client::{telemetry, ClientError, GameId, LedgerConfig, SnapshotSource};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "solitaire-client")]
#[command(about = "Inspect solitaire games stored on the ledger")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a game object and render its board
    Show {
        /// Object id of the game
        #[arg(long)]
        game: String,

        /// Override SOLITAIRE_RPC_URL
        #[arg(long)]
        rpc_url: Option<String>,
    },
    /// Render a saved `sui_getObject` result without touching the network
    Decode {
        /// Path to a JSON file holding the RPC `result` object
        #[arg(long)]
        file: PathBuf,
    },
}

async fn show(game: String, rpc_url: Option<String>) -> Result<String, ClientError> {
    let mut config = LedgerConfig::from_env()?;
    if let Some(url) = rpc_url {
        config.rpc_url = url;
    }
    info!(network = %config.network, rpc_url = %config.rpc_url, "fetching game");

    let reader = RpcSnapshotReader::new(&config)?;
    let game_id = GameId::new(game);
    let board = reader.fetch_authoritative_state(&game_id).await?;
    Ok(format!("Game {game_id}\n{}", render_board(&board)))
}

fn decode(file: PathBuf) -> Result<String, ClientError> {
    let raw = std::fs::read_to_string(&file)
        .map_err(|e| ClientError::config(format!("cannot read {}: {e}", file.display())))?;
    let response: ObjectResponse =
        serde_json::from_str(&raw).map_err(|e| ClientError::protocol(e.to_string()))?;
    let game_id = response
        .data
        .as_ref()
        .map(|d| GameId::new(d.object_id.clone()))
        .unwrap_or_else(|| GameId::new("unknown"));
    let board = response.into_board(&game_id)?;
    Ok(format!("Game {game_id}\n{}", render_board(&board)))
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err}");
    }
    let args = Args::parse();

    let result = match args.command {
        Command::Show { game, rpc_url } => show(game, rpc_url).await,
        Command::Decode { file } => decode(file),
    };

    match result {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.code(), error = %err, "command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
