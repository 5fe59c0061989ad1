//! Read-only JSON-RPC access to a Sui fullnode.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::dto::ObjectResponse;
use super::{GameId, LedgerError, SnapshotSource};
use crate::config::LedgerConfig;
use crate::domain::BoardState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

/// Fetches game objects with `sui_getObject`.
///
/// Implements only the snapshot half of the ledger contract; signing and
/// submission belong to the host wallet.
#[derive(Debug, Clone)]
pub struct RpcSnapshotReader {
    http: reqwest::Client,
    rpc_url: String,
}

impl RpcSnapshotReader {
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            rpc_url: config.rpc_url.clone(),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn call<T>(&self, method: &str, params: serde_json::Value) -> Result<T, LedgerError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };
        debug!(method, url = %self.rpc_url, "ledger rpc request");

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: RpcResponse<T> = response.json().await?;

        match (body.result, body.error) {
            (_, Some(err)) => Err(LedgerError::Transport(format!(
                "rpc error {}: {}",
                err.code, err.message
            ))),
            (Some(result), None) => Ok(result),
            (None, None) => Err(LedgerError::Decode(format!("{method}: empty rpc response"))),
        }
    }
}

/// Params for `sui_getObject` with the parsed Move content included.
pub fn get_object_params(game_id: &GameId) -> serde_json::Value {
    json!([game_id.as_str(), {"showContent": true, "showType": true}])
}

#[async_trait]
impl SnapshotSource for RpcSnapshotReader {
    async fn fetch_authoritative_state(&self, game_id: &GameId) -> Result<BoardState, LedgerError> {
        let response: ObjectResponse = self.call("sui_getObject", get_object_params(game_id)).await?;
        response.into_board(game_id)
    }
}
