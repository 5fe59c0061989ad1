use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Sui network the ledger package is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Localnet,
    Devnet,
    Testnet,
    Mainnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Localnet => "localnet",
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    /// Public fullnode endpoint for the network.
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Localnet => "http://127.0.0.1:9000",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "localnet" => Ok(Network::Localnet),
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(ClientError::config(format!(
                "SUI_NETWORK must be one of localnet, devnet, testnet, mainnet, got '{other}'"
            ))),
        }
    }
}

/// Where the solitaire package lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub rpc_url: String,
    pub package_address: String,
    pub network: Network,
}

impl LedgerConfig {
    pub fn new(
        rpc_url: impl Into<String>,
        package_address: impl Into<String>,
        network: Network,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            package_address: package_address.into(),
            network,
        }
    }

    /// Load from `SOLITAIRE_RPC_URL`, `SOLITAIRE_PACKAGE_ADDRESS` and `SUI_NETWORK`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`LedgerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("SUI_NETWORK") {
            Some(raw) => raw.parse()?,
            None => Network::default(),
        };
        let package_address = must_var(&lookup, "SOLITAIRE_PACKAGE_ADDRESS")?;
        if !package_address.starts_with("0x") {
            return Err(ClientError::config(format!(
                "SOLITAIRE_PACKAGE_ADDRESS must be a 0x-prefixed address, got '{package_address}'"
            )));
        }
        let rpc_url = lookup("SOLITAIRE_RPC_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| network.default_rpc_url().to_string());

        Ok(Self {
            rpc_url,
            package_address,
            network,
        })
    }

    /// Fully-qualified target for a function of the `solitaire` module.
    pub fn move_target(&self, function: &str) -> String {
        format!("{}::solitaire::{function}", self.package_address)
    }

    /// Event type tag emitted when a hidden card is turned over.
    pub fn card_revealed_event(&self) -> String {
        self.move_target("CardRevealed")
    }
}

/// Get required variable or return error
fn must_var<F>(lookup: &F, name: &str) -> Result<String, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ClientError::config(format!("Required environment variable '{name}' is not set")))
}
