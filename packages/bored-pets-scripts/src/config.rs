//! Driver configuration.

use std::path::PathBuf;

use config::builder::DefaultState;
use config::ConfigBuilder;
use near_workspaces::AccountId;
use serde::Deserialize;

use crate::Error;

/// Optional config file, looked up in the working directory (any format `config` understands).
pub const CONFIG_FILE: &str = "bored-pets";
/// Environment prefix, e.g. `BORED_PETS_CONTRACT_ID`.
pub const ENV_PREFIX: &str = "BORED_PETS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Mainnet,
    /// Any RPC endpoint given by `rpc_url` (localnet, a private node).
    Custom,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
            Network::Custom => "custom",
        }
    }
}

/// Configuration shared by the `mint` and `rentout` drivers.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::network")]
    pub network: Network,

    #[serde(default)]
    pub rpc_url: Option<String>,

    #[serde(default = "defaults::contract_id")]
    pub contract_id: AccountId,

    /// Account that signs every transaction (accounts[0]).
    #[serde(default = "defaults::signer_id")]
    pub signer_id: AccountId,

    /// near-cli credentials file for `signer_id`.
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,

    /// Account receiving the rental user role (accounts[1]).
    #[serde(default = "defaults::rentee_id")]
    pub rentee_id: AccountId,

    #[serde(default = "defaults::token_uri")]
    pub token_uri: String,

    #[serde(default = "defaults::rental_secs")]
    pub rental_secs: u64,

    #[serde(default = "defaults::gas_tgas")]
    pub gas_tgas: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: defaults::network(),
            rpc_url: None,
            contract_id: defaults::contract_id(),
            signer_id: defaults::signer_id(),
            credentials_path: None,
            rentee_id: defaults::rentee_id(),
            token_uri: defaults::token_uri(),
            rental_secs: defaults::rental_secs(),
            gas_tgas: defaults::gas_tgas(),
        }
    }
}

impl Config {
    /// Load from `bored-pets.{toml,json,..}` (optional) overlaid with `BORED_PETS_*` env vars.
    pub fn load() -> Result<Self, Error> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name(CONFIG_FILE).required(false))
                .add_source(env_source()),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, Error> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Explicit `credentials_path`, else `~/.near-credentials/<network>/<signer_id>.json`.
    pub fn credentials_file(&self) -> Result<PathBuf, Error> {
        if let Some(path) = &self.credentials_path {
            return Ok(path.clone());
        }
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("cannot resolve home directory".into()))?;
        Ok(home
            .join(".near-credentials")
            .join(self.network.as_str())
            .join(format!("{}.json", self.signer_id)))
    }

    /// RPC endpoint for `Network::Custom`.
    pub fn custom_rpc_url(&self) -> Result<&str, Error> {
        match self.rpc_url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(Error::Config("network = \"custom\" requires rpc_url".into())),
        }
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

mod defaults {
    use near_workspaces::AccountId;

    use super::Network;

    pub fn network() -> Network {
        Network::Testnet
    }

    pub fn contract_id() -> AccountId {
        "bored-pets.testnet".parse().expect("valid account id")
    }

    pub fn signer_id() -> AccountId {
        "carlos.testnet".parse().expect("valid account id")
    }

    pub fn rentee_id() -> AccountId {
        "maria.testnet".parse().expect("valid account id")
    }

    pub fn token_uri() -> String {
        "TOKEN_URI".into()
    }

    pub fn rental_secs() -> u64 {
        1000
    }

    pub fn gas_tgas() -> u64 {
        30
    }
}
