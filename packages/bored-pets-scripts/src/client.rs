//! `near-workspaces` backed contract client.

use std::sync::Mutex;

use async_trait::async_trait;
use near_workspaces::result::ExecutionSuccess;
use near_workspaces::types::Gas;
use near_workspaces::{Account, AccountId};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::{Config, Network};
use crate::contract::{MintReceipt, PetsNft, RentableNft};
use crate::events::{decode_transfers, TransferRecord};
use crate::Error;

const DEFAULT_GAS_TGAS: u64 = 30;

/// Contract handle: a signer account plus the target contract id.
///
/// Every transfer decoded from a transaction sent through this handle is
/// appended to an in-memory journal, which backs `past_transfers`.
pub struct NearNft {
    signer: Account,
    contract_id: AccountId,
    gas: Gas,
    journal: Mutex<Vec<TransferRecord>>,
}

impl NearNft {
    pub fn new(signer: Account, contract_id: AccountId) -> Self {
        Self {
            signer,
            contract_id,
            gas: Gas::from_tgas(DEFAULT_GAS_TGAS),
            journal: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    /// Connect to the configured network and load the signer's credentials.
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        let path = config.credentials_file()?;
        let loaded = match config.network {
            Network::Testnet => {
                let worker = near_workspaces::testnet().await.map_err(rpc_error)?;
                Account::from_file(&path, &worker)
            }
            Network::Mainnet => {
                let worker = near_workspaces::mainnet().await.map_err(rpc_error)?;
                Account::from_file(&path, &worker)
            }
            Network::Custom => {
                let worker = near_workspaces::custom(config.custom_rpc_url()?)
                    .await
                    .map_err(rpc_error)?;
                Account::from_file(&path, &worker)
            }
        };
        let signer = loaded.map_err(|e| {
            Error::Config(format!(
                "cannot load credentials from {}: {e}",
                path.display()
            ))
        })?;

        if signer.id() != &config.signer_id {
            warn!(
                configured = %config.signer_id,
                loaded = %signer.id(),
                "Credentials file belongs to a different account, signing as loaded account"
            );
        }
        info!(
            network = config.network.as_str(),
            contract = %config.contract_id,
            signer = %signer.id(),
            "Connected"
        );

        Ok(Self::new(signer, config.contract_id.clone()).with_gas(configured_gas(config)))
    }

    pub fn signer_id(&self) -> &AccountId {
        self.signer.id()
    }

    pub fn contract_id(&self) -> &AccountId {
        &self.contract_id
    }

    async fn transact(
        &self,
        method: &str,
        args: Value,
    ) -> Result<(ExecutionSuccess, Vec<TransferRecord>), Error> {
        debug!(method, %args, contract = %self.contract_id, "Sending transaction");
        let outcome = self
            .signer
            .call(&self.contract_id, method)
            .args_json(args)
            .gas(self.gas)
            .transact()
            .await
            .map_err(|e| Error::Rpc(format!("{method}: {e}")))?;
        let success = outcome
            .into_result()
            .map_err(|e| Error::Contract(format!("{method} failed: {e:?}")))?;

        let logs = success.logs();
        let transfers = journal_entries(method, logs.as_slice());
        self.journal
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(transfers.iter().cloned());
        Ok((success, transfers))
    }

    async fn view<T: DeserializeOwned>(&self, method: &str, args: Value) -> Result<T, Error> {
        self.signer
            .view(&self.contract_id, method)
            .args_json(args)
            .await
            .map_err(|e| Error::Rpc(format!("{method}: {e}")))?
            .json()
            .map_err(|e| Error::Contract(format!("{method} returned unexpected data: {e}")))
    }
}

fn receipt(token_id: u64, success: &ExecutionSuccess, transfers: Vec<TransferRecord>) -> MintReceipt {
    MintReceipt {
        token_id,
        transaction_hash: Some(success.outcome().transaction_hash.to_string()),
        gas_burnt: success.total_gas_burnt.as_gas(),
        logs: success.logs().into_iter().map(String::from).collect(),
        transfers,
    }
}

fn configured_gas(config: &Config) -> Gas {
    Gas::from_tgas(config.gas_tgas)
}

/// Transfers to journal for a committed transaction. A log that fails to
/// decode is reported but does not turn the committed call into an error.
fn journal_entries(method: &str, logs: &[&str]) -> Vec<TransferRecord> {
    decode_transfers(logs).unwrap_or_else(|e| {
        warn!(method, error = %e, "Transaction committed but its events did not decode");
        Vec::new()
    })
}

fn rpc_error(e: near_workspaces::error::Error) -> Error {
    Error::Rpc(e.to_string())
}

#[async_trait]
impl PetsNft for NearNft {
    async fn mint(&self, token_uri: &str) -> Result<MintReceipt, Error> {
        let (success, transfers) = self
            .transact("mint", json!({ "token_uri": token_uri }))
            .await?;
        let token_id: String = success
            .json()
            .map_err(|e| Error::Contract(format!("mint returned unexpected data: {e}")))?;
        let token_id: u64 = token_id
            .parse()
            .map_err(|_| Error::Contract(format!("mint returned non-numeric id {token_id:?}")))?;
        info!(token_id, uri = token_uri, "Minted");
        Ok(receipt(token_id, &success, transfers))
    }

    async fn past_transfers(&self) -> Result<Vec<TransferRecord>, Error> {
        Ok(self.journal.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

#[async_trait]
impl RentableNft for NearNft {
    async fn mint_token(&self, token_id: u64, owner_id: &AccountId) -> Result<MintReceipt, Error> {
        let (success, transfers) = self
            .transact(
                "mint_token",
                json!({ "token_id": token_id.to_string(), "owner_id": owner_id }),
            )
            .await?;
        info!(token_id, owner = %owner_id, "Minted");
        Ok(receipt(token_id, &success, transfers))
    }

    async fn set_user(&self, token_id: u64, user: &AccountId, expires: u64) -> Result<(), Error> {
        self.transact(
            "set_user",
            json!({
                "token_id": token_id.to_string(),
                "user": user,
                "expires": expires.to_string(),
            }),
        )
        .await?;
        info!(token_id, user = %user, expires, "User set");
        Ok(())
    }

    async fn user_of(&self, token_id: u64) -> Result<Option<AccountId>, Error> {
        self.view("user_of", json!({ "token_id": token_id.to_string() }))
            .await
    }

    async fn owner_of(&self, token_id: u64) -> Result<Option<AccountId>, Error> {
        self.view("owner_of", json!({ "token_id": token_id.to_string() }))
            .await
    }
}
