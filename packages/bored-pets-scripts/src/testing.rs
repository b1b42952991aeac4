//! In-memory contract double for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use near_workspaces::AccountId;

use crate::contract::{MintReceipt, PetsNft, RentableNft};
use crate::events::TransferRecord;
use crate::Error;

#[derive(Default)]
struct State {
    owners: BTreeMap<u64, AccountId>,
    uris: BTreeMap<u64, String>,
    users: BTreeMap<u64, (AccountId, u64)>,
    last_token_id: u64,
    transfers: Vec<TransferRecord>,
}

/// Mirrors the mock contract's rules; `failing` makes every call revert.
pub(crate) struct FakeNft {
    signer: AccountId,
    now: u64,
    failure: Option<String>,
    state: Mutex<State>,
}

impl FakeNft {
    pub(crate) fn new(signer: &str) -> Self {
        Self {
            signer: signer.parse().unwrap(),
            now: 0,
            failure: None,
            state: Mutex::new(State::default()),
        }
    }

    pub(crate) fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Block time, in unix seconds, used by `user_of`.
    pub(crate) fn at_time(mut self, now: u64) -> Self {
        self.now = now;
        self
    }

    pub(crate) fn token_uri(&self, token_id: u64) -> Option<String> {
        self.state.lock().unwrap().uris.get(&token_id).cloned()
    }

    fn check(&self) -> Result<(), Error> {
        match &self.failure {
            Some(message) => Err(Error::Contract(message.clone())),
            None => Ok(()),
        }
    }

    fn insert(&self, token_id: u64, owner_id: &AccountId, uri: Option<&str>) -> Result<MintReceipt, Error> {
        let mut state = self.state.lock().unwrap();
        if state.owners.contains_key(&token_id) {
            return Err(Error::Contract(
                "Smart contract panicked: Token already exists".into(),
            ));
        }
        state.owners.insert(token_id, owner_id.clone());
        if let Some(uri) = uri {
            state.uris.insert(token_id, uri.to_string());
        }
        state.last_token_id = state.last_token_id.max(token_id);
        let transfer = TransferRecord {
            from: None,
            to: Some(owner_id.clone()),
            token_id,
        };
        state.transfers.push(transfer.clone());
        Ok(MintReceipt {
            token_id,
            transaction_hash: None,
            gas_burnt: 0,
            logs: Vec::new(),
            transfers: vec![transfer],
        })
    }
}

#[async_trait]
impl PetsNft for FakeNft {
    async fn mint(&self, token_uri: &str) -> Result<MintReceipt, Error> {
        self.check()?;
        let token_id = self.state.lock().unwrap().last_token_id + 1;
        self.insert(token_id, &self.signer, Some(token_uri))
    }

    async fn past_transfers(&self) -> Result<Vec<TransferRecord>, Error> {
        self.check()?;
        Ok(self.state.lock().unwrap().transfers.clone())
    }
}

#[async_trait]
impl RentableNft for FakeNft {
    async fn mint_token(&self, token_id: u64, owner_id: &AccountId) -> Result<MintReceipt, Error> {
        self.check()?;
        self.insert(token_id, owner_id, None)
    }

    async fn set_user(&self, token_id: u64, user: &AccountId, expires: u64) -> Result<(), Error> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        match state.owners.get(&token_id) {
            None => return Err(Error::Contract("Smart contract panicked: Token not found".into())),
            Some(owner) if owner != &self.signer => {
                return Err(Error::Contract(
                    "Smart contract panicked: Caller is not owner".into(),
                ))
            }
            Some(_) => {}
        }
        state.users.insert(token_id, (user.clone(), expires));
        Ok(())
    }

    async fn user_of(&self, token_id: u64) -> Result<Option<AccountId>, Error> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .get(&token_id)
            .filter(|(_, expires)| *expires >= self.now)
            .map(|(user, _)| user.clone()))
    }

    async fn owner_of(&self, token_id: u64) -> Result<Option<AccountId>, Error> {
        self.check()?;
        Ok(self.state.lock().unwrap().owners.get(&token_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::expect_sequential_mints;

    #[tokio::test]
    async fn fake_history_satisfies_mint_driver_checks() {
        let contract = FakeNft::new("carlos.near");
        contract.mint("TOKEN_URI1").await.unwrap();
        contract.mint("TOKEN_URI2").await.unwrap();

        let transfers = contract.past_transfers().await.unwrap();
        expect_sequential_mints(&transfers, &"carlos.near".parse().unwrap(), 2).unwrap();
    }

    #[tokio::test]
    async fn set_user_by_non_owner_is_rejected() {
        let contract = FakeNft::new("carlos.near");
        let maria: AccountId = "maria.near".parse().unwrap();
        contract.mint_token(1, &maria).await.unwrap();
        let err = contract.set_user(1, &maria, 10).await.unwrap_err();
        assert!(err.to_string().contains("Caller is not owner"), "{err}");
    }
}
