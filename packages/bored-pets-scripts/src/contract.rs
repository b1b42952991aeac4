//! Contract seam: the calls the drivers make, independent of transport.

use async_trait::async_trait;
use near_workspaces::AccountId;

use crate::events::TransferRecord;
use crate::Error;

/// Printable projection of a mint transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub token_id: u64,
    pub transaction_hash: Option<String>,
    pub gas_burnt: u64,
    pub logs: Vec<String>,
    pub transfers: Vec<TransferRecord>,
}

/// Sequential-id minting (`mint(uri)`) plus the `Transfer` history.
#[async_trait]
pub trait PetsNft: Send + Sync {
    /// Mint the next token to the signer.
    async fn mint(&self, token_uri: &str) -> Result<MintReceipt, Error>;

    /// Every transfer observed since this handle was created, oldest first.
    async fn past_transfers(&self) -> Result<Vec<TransferRecord>, Error>;
}

/// ERC-4907 style rental on top of explicit-id minting.
#[async_trait]
pub trait RentableNft: Send + Sync {
    async fn mint_token(&self, token_id: u64, owner_id: &AccountId) -> Result<MintReceipt, Error>;

    /// Grant `user` the rental role until `expires` (unix seconds).
    async fn set_user(&self, token_id: u64, user: &AccountId, expires: u64) -> Result<(), Error>;

    async fn user_of(&self, token_id: u64) -> Result<Option<AccountId>, Error>;

    async fn owner_of(&self, token_id: u64) -> Result<Option<AccountId>, Error>;
}
