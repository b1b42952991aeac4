//! Minimal NEP-171 Mock NFT with a Rental User Role
//!
//! Implements only the methods the Bored Pets drivers call:
//! - mint (sequential ids, owner = caller)
//! - mint_token (caller-chosen id and owner)
//! - set_user / user_of / user_expires (ERC-4907 style rental)
//! - owner_of / token_uri / nft_total_supply (views)

mod events;


use near_sdk::json_types::U64;
use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, PanicOnDefault};

const NANOS_PER_SEC: u64 = 1_000_000_000;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct UserInfo {
    pub user: AccountId,
    /// Unix timestamp in seconds.
    pub expires: u64,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockBoredPets {
    owners: LookupMap<u64, AccountId>,
    token_uris: LookupMap<u64, String>,
    users: LookupMap<u64, UserInfo>,
    /// Highest id issued so far; the next `mint` takes `last_token_id + 1`.
    last_token_id: u64,
    total_supply: u64,
}

#[near]
impl MockBoredPets {
    #[init]
    pub fn new() -> Self {
        Self {
            owners: LookupMap::new(b"o"),
            token_uris: LookupMap::new(b"u"),
            users: LookupMap::new(b"r"),
            last_token_id: 0,
            total_supply: 0,
        }
    }

    // =========================================================================
    // Minting
    // =========================================================================

    /// Mint the next sequential token to the caller.
    pub fn mint(&mut self, token_uri: String) -> U64 {
        let token_id = self.last_token_id + 1;
        let owner_id = env::predecessor_account_id();
        self.internal_mint(token_id, owner_id, Some(token_uri));
        U64(token_id)
    }

    /// Mint a specific token id to `owner_id`.
    pub fn mint_token(&mut self, token_id: U64, owner_id: AccountId) {
        self.internal_mint(token_id.0, owner_id, None);
    }

    // =========================================================================
    // Rental
    // =========================================================================

    pub fn set_user(&mut self, token_id: U64, user: AccountId, expires: U64) {
        let owner_id = self
            .owners
            .get(&token_id.0)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        if owner_id != &env::predecessor_account_id() {
            env::panic_str("Caller is not owner");
        }

        events::emit_update_user(&token_id.0.to_string(), user.as_str(), expires.0);
        self.users.insert(
            token_id.0,
            UserInfo {
                user,
                expires: expires.0,
            },
        );
    }

    /// Current user, or `None` once the rental has expired.
    pub fn user_of(&self, token_id: U64) -> Option<AccountId> {
        let now = env::block_timestamp() / NANOS_PER_SEC;
        self.users
            .get(&token_id.0)
            .filter(|info| info.expires >= now)
            .map(|info| info.user.clone())
    }

    pub fn user_expires(&self, token_id: U64) -> U64 {
        U64(self.users.get(&token_id.0).map(|info| info.expires).unwrap_or(0))
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn owner_of(&self, token_id: U64) -> Option<AccountId> {
        self.owners.get(&token_id.0).cloned()
    }

    pub fn token_uri(&self, token_id: U64) -> Option<String> {
        self.token_uris.get(&token_id.0).cloned()
    }

    pub fn nft_total_supply(&self) -> U64 {
        U64(self.total_supply)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn internal_mint(&mut self, token_id: u64, owner_id: AccountId, token_uri: Option<String>) {
        if self.owners.contains_key(&token_id) {
            env::panic_str("Token already exists");
        }

        events::emit_mint(owner_id.as_str(), &[token_id.to_string()]);
        self.owners.insert(token_id, owner_id);
        if let Some(uri) = token_uri {
            self.token_uris.insert(token_id, uri);
        }
        self.last_token_id = self.last_token_id.max(token_id);
        self.total_supply += 1;
    }
}
