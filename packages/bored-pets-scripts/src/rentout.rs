//! Rent-out script: mint a token to the owner, rent it to a second account,
//! then report who holds which role.

use std::fmt;

use near_workspaces::AccountId;

use crate::contract::RentableNft;
use crate::verify::display_account;
use crate::Error;

pub const FAILURE_PREFIX: &str = "Uh oh! ";
pub const RENTED_TOKEN_ID: u64 = 1;

/// Roles read back after renting. Values are reported, not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalReport {
    pub renter: Option<AccountId>,
    pub rentee: Option<AccountId>,
}

impl fmt::Display for RentalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "renter: {}", display_account(self.renter.as_ref()))?;
        write!(f, "rentee: {}", display_account(self.rentee.as_ref()))
    }
}

pub async fn rent_out<C: RentableNft + ?Sized>(
    contract: &C,
    owner: &AccountId,
    user: &AccountId,
    expires: u64,
) -> Result<RentalReport, Error> {
    contract.mint_token(RENTED_TOKEN_ID, owner).await?;
    contract.set_user(RENTED_TOKEN_ID, user, expires).await?;

    let rentee = contract.user_of(RENTED_TOKEN_ID).await?;
    let renter = contract.owner_of(RENTED_TOKEN_ID).await?;
    Ok(RentalReport { renter, rentee })
}
