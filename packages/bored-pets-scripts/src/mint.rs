//! Mint script: one `mint` with a fixed URI, print the receipt.

use crate::contract::PetsNft;
use crate::Error;

pub const FAILURE_PREFIX: &str = "Doh! ";

/// Mint one token and render the receipt for printing.
pub async fn mint_once<C: PetsNft + ?Sized>(contract: &C, token_uri: &str) -> Result<String, Error> {
    let receipt = contract.mint(token_uri).await?;
    Ok(format!("{receipt:#?}"))
}
