// =============================================================================
// Mint Driver Integration Tests
// =============================================================================
// Mint twice through the contract client and check the Transfer history:
// event i is a mint (no `from`) to the minting account with token id i + 1.
//
// Needs the near-sandbox binary and MOCK_BORED_PETS_WASM_PATH (or the
// cargo-near default output). Run: cargo test -p bored-pets-integration-tests -- --ignored

use anyhow::Result;
use bored_pets_scripts::verify::{expect_mint_transfer, expect_sequential_mints};
use bored_pets_scripts::{mint, script, NearNft, PetsNft};
use serde_json::json;

use crate::utils::{deploy_contract, deploy_mock_bored_pets, get_wasm_path, setup_sandbox, MOCK_BORED_PETS};

#[tokio::test]
#[ignore = "needs near-sandbox and the mock-bored-pets wasm"]
async fn test_mint_twice_increments_token_id() -> Result<()> {
    let worker = setup_sandbox().await?;
    let contract = deploy_mock_bored_pets(&worker).await?;
    let minter = worker.dev_create_account().await?;
    let pets = NearNft::new(minter.clone(), contract.id().clone());

    pets.mint("TOKEN_URI1").await?;
    pets.mint("TOKEN_URI2").await?;

    let events = pets.past_transfers().await?;
    assert_eq!(events.len(), 2, "expected two Transfer events: {events:?}");
    expect_mint_transfer(&events[0], minter.id(), 1)?;
    expect_mint_transfer(&events[1], minter.id(), 2)?;
    expect_sequential_mints(&events, minter.id(), 2)?;

    let uri: Option<String> = contract
        .view("token_uri")
        .args_json(json!({ "token_id": "2" }))
        .await?
        .json()?;
    assert_eq!(uri.as_deref(), Some("TOKEN_URI2"));
    Ok(())
}

#[tokio::test]
#[ignore = "needs near-sandbox and the mock-bored-pets wasm"]
async fn test_mint_script_prints_receipt() -> Result<()> {
    let worker = setup_sandbox().await?;
    let contract = deploy_mock_bored_pets(&worker).await?;
    let minter = worker.dev_create_account().await?;
    let pets = NearNft::new(minter, contract.id().clone());

    let mut out = Vec::new();
    let mut completed = false;
    script::run(
        mint::FAILURE_PREFIX,
        async move { mint::mint_once(&pets, "TOKEN_URI").await },
        &mut out,
        || completed = true,
    )
    .await;

    let out = String::from_utf8(out)?;
    assert!(out.starts_with("MintReceipt {"), "unexpected output: {out}");
    assert!(out.contains("token_id: 1"), "unexpected output: {out}");
    assert!(out.contains("nft_mint"), "receipt should carry the event log: {out}");
    assert!(completed);
    Ok(())
}

#[tokio::test]
#[ignore = "needs near-sandbox and the mock-bored-pets wasm"]
async fn test_mint_script_reports_failure_with_doh() -> Result<()> {
    let worker = setup_sandbox().await?;
    // Deployed but never initialized: every call reverts.
    let contract = deploy_contract(&worker, &get_wasm_path(MOCK_BORED_PETS)).await?;
    let minter = worker.dev_create_account().await?;
    let pets = NearNft::new(minter, contract.id().clone());

    let mut out = Vec::new();
    let mut completed = false;
    script::run(
        mint::FAILURE_PREFIX,
        async move { mint::mint_once(&pets, "TOKEN_URI").await },
        &mut out,
        || completed = true,
    )
    .await;

    let out = String::from_utf8(out)?;
    assert!(out.starts_with("Doh! contract error: mint failed"), "unexpected output: {out}");
    assert!(completed);
    Ok(())
}
