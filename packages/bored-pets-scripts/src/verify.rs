//! Assertions on `Transfer` history used by the mint test driver.

use near_workspaces::AccountId;

use crate::events::TransferRecord;
use crate::Error;

/// Check one record is a mint of `expected_token_id` to `expected_account`.
pub fn expect_mint_transfer(
    record: &TransferRecord,
    expected_account: &AccountId,
    expected_token_id: u64,
) -> Result<(), Error> {
    if let Some(from) = &record.from {
        return Err(Error::Mismatch(format!(
            "From is not zero address: got {from}"
        )));
    }
    if record.to.as_ref() != Some(expected_account) {
        return Err(Error::Mismatch(format!(
            "To is not first account: expected {expected_account}, got {}",
            display_account(record.to.as_ref())
        )));
    }
    if record.token_id != expected_token_id {
        return Err(Error::Mismatch(format!(
            "TokenId was not incremented: expected {expected_token_id}, got {}",
            record.token_id
        )));
    }
    Ok(())
}

/// Check `records` are exactly `count` mints to `account` with ids `1..=count`.
pub fn expect_sequential_mints(
    records: &[TransferRecord],
    account: &AccountId,
    count: usize,
) -> Result<(), Error> {
    if records.len() != count {
        return Err(Error::Mismatch(format!(
            "expected {count} Transfer events, got {}",
            records.len()
        )));
    }
    for (record, token_id) in records.iter().zip(1u64..) {
        expect_mint_transfer(record, account, token_id)?;
    }
    Ok(())
}

pub(crate) fn display_account(account: Option<&AccountId>) -> String {
    account.map_or_else(|| "<none>".to_string(), |id| id.to_string())
}
