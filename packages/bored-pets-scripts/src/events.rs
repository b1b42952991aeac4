//! NEP-171 event decoding into ERC-721 style `Transfer` records.

use near_workspaces::AccountId;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;

pub const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";
pub const NEP171_STANDARD: &str = "nep171";

/// One token changing hands. `from == None` is a mint, `to == None` a burn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub from: Option<AccountId>,
    pub to: Option<AccountId>,
    pub token_id: u64,
}

impl TransferRecord {
    pub fn is_mint(&self) -> bool {
        self.from.is_none()
    }
}

#[derive(Deserialize)]
struct Nep171Envelope {
    event: String,
    data: Vec<Value>,
}

#[derive(Deserialize)]
struct MintData {
    owner_id: AccountId,
    token_ids: Vec<String>,
}

#[derive(Deserialize)]
struct TransferData {
    old_owner_id: AccountId,
    new_owner_id: AccountId,
    token_ids: Vec<String>,
}

#[derive(Deserialize)]
struct BurnData {
    owner_id: AccountId,
    token_ids: Vec<String>,
}

/// Decode every NEP-171 ownership change in `logs`, in log order.
///
/// Plain logs and events of other standards are skipped; a NEP-171 event
/// with a malformed payload is an error.
pub fn decode_transfers<S: AsRef<str>>(logs: &[S]) -> Result<Vec<TransferRecord>, Error> {
    let mut records = Vec::new();
    for log in logs {
        let Some(json_str) = log.as_ref().strip_prefix(EVENT_JSON_PREFIX) else {
            continue;
        };
        let Ok(value) = serde_json::from_str::<Value>(json_str) else {
            continue;
        };
        if value.get("standard").and_then(Value::as_str) != Some(NEP171_STANDARD) {
            continue;
        }
        let event: Nep171Envelope = serde_json::from_value(value)
            .map_err(|e| Error::Event(format!("malformed nep171 event: {e}")))?;
        for item in event.data {
            decode_item(&event.event, item, &mut records)?;
        }
    }
    Ok(records)
}

fn decode_item(event: &str, item: Value, out: &mut Vec<TransferRecord>) -> Result<(), Error> {
    match event {
        "nft_mint" => {
            let data: MintData = parse_data(event, item)?;
            for id in &data.token_ids {
                out.push(TransferRecord {
                    from: None,
                    to: Some(data.owner_id.clone()),
                    token_id: parse_token_id(id)?,
                });
            }
        }
        "nft_transfer" => {
            let data: TransferData = parse_data(event, item)?;
            for id in &data.token_ids {
                out.push(TransferRecord {
                    from: Some(data.old_owner_id.clone()),
                    to: Some(data.new_owner_id.clone()),
                    token_id: parse_token_id(id)?,
                });
            }
        }
        "nft_burn" => {
            let data: BurnData = parse_data(event, item)?;
            for id in &data.token_ids {
                out.push(TransferRecord {
                    from: Some(data.owner_id.clone()),
                    to: None,
                    token_id: parse_token_id(id)?,
                });
            }
        }
        // Metadata updates and the like carry no ownership change.
        _ => {}
    }
    Ok(())
}

fn parse_data<T: for<'de> Deserialize<'de>>(event: &str, item: Value) -> Result<T, Error> {
    serde_json::from_value(item).map_err(|e| Error::Event(format!("malformed {event} data: {e}")))
}

fn parse_token_id(id: &str) -> Result<u64, Error> {
    id.parse()
        .map_err(|_| Error::Event(format!("token id {id:?} is not numeric")))
}
