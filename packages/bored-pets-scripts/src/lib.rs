//! Bored Pets drivers: mint and rent-out scripts over the NFT contract ABI.

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod events;
pub mod mint;
pub mod rentout;
pub mod script;
pub mod verify;

#[cfg(test)]
pub(crate) mod testing;

pub use client::NearNft;
pub use config::{Config, Network};
pub use contract::{MintReceipt, PetsNft, RentableNft};
pub use error::Error;
pub use events::{decode_transfers, TransferRecord};
pub use rentout::RentalReport;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the fmt subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
