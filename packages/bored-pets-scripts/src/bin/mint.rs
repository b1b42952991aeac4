//! Mint one Bored Pet with the configured URI.

use bored_pets_scripts::{mint, script, Config, NearNft};
use tracing::info;

#[tokio::main]
async fn main() {
    bored_pets_scripts::init_tracing();

    let body = async {
        let config = Config::load()?;
        let contract = NearNft::connect(&config).await?;
        mint::mint_once(&contract, &config.token_uri).await
    };

    script::run(mint::FAILURE_PREFIX, body, &mut std::io::stdout(), || {
        info!("Mint script finished")
    })
    .await;
}
