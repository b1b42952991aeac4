//! Mint token 1 to the signer, rent it to `rentee_id`, print both roles.

use bored_pets_scripts::{rentout, script, Config, Error, NearNft};
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    bored_pets_scripts::init_tracing();

    // Accepted for task-runner compatibility; nothing reads them.
    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(?args, "Ignoring positional arguments");

    let body = async {
        let config = Config::load()?;
        let contract = NearNft::connect(&config).await?;
        let expires = script::rental_expiry(script::unix_now(), config.rental_secs);
        info!(
            contract = %contract.contract_id(),
            owner = %contract.signer_id(),
            user = %config.rentee_id,
            expires,
            "Renting out token"
        );
        let report =
            rentout::rent_out(&contract, contract.signer_id(), &config.rentee_id, expires).await?;
        Ok::<_, Error>(report.to_string())
    };

    script::run(rentout::FAILURE_PREFIX, body, &mut std::io::stdout(), || {
        info!("Rent-out script finished")
    })
    .await;
}
