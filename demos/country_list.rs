//! Print the country list (ids for `ClientContactModel::country_id`).

use superfaktura::api::SuperFakturaClient;

#[tokio::main]
async fn main() -> superfaktura::Result<()> {
    tracing_subscriber::fmt::init();

    let client = SuperFakturaClient::from_env()?;
    let countries = client.countries().list().await?;
    println!("{countries:#}");
    Ok(())
}
