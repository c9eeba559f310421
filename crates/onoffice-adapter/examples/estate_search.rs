/*
[INPUT]:  ONOFFICE_API_TOKEN / ONOFFICE_API_SECRET from env or .env
[OUTPUT]: Pretty-printed estate search result
[POS]:    Examples - one authenticated estate search
[UPDATE]: When the search API or credential loading changes
*/

use anyhow::{Context, Result};
use onoffice_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: search estates under 300k, cheapest first
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = std::env::var("ONOFFICE_API_TOKEN").context("ONOFFICE_API_TOKEN must be set")?;
    let secret = std::env::var("ONOFFICE_API_SECRET").context("ONOFFICE_API_SECRET must be set")?;

    let client = OnOfficeClient::new(token, secret).context("create client")?;

    let query = SearchQuery::new()
        .fields(["Id", "kaufpreis", "lage"])
        .filter(
            Filter::new()
                .with("status", Condition::equals(1))
                .with("kaufpreis", Condition::less_than(300_000)),
        )
        .sort_by("kaufpreis", SortOrder::Asc)
        .limit(10);

    match client.estate().search(query).await {
        Ok(response) => {
            println!("API Response:");
            println!("{}", serde_json::to_string_pretty(response.as_value())?);
        }
        Err(e) => println!("An error occurred: {e}"),
    }

    Ok(())
}
