//! List every campaign of every marketer.
//!
//! Credentials are read from AMPLIFY_USER, AMPLIFY_PASSWORD and
//! (optionally) AMPLIFY_BASE_URL.
//!
//! Run with: cargo run --example list_campaigns

use amplify_rs::{AmplifyClient, Credentials};

#[tokio::main]
async fn main() -> amplify_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = AmplifyClient::login(Credentials::from_env()?).await?;
    println!("Logged in to {}", client.session().base_url());

    let marketer_ids = client.marketers().all_ids().await?;
    println!("\nFound {} marketer(s):", marketer_ids.len());

    let campaigns = client.campaigns().per_marketer(&marketer_ids).await?;
    for (marketer, campaigns) in &campaigns {
        println!("  - {} ({} campaigns)", marketer, campaigns.len());
        for campaign in campaigns {
            println!(
                "      {} {}",
                campaign.id().unwrap_or_default(),
                campaign.get_str("name").unwrap_or("(unnamed)")
            );
        }
    }

    let budgets = client.budgets().per_marketer(&marketer_ids).await?;
    let total: usize = budgets.values().map(Vec::len).sum();
    println!("\n{} budget(s) in total", total);

    Ok(())
}
