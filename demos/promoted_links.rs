//! Stream a campaign's enabled promoted links and yesterday's metrics.
//!
//! Run with: cargo run --example promoted_links -- <campaign-id>

use futures_util::StreamExt;

use amplify_rs::api::PromotedLinksQuery;
use amplify_rs::{AmplifyClient, CampaignId, Credentials, PromotedLinkId};

#[tokio::main]
async fn main() -> amplify_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let campaign = std::env::args()
        .nth(1)
        .map(CampaignId::from)
        .ok_or_else(|| amplify_rs::Error::InvalidInput("usage: promoted_links <campaign-id>".into()))?;

    let client = AmplifyClient::login(Credentials::from_env()?).await?;

    let mut stream = client
        .promoted_links()
        .for_campaign_stream(&campaign, PromotedLinksQuery::default().enabled(true));

    let mut link_ids = Vec::new();
    while let Some(link) = stream.next().await {
        let link = link?;
        println!("{:?} {:?}", link.id(), link.get_str("url"));
        if let Some(id) = link.id() {
            link_ids.push(PromotedLinkId::from(id));
        }
    }

    let daily = client
        .performance()
        .daily_for_promoted_links(&link_ids, None, None)
        .await?;
    for (link, days) in &daily {
        for (day, metrics) in days {
            println!(
                "{link} {day}: clicks={:?} cost={:?}",
                metrics.get_f64("clicks"),
                metrics.get_f64("cost")
            );
        }
    }

    Ok(())
}
