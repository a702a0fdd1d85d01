//! Campaigns service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::{fetch_per_id, MarketersService};
use crate::client::ClientInner;
use crate::models::{BudgetId, Campaign, CampaignId, MarketerId};
use crate::Result;

/// Query sent when listing a marketer's campaigns.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct MarketerCampaignsQuery {
    include_archived: bool,
}

const WITH_ARCHIVED: MarketerCampaignsQuery = MarketerCampaignsQuery {
    include_archived: true,
};

/// Service for campaign operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// // Every campaign id across every marketer
/// let ids = client.campaigns().all_ids().await?;
/// println!("{} campaigns", ids.len());
/// # Ok(())
/// # }
/// ```
pub struct CampaignsService {
    inner: Arc<ClientInner>,
}

impl CampaignsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single campaign.
    pub async fn get(&self, campaign_id: &CampaignId) -> Result<Campaign> {
        self.inner.get(&format!("campaigns/{}", campaign_id)).await
    }

    /// Campaigns of each marketer, archived ones included.
    ///
    /// Issues one request per marketer.
    pub async fn per_marketer(
        &self,
        marketer_ids: &[MarketerId],
    ) -> Result<BTreeMap<MarketerId, Vec<Campaign>>> {
        fetch_per_id(
            &self.inner,
            marketer_ids,
            marketer_campaigns_path,
            &WITH_ARCHIVED,
            "campaigns",
        )
        .await
    }

    /// Campaigns funded by each budget.
    ///
    /// Issues one request per budget.
    pub async fn per_budget(
        &self,
        budget_ids: &[BudgetId],
    ) -> Result<BTreeMap<BudgetId, Vec<Campaign>>> {
        fetch_per_id(
            &self.inner,
            budget_ids,
            |id| format!("budgets/{}/campaigns", id),
            &(),
            "campaigns",
        )
        .await
    }

    /// Every campaign id, walking marketers in list order and each
    /// marketer's campaigns (archived included) in turn.
    pub async fn all_ids(&self) -> Result<Vec<CampaignId>> {
        let marketer_ids = MarketersService::new(self.inner.clone()).all_ids().await?;

        let mut campaign_ids = Vec::new();
        for marketer_id in &marketer_ids {
            let campaigns: Vec<Campaign> = self
                .inner
                .get_envelope(&marketer_campaigns_path(marketer_id), &WITH_ARCHIVED, "campaigns")
                .await?;
            for campaign in &campaigns {
                campaign_ids.push(CampaignId::from(campaign.require_id("campaign")?));
            }
        }

        tracing::debug!(
            marketers = marketer_ids.len(),
            campaigns = campaign_ids.len(),
            "resolved campaign ids"
        );
        Ok(campaign_ids)
    }
}

fn marketer_campaigns_path(marketer_id: &MarketerId) -> String {
    format!("marketers/{}/campaigns", marketer_id)
}
