//! Promoted links service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::CampaignsService;
use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{CampaignId, PromotedLink};
use crate::Result;

/// Filters for listing a campaign's promoted links.
///
/// Both filters are optional: `enabled: None` sends no `enabled` parameter
/// at all, and an empty `statuses` list sends no `statuses` parameter.
///
/// # Example
///
/// ```
/// use amplify_rs::api::PromotedLinksQuery;
///
/// let query = PromotedLinksQuery::default()
///     .enabled(true)
///     .statuses(["APPROVED", "PENDING"]);
/// ```
#[derive(Debug, Default, Clone, Serialize)]
pub struct PromotedLinksQuery {
    /// Only enabled (`true`) or only disabled (`false`) links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Review statuses to include, sent comma-separated
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "comma_separated"
    )]
    pub statuses: Vec<String>,
}

impl PromotedLinksQuery {
    /// Restrict to enabled or disabled links.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Restrict to the given review statuses.
    pub fn statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }
}

fn comma_separated<S>(values: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}

/// Service for promoted link operations.
///
/// # Example
///
/// ```no_run
/// use amplify_rs::{api::PromotedLinksQuery, CampaignId};
///
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// let campaign = CampaignId::new("00f4b02153ee75f3c9dc4fc128ab0419ab");
/// let links = client
///     .promoted_links()
///     .for_campaign(&campaign, PromotedLinksQuery::default().enabled(true))
///     .await?;
/// println!("{} enabled links", links.len());
/// # Ok(())
/// # }
/// ```
pub struct PromotedLinksService {
    inner: Arc<ClientInner>,
}

impl PromotedLinksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream a campaign's promoted links page by page.
    pub fn for_campaign_stream(
        &self,
        campaign_id: &CampaignId,
        query: PromotedLinksQuery,
    ) -> PaginatedStream<PromotedLink> {
        let path = format!("campaigns/{}/promotedLinks", campaign_id);
        PaginatedStreamBuilder::<PromotedLink>::new(self.inner.clone(), path, "promotedLinks")
            .build_with_query(Some(query))
    }

    /// All of a campaign's promoted links.
    pub async fn for_campaign(
        &self,
        campaign_id: &CampaignId,
        query: PromotedLinksQuery,
    ) -> Result<Vec<PromotedLink>> {
        self.for_campaign_stream(campaign_id, query).collect_all().await
    }

    /// Promoted links of several campaigns, keyed by campaign.
    ///
    /// With `None` (or an empty slice) every campaign id is resolved first
    /// through [`CampaignsService::all_ids`]. Campaigns are fetched one after
    /// another with the same filters.
    pub async fn per_campaign(
        &self,
        campaign_ids: Option<&[CampaignId]>,
        query: PromotedLinksQuery,
    ) -> Result<BTreeMap<CampaignId, Vec<PromotedLink>>> {
        let resolved;
        let campaign_ids = match campaign_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => {
                resolved = CampaignsService::new(self.inner.clone()).all_ids().await?;
                resolved.as_slice()
            }
        };

        let mut links = BTreeMap::new();
        for campaign_id in campaign_ids {
            let campaign_links = self.for_campaign(campaign_id, query.clone()).await?;
            links.insert(campaign_id.clone(), campaign_links);
        }
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_query_sends_nothing() {
        let value = serde_json::to_value(PromotedLinksQuery::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_enabled_tri_state() {
        let on = serde_json::to_value(PromotedLinksQuery::default().enabled(true)).unwrap();
        assert_eq!(on, json!({"enabled": true}));

        let off = serde_json::to_value(PromotedLinksQuery::default().enabled(false)).unwrap();
        assert_eq!(off, json!({"enabled": false}));
    }

    #[test]
    fn test_statuses_are_comma_joined() {
        let query = PromotedLinksQuery::default().statuses(["ACTIVE", "PAUSED"]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"statuses": "ACTIVE,PAUSED"})
        );
    }
}
