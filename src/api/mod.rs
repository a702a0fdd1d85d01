//! API service modules for Amplify endpoints.
//!
//! Each service provides methods for one resource family. Services are
//! obtained from [`AmplifyClient`](crate::AmplifyClient) and share its
//! session.

mod budgets;
mod campaigns;
mod currencies;
mod marketers;
mod performance;
mod promoted_links;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::Resource;
use crate::Result;

pub use budgets::BudgetsService;
pub use campaigns::CampaignsService;
pub use currencies::CurrenciesService;
pub use marketers::MarketersService;
pub use performance::{DailyPerformance, PerformanceService};
pub use promoted_links::{PromotedLinksQuery, PromotedLinksService};

/// Fetch one envelope per id, sequentially, keyed by id.
///
/// The first failing request aborts the whole call.
pub(crate) async fn fetch_per_id<K, Q>(
    inner: &ClientInner,
    ids: &[K],
    path_of: impl Fn(&K) -> String,
    query: &Q,
    envelope_key: &str,
) -> Result<BTreeMap<K, Vec<Resource>>>
where
    K: Ord + Clone,
    Q: Serialize + ?Sized,
{
    let mut results = BTreeMap::new();
    for id in ids {
        let items = inner
            .get_envelope(&path_of(id), query, envelope_key)
            .await?;
        results.insert(id.clone(), items);
    }
    Ok(results)
}
