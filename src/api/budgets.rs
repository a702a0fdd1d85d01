//! Budgets service.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::fetch_per_id;
use crate::client::ClientInner;
use crate::models::{Budget, BudgetId, MarketerId};
use crate::Result;

/// Service for budget operations.
///
/// # Example
///
/// ```no_run
/// use amplify_rs::MarketerId;
///
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// let marketers = [MarketerId::new("m-1"), MarketerId::new("m-2")];
/// let budgets = client.budgets().per_marketer(&marketers).await?;
/// for (marketer, budgets) in &budgets {
///     println!("{marketer}: {} budgets", budgets.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct BudgetsService {
    inner: Arc<ClientInner>,
}

impl BudgetsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single budget.
    pub async fn get(&self, budget_id: &BudgetId) -> Result<Budget> {
        self.inner.get(&format!("budgets/{}", budget_id)).await
    }

    /// Budgets of each marketer, one request per marketer.
    pub async fn per_marketer(
        &self,
        marketer_ids: &[MarketerId],
    ) -> Result<BTreeMap<MarketerId, Vec<Budget>>> {
        fetch_per_id(
            &self.inner,
            marketer_ids,
            |id| format!("marketers/{}/budgets", id),
            &(),
            "budgets",
        )
        .await
    }
}
