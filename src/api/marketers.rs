//! Marketers service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Marketer, MarketerId};
use crate::Result;

/// Service for marketer (advertiser account) operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// for marketer in client.marketers().list().await? {
///     println!("{:?}", marketer.get_str("name"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct MarketersService {
    inner: Arc<ClientInner>,
}

impl MarketersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single marketer.
    pub async fn get(&self, marketer_id: &MarketerId) -> Result<Marketer> {
        self.inner.get(&format!("marketers/{}", marketer_id)).await
    }

    /// List every marketer the authenticated user can see.
    pub async fn list(&self) -> Result<Vec<Marketer>> {
        self.inner.get_envelope("marketers", &(), "marketers").await
    }

    /// Ids of every marketer, in the order the API lists them.
    pub async fn all_ids(&self) -> Result<Vec<MarketerId>> {
        self.list()
            .await?
            .iter()
            .map(|m| m.require_id("marketer").map(MarketerId::from))
            .collect()
    }
}
