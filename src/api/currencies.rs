//! Currencies service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Currency;
use crate::Result;

/// Service for the currency catalogue.
pub struct CurrenciesService {
    inner: Arc<ClientInner>,
}

impl CurrenciesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the currencies the platform supports.
    pub async fn list(&self) -> Result<Vec<Currency>> {
        self.inner.get_envelope("currencies", &(), "currencies").await
    }
}
