//! # amplify-rs
//!
//! An async Rust client for the Outbrain Amplify advertising API.
//!
//! The client logs in once with HTTP basic auth, keeps the returned
//! `OB-TOKEN-V1` token, and exposes read access to marketers, budgets,
//! campaigns, promoted links, currencies and performance reports.
//! Paginated endpoints are walked transparently, or lazily through a
//! [`PaginatedStream`](client::PaginatedStream).
//!
//! ## Features
//!
//! - **Authentication**: one-shot basic-auth login with an explicit,
//!   fallible initializer
//! - **Typed ids**: `MarketerId`, `BudgetId`, `CampaignId`, `PromotedLinkId`
//! - **Opaque resources**: API objects are returned verbatim as [`models::Resource`]
//! - **Pagination**: `limit`/`offset` paging handled for you
//! - **Explicit errors**: non-2xx responses surface as [`Error`] variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use amplify_rs::{AmplifyClient, Credentials};
//! use amplify_rs::api::PromotedLinksQuery;
//!
//! #[tokio::main]
//! async fn main() -> amplify_rs::Result<()> {
//!     let client = AmplifyClient::login(Credentials::new(
//!         "user@example.com",
//!         "password",
//!         "https://api.outbrain.com/amplify/v0.1",
//!     ))
//!     .await?;
//!
//!     // Every campaign of every marketer
//!     let campaign_ids = client.campaigns().all_ids().await?;
//!     println!("Found {} campaigns", campaign_ids.len());
//!
//!     // Enabled promoted links of the first one
//!     if let Some(campaign) = campaign_ids.first() {
//!         let links = client
//!             .promoted_links()
//!             .for_campaign(campaign, PromotedLinksQuery::default().enabled(true))
//!             .await?;
//!         println!("{} enabled links in {}", links.len(), campaign);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{AmplifyClient, ClientConfig};
pub use error::{Error, Result};
pub use models::{BudgetId, CampaignId, MarketerId, PromotedLinkId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use amplify_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{DailyPerformance, PromotedLinksQuery};
    pub use crate::auth::{Credentials, Session};
    pub use crate::client::{AmplifyClient, ClientConfig, PaginatedStream};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Ids
        BudgetId, CampaignId, MarketerId, PromotedLinkId,
        // Resources
        Budget, Campaign, Currency, Marketer, PerformanceRecord, PromotedLink, Resource,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_id_creation() {
        let id = CampaignId::new("00f4b02153ee75f3c9dc4fc128ab0419ab");
        assert_eq!(id.as_str(), "00f4b02153ee75f3c9dc4fc128ab0419ab");
    }

    #[test]
    fn test_client_from_session() {
        let session = Session::from_token("https://api.outbrain.com/amplify/v0.1/", "t").unwrap();
        let client = AmplifyClient::with_session(session, ClientConfig::default()).unwrap();
        assert_eq!(
            client.session().base_url(),
            "https://api.outbrain.com/amplify/v0.1"
        );
        assert_eq!(client.config().page_size, client::DEFAULT_PAGE_SIZE);
    }
}
