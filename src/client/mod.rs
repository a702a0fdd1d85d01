//! HTTP client and service layer for the Amplify API.
//!
//! This module provides the main entry point [`AmplifyClient`] for
//! interacting with the Amplify API.
//!
//! # Example
//!
//! ```no_run
//! use amplify_rs::{AmplifyClient, ClientConfig, Credentials};
//!
//! # async fn example() -> amplify_rs::Result<()> {
//! let client = AmplifyClient::login_with_config(
//!     Credentials::new("user", "password", "https://api.outbrain.com/amplify/v0.1"),
//!     ClientConfig::default().with_page_size(100),
//! ).await?;
//!
//! let currencies = client.currencies().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::ClientConfig;
pub use http::AmplifyClient;
pub use paginated::{PaginatedStream, DEFAULT_PAGE_SIZE};
pub(crate) use http::ClientInner;
