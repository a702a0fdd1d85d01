//! Data models for the Amplify API.
//!
//! - [`primitives`] - Typed ids such as `MarketerId` and `CampaignId`
//! - [`resource`] - The opaque JSON wrapper every resource is returned as

pub mod primitives;
pub mod resource;

pub use primitives::*;
pub use resource::*;
