//! Strongly-typed identifiers.
//!
//! Amplify ids are opaque strings. Wrapping each resource's id in its own
//! newtype keeps a campaign id from being passed where a marketer id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

resource_id!(
    /// A marketer (advertiser account) id.
    ///
    /// # Example
    ///
    /// ```
    /// use amplify_rs::MarketerId;
    ///
    /// let id = MarketerId::new("00f4b02153ee75f3c9dc4fc128ab0419ab");
    /// assert_eq!(id.as_str(), "00f4b02153ee75f3c9dc4fc128ab0419ab");
    /// ```
    MarketerId
);

resource_id!(
    /// A budget id.
    BudgetId
);

resource_id!(
    /// A campaign id.
    CampaignId
);

resource_id!(
    /// A promoted link id.
    PromotedLinkId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_conversions() {
        let id: CampaignId = "c-1".into();
        assert_eq!(id.as_str(), "c-1");
        assert_eq!(id.to_string(), "c-1");
        assert_eq!(CampaignId::from("c-1".to_string()), id);
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = MarketerId::new("m-9");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"m-9\"");
        let back: MarketerId = serde_json::from_str("\"m-9\"").unwrap();
        assert_eq!(back, id);
    }
}
