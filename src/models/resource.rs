//! Opaque JSON resources.
//!
//! The API's resources are consumed as-is: the client reads the few keys it
//! needs (`id`, metric totals) and hands everything else back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A JSON object returned by the API, kept verbatim.
///
/// # Example
///
/// ```
/// use amplify_rs::models::Resource;
///
/// let campaign: Resource = serde_json::from_value(serde_json::json!({
///     "id": "c-1",
///     "name": "Spring sale",
/// })).unwrap();
///
/// assert_eq!(campaign.id(), Some("c-1".to_string()));
/// assert_eq!(campaign.get_str("name"), Some("Spring sale"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Map<String, Value>);

/// An advertiser account.
pub type Marketer = Resource;
/// A spending allocation scoped to a marketer.
pub type Budget = Resource;
/// An ad campaign.
pub type Campaign = Resource;
/// An ad unit within a campaign.
pub type PromotedLink = Resource;
/// A supported currency.
pub type Currency = Resource;
/// One row of a performance report.
pub type PerformanceRecord = Resource;

impl Resource {
    /// Wrap an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string field by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Get a numeric field by key, accepting numbers and numeric strings.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The resource's `id`, whether the API sent it as a string or a number.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Like [`id`](Self::id), but a missing id is an error.
    pub(crate) fn require_id(&self, context: &str) -> Result<String> {
        self.id().ok_or_else(|| Error::missing_field(context, "id"))
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the resource, returning the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Resource {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        Value::Object(resource.0)
    }
}
