//! Performance reporting service.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{MarketerId, PerformanceRecord, PromotedLinkId, Resource};
use crate::{Error, Result};

/// Daily metrics of one promoted link, keyed by day.
///
/// Days on which the link had no cost, impressions or clicks are absent.
pub type DailyPerformance = BTreeMap<NaiveDate, Resource>;

/// `from`/`to` query pair; dates go out as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Serialize)]
struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

/// Service for performance reports.
///
/// # Example
///
/// ```no_run
/// use amplify_rs::MarketerId;
/// use chrono::NaiveDate;
///
/// # async fn example(client: amplify_rs::AmplifyClient) -> amplify_rs::Result<()> {
/// let marketer = MarketerId::new("00f4b02153ee75f3c9dc4fc128ab0419ab");
/// let rows = client
///     .performance()
///     .by_publisher(
///         &marketer,
///         NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
///     )
///     .await?;
/// for row in rows {
///     println!("{:?} {:?}", row.get_str("name"), row.get("metrics"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct PerformanceService {
    inner: Arc<ClientInner>,
}

impl PerformanceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream a marketer's per-publisher performance between two dates.
    ///
    /// Rows are read from the `details` envelope of each page. If `from` is
    /// after `to` the stream yields a single [`Error::InvalidInput`] and
    /// sends no request.
    pub fn by_publisher_stream(
        &self,
        marketer_id: &MarketerId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PaginatedStream<PerformanceRecord> {
        if from > to {
            let message = inverted_range(from, to);
            return PaginatedStream::new(move |_offset: u32| {
                let message = message.clone();
                Box::pin(async move {
                    Err::<Vec<PerformanceRecord>, _>(Error::InvalidInput(message))
                })
            });
        }

        let path = format!("marketers/{}/performanceByPublisher", marketer_id);
        PaginatedStreamBuilder::<PerformanceRecord>::new(self.inner.clone(), path, "details")
            .build_with_query(Some(DateRange { from, to }))
    }

    /// A marketer's per-publisher performance between two dates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `from` is after `to`.
    pub async fn by_publisher(
        &self,
        marketer_id: &MarketerId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PerformanceRecord>> {
        self.by_publisher_stream(marketer_id, from, to)
            .collect_all()
            .await
    }

    /// Day-by-day metrics for each promoted link over `[from, to)`.
    ///
    /// One request is made per link per day. `to` defaults to today (UTC)
    /// and `from` to the day before `to`. Days whose `cost + impressions +
    /// clicks` is zero are left out.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`] if a day's response lacks `overallMetrics` or
    /// any of its `cost`, `impressions` and `clicks` numbers.
    pub async fn daily_for_promoted_links(
        &self,
        promoted_link_ids: &[PromotedLinkId],
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<BTreeMap<PromotedLinkId, DailyPerformance>> {
        let to = to.unwrap_or_else(|| Utc::now().date_naive());
        let from = from.unwrap_or(to - Duration::days(1));

        let mut performance = BTreeMap::new();
        for link_id in promoted_link_ids {
            let path = format!("promotedLinks/{}/performanceByDay", link_id);
            let mut days = DailyPerformance::new();

            let mut day = from;
            while day < to {
                let Some(next_day) = day.succ_opt() else {
                    break;
                };

                let body = self
                    .inner
                    .get_with_query(&path, &DateRange { from: day, to: next_day })
                    .await?;
                let metrics = overall_metrics(body, &path)?;
                if has_activity(&metrics, &path)? {
                    days.insert(day, metrics);
                }

                day = next_day;
            }

            performance.insert(link_id.clone(), days);
        }
        Ok(performance)
    }
}

fn overall_metrics(body: Value, path: &str) -> Result<Resource> {
    let Value::Object(mut fields) = body else {
        return Err(Error::missing_field(format!("response of {path}"), "overallMetrics"));
    };
    match fields.remove("overallMetrics") {
        Some(metrics @ Value::Object(_)) => Ok(serde_json::from_value(metrics)?),
        _ => Err(Error::missing_field(format!("response of {path}"), "overallMetrics")),
    }
}

fn inverted_range(from: NaiveDate, to: NaiveDate) -> String {
    format!("report start {from} is after end {to}")
}

fn has_activity(metrics: &Resource, path: &str) -> Result<bool> {
    let mut total = 0.0;
    for key in ["cost", "impressions", "clicks"] {
        total += metrics
            .get_f64(key)
            .ok_or_else(|| Error::missing_field(format!("overallMetrics of {path}"), key))?;
    }
    Ok(total > 0.0)
}
