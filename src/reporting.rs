//! Revenue aggregation and dashboard statistics
//!
//! Pure functions over the order list; handlers pass `Utc::now()` so the
//! bucketing stays deterministic under test. All day boundaries are UTC.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
}

/// One chart point: a day (week view) or a 7-day window (month view).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBucket {
    pub label: String,
    pub revenue: i64,
    pub order_count: usize,
}

/// Buckets orders chronologically ascending.
///
/// Week: 7 daily buckets ending today, labeled by ISO date. Month: 4
/// consecutive 7-day windows ending now, labeled "Week 1" through "Week 4".
/// An order created exactly 7 days ago falls outside the week view.
pub fn revenue_buckets(orders: &[Order], period: Period, now: DateTime<Utc>) -> Vec<RevenueBucket> {
    match period {
        Period::Week => (0..7)
            .rev()
            .map(|days_back| {
                let day = (now - Duration::days(days_back)).date_naive();
                let day_orders: Vec<&Order> = orders
                    .iter()
                    .filter(|o| o.created_at.date_naive() == day)
                    .collect();
                RevenueBucket {
                    label: day.to_string(),
                    revenue: day_orders.iter().map(|o| o.total_amount).sum(),
                    order_count: day_orders.len(),
                }
            })
            .collect(),
        Period::Month => (0..4)
            .rev()
            .map(|weeks_back| {
                let start = now - Duration::days((weeks_back + 1) * 7);
                let end = now - Duration::days(weeks_back * 7);
                let window: Vec<&Order> = orders
                    .iter()
                    .filter(|o| o.created_at >= start && o.created_at < end)
                    .collect();
                RevenueBucket {
                    label: format!("Week {}", 4 - weeks_back),
                    revenue: window.iter().map(|o| o.total_amount).sum(),
                    order_count: window.len(),
                }
            })
            .collect(),
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_revenue: i64,
    pub new_orders: usize,
}

/// Recomputed in full on every read.
pub fn dashboard_stats(
    total_users: usize,
    total_products: usize,
    orders: &[Order],
    now: DateTime<Utc>,
) -> DashboardStats {
    let start_of_today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    DashboardStats {
        total_users,
        total_products,
        total_revenue: orders.iter().map(|o| o.total_amount).sum(),
        new_orders: orders
            .iter()
            .filter(|o| o.created_at >= start_of_today)
            .count(),
    }
}
