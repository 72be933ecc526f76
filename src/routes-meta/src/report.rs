use common::stats::value_counts;
use common::stats::Summary;
use tracing::info;

use crate::aggregate::RouteSummary;

/// Logs descriptive statistics over the numeric columns plus per-city
/// route counts.
pub fn log_summary(routes: &[RouteSummary]) {
    let columns: [(&str, Vec<f64>); 3] = [
        (
            "num_deliveries",
            routes.iter().map(|r| r.num_deliveries as f64).collect(),
        ),
        (
            "total_volume_cm3",
            routes.iter().map(|r| r.total_volume_cm3).collect(),
        ),
        (
            "duration_hours",
            routes.iter().map(|r| r.duration_hours).collect(),
        ),
    ];
    for (label, values) in columns {
        if let Some(summary) = Summary::from_values(&values) {
            info!("{label}: {summary}");
        }
    }

    for (city, count) in value_counts(routes.iter().map(|r| r.city.clone())) {
        info!("routes in {city}: {count}");
    }
}
