use common::stats::value_counts;
use common::stats::Summary;
use tracing::info;

use crate::order::Order;

/// Logs the post-run descriptive statistics: actual delivery days and
/// carrier share, split by membership tier.
pub fn log_summary(orders: &[Order]) {
    for (label, is_prime) in [("prime", true), ("standard", false)] {
        let days = orders
            .iter()
            .filter(|o| o.is_prime_member == is_prime)
            .map(|o| o.delivery_days() as f64)
            .collect::<Vec<_>>();
        let total = days.len();
        if total == 0 {
            info!("{label}: no orders");
            continue;
        }

        if let Some(summary) = Summary::from_values(&days) {
            info!("{label} actual delivery days: {summary}");
        }

        let carriers = orders
            .iter()
            .filter(|o| o.is_prime_member == is_prime)
            .map(|o| o.carrier.to_string());
        for (carrier, count) in value_counts(carriers) {
            info!(
                "{label} carrier share: {carrier} {:.3}",
                count as f64 / total as f64
            );
        }
    }
}
