use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::order::Carrier;

#[derive(Debug, Clone)]
pub struct TierParams {
    pub delivery_avg_days: f64,
    pub delivery_std_dev_days: f64,
    pub delay_probability: f64,
    pub carrier_weights: Vec<(Carrier, f64)>,
}

/// Immutable generator parameters. `Default` carries the standard
/// simulation profile; tests and the CLI override single fields.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub num_orders: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prime_member_ratio: f64,
    pub max_delay_days: i64,
    pub base_in_house_cost: Decimal,
    pub base_third_party_cost: Decimal,
    pub prime_cost_premium: Decimal,
    pub prime: TierParams,
    pub standard: TierParams,
}

impl GeneratorConfig {
    pub fn tier(&self, is_prime: bool) -> &TierParams {
        if is_prime { &self.prime } else { &self.standard }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_orders: 100_000,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            prime_member_ratio: 0.7,
            max_delay_days: 2,
            base_in_house_cost: Decimal::new(500, 2),
            base_third_party_cost: Decimal::new(400, 2),
            prime_cost_premium: Decimal::new(12, 1),
            prime: TierParams {
                delivery_avg_days: 1.5,
                delivery_std_dev_days: 0.5,
                delay_probability: 0.05,
                carrier_weights: vec![
                    (Carrier::Amzl, 0.85),
                    (Carrier::Ups, 0.07),
                    (Carrier::Usps, 0.05),
                    (Carrier::FedEx, 0.03),
                ],
            },
            standard: TierParams {
                delivery_avg_days: 6.,
                delivery_std_dev_days: 1.5,
                delay_probability: 0.2,
                carrier_weights: vec![
                    (Carrier::Amzl, 0.2),
                    (Carrier::Ups, 0.4),
                    (Carrier::Usps, 0.3),
                    (Carrier::FedEx, 0.1),
                ],
            },
        }
    }
}
