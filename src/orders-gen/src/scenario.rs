use chrono::Duration;
use indicatif::ProgressBar;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_distr::Normal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::OrdersGenError;
use crate::error::Result;
use crate::order::Carrier;
use crate::order::DeliveryStatus;
use crate::order::Order;
use crate::zipcodes::ZipCodeProvider;

pub struct Config<R> {
    pub rng: R,
    pub params: GeneratorConfig,
    pub zip_codes: ZipCodeProvider,
}

struct CarrierSampler {
    carriers: Vec<Carrier>,
    weight_idx: WeightedIndex<f64>,
}

impl CarrierSampler {
    fn try_new(weights: &[(Carrier, f64)]) -> Result<Self> {
        let carriers = weights.iter().map(|(carrier, _)| *carrier).collect();
        let weight_idx = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))
            .map_err(|err| OrdersGenError::Internal(err.to_string()))?;

        Ok(Self {
            carriers,
            weight_idx,
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Carrier {
        self.carriers[self.weight_idx.sample(rng)]
    }
}

/// Base cost before jitter: in-house vs third-party carrier rate, times the
/// expedited premium for prime orders.
pub fn nominal_cost(params: &GeneratorConfig, carrier: Carrier, is_prime: bool) -> Decimal {
    let base = if carrier.is_in_house() {
        params.base_in_house_cost
    } else {
        params.base_third_party_cost
    };

    if is_prime {
        base * params.prime_cost_premium
    } else {
        base
    }
}

fn with_jitter(cost: Decimal, jitter: f64) -> Decimal {
    let jitter = Decimal::from_f64(jitter).unwrap_or(Decimal::ONE);
    (cost * jitter).round_dp(2)
}

pub struct Scenario<R> {
    rng: R,
    params: GeneratorConfig,
    zip_codes: ZipCodeProvider,
    prime_delivery: Normal<f64>,
    standard_delivery: Normal<f64>,
    prime_carriers: CarrierSampler,
    standard_carriers: CarrierSampler,
}

impl<R: Rng> Scenario<R> {
    pub fn new(cfg: Config<R>) -> Result<Self> {
        let prime_delivery = Normal::new(
            cfg.params.prime.delivery_avg_days,
            cfg.params.prime.delivery_std_dev_days,
        )
        .map_err(|err| OrdersGenError::Internal(err.to_string()))?;
        let standard_delivery = Normal::new(
            cfg.params.standard.delivery_avg_days,
            cfg.params.standard.delivery_std_dev_days,
        )
        .map_err(|err| OrdersGenError::Internal(err.to_string()))?;
        let prime_carriers = CarrierSampler::try_new(&cfg.params.prime.carrier_weights)?;
        let standard_carriers = CarrierSampler::try_new(&cfg.params.standard.carrier_weights)?;

        Ok(Self {
            rng: cfg.rng,
            params: cfg.params,
            zip_codes: cfg.zip_codes,
            prime_delivery,
            standard_delivery,
            prime_carriers,
            standard_carriers,
        })
    }

    pub fn run(&mut self) -> Vec<Order> {
        info!("generating {} orders...", self.params.num_orders);

        let pb = ProgressBar::new(self.params.num_orders as u64);
        let mut orders = Vec::with_capacity(self.params.num_orders);
        for idx in 0..self.params.num_orders {
            orders.push(self.gen_order(idx));
            pb.inc(1);
        }
        pb.finish_and_clear();

        orders
    }

    /// Rows are independent; the RNG stream is the only shared state, and
    /// the draw order below is fixed so a seeded run reproduces exactly.
    pub fn gen_order(&mut self, idx: usize) -> Order {
        let order_id = format!("ORD-{idx:07}");
        let customer_id = format!("CUST-{:05}", self.rng.gen_range(10000..=99999));

        let span_days = (self.params.end_date - self.params.start_date).num_days();
        let order_date = self.params.start_date + Duration::days(self.rng.gen_range(0..=span_days));
        let is_prime_member = self.rng.gen::<f64>() < self.params.prime_member_ratio;

        let delivery = if is_prime_member {
            self.prime_delivery
        } else {
            self.standard_delivery
        };
        let delivery_days = delivery.sample(&mut self.rng).round().max(1.) as i64;
        let expected_delivery_date = order_date + Duration::days(delivery_days);

        let mut actual_delivery_date = expected_delivery_date;
        if self.rng.gen::<f64>() < self.params.tier(is_prime_member).delay_probability {
            actual_delivery_date += Duration::days(self.rng.gen_range(1..=self.params.max_delay_days));
        }
        let delivery_status = DeliveryStatus::derive(expected_delivery_date, actual_delivery_date);

        let carrier = if is_prime_member {
            self.prime_carriers.sample(&mut self.rng)
        } else {
            self.standard_carriers.sample(&mut self.rng)
        };
        let jitter = self.rng.gen_range(0.9..=1.1);
        let delivery_cost = with_jitter(nominal_cost(&self.params, carrier, is_prime_member), jitter);

        let product_id = format!("PROD-{:03}", self.rng.gen_range(100..=999));
        let order_quantity = self.rng.gen_range(1..=5);
        let destination_zip_code = self.zip_codes.sample(&mut self.rng);

        Order {
            order_id,
            customer_id,
            order_date,
            is_prime_member,
            expected_delivery_date,
            actual_delivery_date,
            delivery_status,
            carrier,
            delivery_cost,
            product_id,
            order_quantity,
            destination_zip_code,
        }
    }
}
