use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Carrier {
    #[strum(serialize = "AMZL")]
    #[serde(rename = "AMZL")]
    Amzl,
    #[strum(serialize = "UPS")]
    #[serde(rename = "UPS")]
    Ups,
    #[strum(serialize = "USPS")]
    #[serde(rename = "USPS")]
    Usps,
    #[strum(serialize = "FedEx")]
    #[serde(rename = "FedEx")]
    FedEx,
}

impl Carrier {
    pub fn is_in_house(self) -> bool {
        self == Carrier::Amzl
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum DeliveryStatus {
    Early,
    #[strum(serialize = "On-Time")]
    #[serde(rename = "On-Time")]
    OnTime,
    Late,
}

impl DeliveryStatus {
    /// Delays only ever push the actual date forward, so `Early` stays
    /// unreachable under the default generator parameters.
    pub fn derive(expected: NaiveDate, actual: NaiveDate) -> Self {
        if actual < expected {
            DeliveryStatus::Early
        } else if actual == expected {
            DeliveryStatus::OnTime
        } else {
            DeliveryStatus::Late
        }
    }
}

/// One synthesized order row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: NaiveDate,
    pub is_prime_member: bool,
    pub expected_delivery_date: NaiveDate,
    pub actual_delivery_date: NaiveDate,
    pub delivery_status: DeliveryStatus,
    pub carrier: Carrier,
    pub delivery_cost: Decimal,
    pub product_id: String,
    pub order_quantity: u32,
    pub destination_zip_code: String,
}

impl Order {
    pub fn delivery_days(&self) -> i64 {
        (self.actual_delivery_date - self.order_date).num_days()
    }
}
