use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, OrdersGenError>;

#[derive(Error, Debug)]
pub enum OrdersGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
}
