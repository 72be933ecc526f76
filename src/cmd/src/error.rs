use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("OrdersGen: {0:?}")]
    OrdersGen(#[from] orders_gen::error::OrdersGenError),
    #[error("Common: {0:?}")]
    Common(#[from] common::error::CommonError),
}
