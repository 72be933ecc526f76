use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
}
