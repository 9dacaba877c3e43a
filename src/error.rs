use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),
    #[error("Catalog item {0} is not in stock")]
    ItemUnavailable(String),
    #[error("Quantity {quantity} exceeds maximum allowed ({max})")]
    QuantityOutOfRange { quantity: u32, max: u32 },
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
