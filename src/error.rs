use crate::domain::receipt::ReceiptId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Identifier collision: {0} is already stored")]
    IdCollision(ReceiptId),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
