use super::points::Points;
use super::receipt::ReceiptId;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for processed receipt scores.
///
/// Implementations own the identifier space: `insert` mints the identifier for
/// the new entry, so callers can never overwrite an existing score.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores `points` under a freshly generated identifier and returns it.
    async fn insert(&self, points: Points) -> Result<ReceiptId>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>>;
    /// Number of stored receipts.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
