use crate::domain::points::Points;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::domain::rules;
use crate::error::Result;
use tracing::{debug, info};

/// The entry point for scoring and looking up receipts.
///
/// `ReceiptProcessor` scores each submitted receipt with the domain rules and
/// records the result in its store. It holds no state of its own, so a single
/// instance can be shared by every request handler.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Scores `receipt`, stores the score under a new identifier and returns
    /// that identifier.
    pub async fn process_receipt(&self, receipt: &Receipt) -> Result<ReceiptId> {
        let breakdown = rules::breakdown(receipt);
        let points = breakdown.total();
        let id = self.store.insert(points).await?;

        debug!(%id, %breakdown, "scored receipt");
        info!(%id, %points, retailer = %receipt.retailer, "receipt processed");
        Ok(id)
    }

    /// Returns the points stored for `id`, or `None` if it was never issued.
    pub async fn points_for(&self, id: &ReceiptId) -> Result<Option<Points>> {
        self.store.get(id).await
    }

    /// Number of receipts processed so far.
    pub async fn processed_count(&self) -> Result<usize> {
        self.store.len().await
    }
}
