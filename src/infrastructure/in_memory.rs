use crate::domain::points::Points;
use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::ReceiptId;
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipt scores.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Points>>>` so clones share the same map.
/// Every write goes through the single lock, and identifiers are minted while
/// it is held, so an identifier is never handed out twice.
#[derive(Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Points>>>,
    generate_id: fn() -> ReceiptId,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty store minting random identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(ReceiptId::generate)
    }

    /// Creates a new, empty store minting identifiers with `generate_id`.
    pub fn with_id_generator(generate_id: fn() -> ReceiptId) -> Self {
        Self {
            receipts: Arc::new(RwLock::new(HashMap::new())),
            generate_id,
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, points: Points) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write().await;
        let id = (self.generate_id)();
        match receipts.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(points);
                Ok(id)
            }
            Entry::Occupied(_) => Err(ReceiptError::IdCollision(id)),
        }
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Points>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).copied())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.receipts.read().await.len())
    }
}
