//! Application layer orchestrating scoring and storage.
//!
//! This module defines the `ReceiptProcessor` which acts as the primary entry point
//! for processing receipts. It is shared behind an `Arc` by all request handlers;
//! the store it owns is the only mutable state.

pub mod processor;
