//! Domain layer: receipts, points and the scoring rules, plus the storage port
//! the application layer depends on.

pub mod points;
pub mod ports;
pub mod receipt;
pub mod rules;
