//! Core inventory logic - storage queries, reconciliation, CSV import and backup.
//!
//! Everything here takes a borrowed `DatabaseConnection` and returns structured data;
//! console formatting lives in the shell.

/// CSV backup of every stored product
pub mod backup;
/// CSV import feeding the reconciler
pub mod import;
/// Product queries and writes
pub mod product;
/// Newest-update-wins merge of incoming products
pub mod reconcile;
