//! CSV backup of the whole inventory.
//!
//! The header reads `Name,Price,Quantity,Date Updated` but each row is written as
//! `name,quantity,price,updated`. Existing backups read by other tools depend on
//! that order, so it is kept.

use super::product::get_all_products;
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Header row of every backup file
pub const BACKUP_HEADER: [&str; 4] = ["Name", "Price", "Quantity", "Date Updated"];

#[derive(Serialize)]
struct BackupRow<'a> {
    name: &'a str,
    quantity: i64,
    price: i64,
    updated: &'a str,
}

/// Writes every stored product to `path`, replacing any existing file.
///
/// Returns the number of product rows written.
///
/// # Errors
/// Returns an error if the products cannot be read or the file cannot be written.
pub async fn backup_inventory<P: AsRef<Path>>(db: &DatabaseConnection, path: P) -> Result<usize> {
    let path = path.as_ref();
    let products = get_all_products(db).await?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(BACKUP_HEADER)?;
    for product in &products {
        writer.serialize(BackupRow {
            name: &product.name,
            quantity: product.quantity,
            price: product.price,
            updated: &product.updated,
        })?;
    }
    writer.flush()?;

    info!("Backed up {} products to {}", products.len(), path.display());
    Ok(products.len())
}
