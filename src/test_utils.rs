//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and creating products with
//! sensible defaults.

#![allow(clippy::expect_used)]

use crate::{
    core::product::{NewProduct, insert_product},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates an in-memory `SQLite` database with the product table created.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds an unsaved product.
pub fn new_product(name: &str, price: i64, quantity: i64, updated: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        quantity,
        updated: updated.to_string(),
    }
}

/// Stores a product with sensible defaults.
///
/// # Defaults
/// * price: 100
/// * quantity: 1
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    updated: &str,
) -> Result<entities::product::Model> {
    insert_product(db, new_product(name, 100, 1, updated)).await
}

/// Stores a product with custom price and quantity.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: i64,
    quantity: i64,
    updated: &str,
) -> Result<entities::product::Model> {
    insert_product(db, new_product(name, price, quantity, updated)).await
}

/// Writes `contents` to a temporary file that lives as long as the returned handle.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
