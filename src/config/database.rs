//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! The table statement is generated from the entity with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust struct without hand-written SQL.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityName, Schema, Statement, Value,
};
use tracing::debug;

/// Establishes a connection to the `SQLite` database at `database_url`.
///
/// A url such as `sqlite://inventory.db?mode=rwc` creates the file when it is missing.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {database_url}");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the product table if it does not already exist.
///
/// Safe to call repeatedly; an existing table and its rows are left alone.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;

    Ok(())
}

/// Reports whether the product table has been created yet.
pub async fn product_table_exists(db: &DatabaseConnection) -> Result<bool> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            [Value::from(Product.table_name())],
        ))
        .await?;
    Ok(row.is_some())
}
