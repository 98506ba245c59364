//! Product storage operations.
//!
//! Thin wrappers over `SeaORM` queries on the product table. None of them enforce
//! uniqueness of `name`; that is the reconciler's job.

use crate::{
    config::database::product_table_exists,
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{ActiveValue, QueryOrder, Set, prelude::*};
use tracing::info;

/// A product that has not been stored yet, as read from a file row or typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Product name, already normalized
    pub name: String,
    /// Price in cents
    pub price: i64,
    /// Units in stock
    pub quantity: i64,
    /// Date of the last update, compared as text
    pub updated: String,
}

/// Inserts a new product and returns it with its assigned id.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn insert_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model> {
    let product = product::ActiveModel {
        name: Set(new.name),
        price: Set(new.price),
        quantity: Set(new.quantity),
        updated: Set(new.updated),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Finds the first product with exactly this name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .order_by_asc(product::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Writes every mutable field of a previously fetched product back to its row.
///
/// # Errors
/// Returns an error if the row no longer exists or the update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    product: product::Model,
) -> Result<product::Model> {
    let active = product::ActiveModel {
        id: ActiveValue::Unchanged(product.id),
        name: Set(product.name),
        price: Set(product.price),
        quantity: Set(product.quantity),
        updated: Set(product.updated),
    };
    active.update(db).await.map_err(Into::into)
}

/// Retrieves every stored product in storage (id) order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes every product, returning how many rows were removed.
///
/// Does nothing when the table has not been created yet.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_all_products(db: &DatabaseConnection) -> Result<u64> {
    if !product_table_exists(db).await? {
        return Ok(0);
    }
    let result = Product::delete_many().exec(db).await?;
    info!("Wiped {} products", result.rows_affected);
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_insert_assigns_id() -> Result<()> {
        let db = setup_test_db().await?;

        let first = insert_product(&db, new_product("Bolt", 100, 10, "2020-01-01")).await?;
        let second = insert_product(&db, new_product("Nut", 25, 40, "2020-01-02")).await?;

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Bolt");
        assert_eq!(first.price, 100);
        assert_eq!(first.quantity, 10);
        assert_eq!(first.updated, "2020-01-01");
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_does_not_check_uniqueness() -> Result<()> {
        let db = setup_test_db().await?;

        let first = insert_product(&db, new_product("Bolt", 100, 10, "2020-01-01")).await?;
        insert_product(&db, new_product("Bolt", 200, 5, "2021-01-01")).await?;

        assert_eq!(get_all_products(&db).await?.len(), 2);
        let found = get_product_by_name(&db, "Bolt").await?;
        assert_eq!(found, Some(first));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_name_and_id() -> Result<()> {
        let db = setup_test_db().await?;
        let bolt = create_test_product(&db, "Bolt", "2020-01-01").await?;

        assert_eq!(get_product_by_name(&db, "Bolt").await?, Some(bolt.clone()));
        assert_eq!(get_product_by_id(&db, bolt.id).await?, Some(bolt.clone()));
        assert!(get_product_by_name(&db, "bolt").await?.is_none());
        assert!(get_product_by_id(&db, bolt.id + 1).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_writes_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let mut bolt = create_test_product(&db, "Bolt", "2020-01-01").await?;

        bolt.price = 250;
        bolt.quantity = 3;
        bolt.updated = "2021-06-30".to_string();
        let saved = update_product(&db, bolt.clone()).await?;

        assert_eq!(saved, bolt);
        assert_eq!(get_product_by_id(&db, bolt.id).await?, Some(bolt));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_products_in_insert_order() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "Nut", "2020-01-01").await?;
        create_test_product(&db, "Bolt", "2020-01-01").await?;
        create_test_product(&db, "Washer", "2020-01-01").await?;

        let names: Vec<String> = get_all_products(&db)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Nut", "Bolt", "Washer"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_all_products() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "Nut", "2020-01-01").await?;
        create_test_product(&db, "Bolt", "2020-01-01").await?;

        assert_eq!(delete_all_products(&db).await?, 2);
        assert!(get_all_products(&db).await?.is_empty());
        assert_eq!(delete_all_products(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_all_products_without_table() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        assert_eq!(delete_all_products(&db).await?, 0);
        Ok(())
    }
}
