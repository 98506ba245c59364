//! Product entity - One inventory line item.
//!
//! `name` is the business key used for reconciliation but is not unique in the schema.
//! `price` is stored in cents and `updated` is kept as text so that two dates in the
//! same format compare correctly without parsing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    /// Surrogate identifier assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Bolt", "Widget Pro")
    pub name: String,
    /// Price in cents
    pub price: i64,
    /// Units in stock
    pub quantity: i64,
    /// Date of the last update, compared as text
    pub updated: String,
}

/// The product table has no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
