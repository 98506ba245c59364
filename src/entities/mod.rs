//! Entity module - Contains the SeaORM entity definition for the inventory table.
//! The entity has a Model struct for data and an Entity struct for operations.

pub mod product;

pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
