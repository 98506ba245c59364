//! Reconciliation of incoming products against the store.
//!
//! A product is matched by name. An unknown name is inserted; a known name is
//! overwritten only when the incoming `updated` value is strictly greater than the
//! stored one. Equal or older dates leave the row untouched.

use super::product::{NewProduct, get_product_by_name, insert_product, update_product};
use crate::{entities::product, errors::Result};
use sea_orm::DatabaseConnection;
use std::fmt;
use tracing::{debug, info};

/// What `reconcile` did with an incoming product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The name was new and the product was inserted
    Added(product::Model),
    /// The stored product was older and took the incoming price, quantity and date
    Updated(product::Model),
    /// The stored product was as new or newer; nothing was written
    Unchanged(product::Model),
}

impl ReconcileOutcome {
    /// The stored product after reconciliation.
    #[must_use]
    pub const fn product(&self) -> &product::Model {
        match self {
            Self::Added(p) | Self::Updated(p) | Self::Unchanged(p) => p,
        }
    }

    /// Whether anything was written to the store.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}

/// Console report line; `Unchanged` reports nothing.
impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(p) => write!(f, "{} added", p.name),
            Self::Updated(p) => write!(f, "{} updated", p.name),
            Self::Unchanged(_) => Ok(()),
        }
    }
}

/// Merges `incoming` into the store using the newest-update-wins rule.
///
/// # Errors
/// Returns an error if any database query or write fails.
pub async fn reconcile(db: &DatabaseConnection, incoming: NewProduct) -> Result<ReconcileOutcome> {
    let Some(mut existing) = get_product_by_name(db, &incoming.name).await? else {
        let added = insert_product(db, incoming).await?;
        info!(id = added.id, name = %added.name, "product added");
        return Ok(ReconcileOutcome::Added(added));
    };

    if incoming.updated > existing.updated {
        existing.price = incoming.price;
        existing.quantity = incoming.quantity;
        existing.updated = incoming.updated;
        let updated = update_product(db, existing).await?;
        info!(id = updated.id, name = %updated.name, "product updated");
        Ok(ReconcileOutcome::Updated(updated))
    } else {
        debug!(
            name = %existing.name,
            stored = %existing.updated,
            incoming = %incoming.updated,
            "incoming product is not newer, ignoring"
        );
        Ok(ReconcileOutcome::Unchanged(existing))
    }
}
