//! CSV import of inventory rows.
//!
//! The file's first line is a header and is skipped. Every other line must hold
//! exactly `name,price,quantity,updated`; a blank line counts as a bad row. The
//! first bad row stops the import; rows reconciled before it stay in the store.

use super::{
    product::NewProduct,
    reconcile::{ReconcileOutcome, reconcile},
};
use crate::errors::{Error, Result};
use csv::StringRecord;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const FIELDS_PER_ROW: usize = 4;

/// One import row before normalization, fields taken by position.
#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    price: String,
    quantity: String,
    updated: String,
}

/// Removes every double quote from a product name.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.replace('"', "")
}

/// Turns currency text such as `$12.34` into cents by stripping `$` and `.`.
///
/// This is a textual strip, so `$12.5` becomes `125`. Returns `None` when what is
/// left is not an integer.
#[must_use]
pub fn normalize_price(raw: &str) -> Option<i64> {
    raw.trim().replace('$', "").replace('.', "").parse().ok()
}

fn malformed(line: u64, field: &'static str, value: &str) -> Error {
    Error::MalformedRow {
        line,
        field,
        value: value.to_string(),
    }
}

impl RawRow {
    fn into_product(self, line: u64) -> Result<NewProduct> {
        let price =
            normalize_price(&self.price).ok_or_else(|| malformed(line, "price", &self.price))?;
        let quantity = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| malformed(line, "quantity", &self.quantity))?;

        Ok(NewProduct {
            name: normalize_name(&self.name),
            price,
            quantity,
            updated: self.updated,
        })
    }
}

/// Number of physical lines a record occupies, counting newlines inside quoted fields.
fn line_span(record: &StringRecord) -> u64 {
    let embedded: usize = record.iter().map(|field| field.matches('\n').count()).sum();
    1 + embedded as u64
}

/// Imports every row of the CSV file at `path`, reconciling each in file order.
///
/// `report` sees each outcome as soon as its row is reconciled, so rows stored
/// before a failure have already been reported. Returns the outcome of every row.
/// An empty file imports nothing.
///
/// # Errors
/// Returns an error if the file cannot be read, a row is malformed (including a
/// blank line), `report` fails, or a database write fails. Rows before the failing
/// one have already been stored.
pub async fn import_inventory<P, F>(
    db: &DatabaseConnection,
    path: P,
    mut report: F,
) -> Result<Vec<ReconcileOutcome>>
where
    P: AsRef<Path>,
    F: FnMut(&ReconcileOutcome) -> Result<()>,
{
    let path = path.as_ref();
    info!("Importing inventory from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    // The csv reader drops blank lines, so gaps in record positions reveal them.
    let mut next_line = 1 + line_span(reader.headers()?);

    let mut outcomes = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(next_line, csv::Position::line);
        if line != next_line {
            return Err(malformed(next_line, "row", ""));
        }
        next_line = line + line_span(&record);

        if record.len() != FIELDS_PER_ROW {
            let joined = record.iter().collect::<Vec<_>>().join(",");
            return Err(malformed(line, "row", &joined));
        }

        let raw: RawRow = record.deserialize(None)?;
        let product = raw.into_product(line)?;
        debug!(line, name = %product.name, "reconciling import row");
        let outcome = reconcile(db, product).await?;
        report(&outcome)?;
        outcomes.push(outcome);
    }

    if contents.lines().count() as u64 >= next_line {
        return Err(malformed(next_line, "row", ""));
    }

    info!(
        "Imported {} rows ({} changed)",
        outcomes.len(),
        outcomes.iter().filter(|o| o.changed()).count()
    );
    Ok(outcomes)
}
