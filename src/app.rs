//! Startup sequence.
//!
//! Wipe, create tables, import, run the shell, print the table. There is no
//! rollback: a failed import leaves whatever rows it stored and skips the shell.

use crate::{
    config::{AppConfig, database::create_tables},
    core::{
        import::import_inventory,
        product::{delete_all_products, get_all_products},
    },
    errors::Result,
    shell::Shell,
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::info;

/// Runs the whole program against `db`, reading commands from `input`.
///
/// # Errors
/// Returns the first database, file, or console error; nothing after it runs.
pub async fn run<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    config: &AppConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    delete_all_products(db).await?;
    create_tables(db).await?;

    import_inventory(db, &config.import_path, |outcome| {
        if outcome.changed() {
            writeln!(output, "{outcome}")?;
        }
        Ok(())
    })
    .await?;

    Shell::new(db, input, &mut output, config.backup_path.clone())
        .run()
        .await?;

    print_inventory(db, &mut output).await?;
    info!("Inventory session finished");
    Ok(())
}

/// Prints every stored product, one tab-indented line each.
///
/// # Errors
/// Returns an error if the products cannot be read or written.
pub async fn print_inventory<W: Write>(db: &DatabaseConnection, output: &mut W) -> Result<()> {
    writeln!(output, "\n\nEntire database:")?;
    for product in get_all_products(db).await? {
        writeln!(
            output,
            "\t{} {} {} {}",
            product.name, product.quantity, product.price, product.updated
        )?;
    }
    Ok(())
}
