//! Interactive shell - the text menu for viewing, adding, and backing up products.
//!
//! The shell is generic over its reader and writer so it runs against stdin/stdout
//! in the binary and against in-memory buffers in tests.

/// Validated line prompts
pub mod prompt;

use crate::{
    core::{
        backup::backup_inventory,
        import::normalize_price,
        product::{NewProduct, get_product_by_id},
        reconcile::reconcile,
    },
    errors::Result,
};
use prompt::Prompter;
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const MENU: &str = "View a single product's inventory => v\n\
                    Add a new product to the database => a\n\
                    Make a backup of the entire inventory => b\n\
                    Quit => q";

/// One menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Look up a product by id
    View,
    /// Enter a product by hand
    Add,
    /// Write the backup file
    Backup,
    /// Leave the menu
    Quit,
}

impl Command {
    /// Parses a menu selection, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "v" => Some(Self::View),
            "a" => Some(Self::Add),
            "b" => Some(Self::Backup),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The menu loop and the state it needs.
pub struct Shell<'a, R, W> {
    db: &'a DatabaseConnection,
    prompter: Prompter<R, W>,
    backup_path: PathBuf,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell reading commands from `input` and writing to `output`.
    pub fn new(db: &'a DatabaseConnection, input: R, output: W, backup_path: PathBuf) -> Self {
        Self {
            db,
            prompter: Prompter::new(input, output),
            backup_path,
        }
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// # Errors
    /// Returns an error on console I/O failure, on a database failure, or when
    /// input ends in the middle of adding a product.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.prompter.output(), "\n\n")?;

        loop {
            writeln!(self.prompter.output(), "{MENU}")?;
            let Some(selection) = self.prompter.read_line("Choice: ")? else {
                debug!("input closed at the menu, quitting");
                return Ok(());
            };

            match Command::parse(&selection) {
                Some(Command::View) => self.view_product().await?,
                Some(Command::Add) => self.add_product().await?,
                Some(Command::Backup) => self.backup().await?,
                Some(Command::Quit) => {
                    writeln!(self.prompter.output(), "Quitting")?;
                    return Ok(());
                }
                None => {}
            }

            writeln!(self.prompter.output())?;
        }
    }

    async fn view_product(&mut self) -> Result<()> {
        let entered = self.prompter.read_required("Enter a product ID: ")?;
        let entered = entered.trim();

        let found = match entered.parse::<i64>() {
            Ok(id) => get_product_by_id(self.db, id).await?,
            Err(_) => None,
        };

        let out = self.prompter.output();
        match found {
            Some(product) => writeln!(
                out,
                "Product found\n\tname: {}\n\tquantity: {}\n\tprice: {}\n\tlast updated on: {}",
                product.name, product.quantity, product.price, product.updated
            )?,
            None => writeln!(out, "Could not find a product with ID: {entered}")?,
        }
        Ok(())
    }

    async fn add_product(&mut self) -> Result<()> {
        let name = self.prompter.string("Enter a product name: ")?;
        let price = self
            .prompter
            .positive_number("Enter a product price: ", normalize_price)?;
        let quantity = self
            .prompter
            .positive_number("Enter a product quantity: ", |s| s.parse().ok())?;
        let updated = self.prompter.string("Enter a product updated date: ")?;

        let outcome = reconcile(
            self.db,
            NewProduct {
                name,
                price,
                quantity,
                updated,
            },
        )
        .await?;

        if outcome.changed() {
            writeln!(self.prompter.output(), "{outcome}")?;
        }
        Ok(())
    }

    async fn backup(&mut self) -> Result<()> {
        writeln!(self.prompter.output(), "Backing up database:")?;
        backup_inventory(self.db, &self.backup_path).await?;
        writeln!(self.prompter.output(), "Back up complete")?;
        Ok(())
    }
}
