//! Checkout Example
//!
//! Rings up a short cafe order against a fixture catalog and prints the
//! receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-s` to filter the product view by search text
//! Use `-c` to filter the product view by category

use std::io;

use anyhow::Result;
use clap::Parser;

use till::{
    filter::CategoryFilter,
    fixtures::Fixture,
    register::Register,
    utils::DemoRegisterArgs,
};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoRegisterArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;

    let mut register = Register::new(&catalog);

    if let Some(search) = args.search {
        register.set_search_text(search);
    }

    if let Some(category) = args.category.as_deref() {
        register.set_category(CategoryFilter::from_label(category));
    }

    println!("Products on display:");

    for product in register.filtered_products() {
        println!("  [{}] {}: {}", product.id, product.name, product.price);
    }

    // Ring up two espressos and a croissant, then think better of one.
    let espresso = fixture.product_id("espresso")?;
    let croissant = fixture.product_id("croissant")?;

    register.select_product(espresso)?;
    register.select_product(espresso)?;
    register.select_product(croissant)?;
    register.change_quantity(espresso, -1);

    println!();
    println!("Running total: {}", register.total()?);
    println!();

    let receipt = register.complete_order()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    Ok(())
}
