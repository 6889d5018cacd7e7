//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoRegisterArgs {
    /// Fixture set to use for the catalog
    #[clap(short, long, default_value = "cafe")]
    pub fixture: String,

    /// Search text to filter the product view with
    #[clap(short, long)]
    pub search: Option<String>,

    /// Category to filter the product view with ("All" matches everything)
    #[clap(short, long)]
    pub category: Option<String>,
}
