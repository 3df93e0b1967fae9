use std::io;
use std::process::ExitCode;

use anyhow::Context;

use itemshop_cli::{Console, Shop};

/// Exits 0 only through the menu's exit choice. Anything that ends the
/// session early is reported once by anyhow on stderr with status 1.
fn main() -> anyhow::Result<ExitCode> {
    itemshop_observability::init();

    let stdin = io::stdin();
    let mut shop = Shop::new(Console::new(stdin.lock(), io::stdout()));

    shop.run().context("item shop session aborted")?;

    Ok(ExitCode::SUCCESS)
}
