//! # Vend Entry Point
//!
//! ```bash
//! vend                      # Owner / User menus
//! vend seed                 # stock an empty machine with demo items
//! vend --data-dir ./lobby   # use another machine's files
//! RUST_LOG=debug vend       # verbose logs on stderr
//! ```

use anyhow::Context;
use clap::Parser;
use vend_terminal::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    vend_terminal::run(cli).context("vend terminal stopped")
}
