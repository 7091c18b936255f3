use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vend - inventory and point-of-sale terminal for a vending machine
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'vend' without a subcommand to open the Owner / User menus.")]
pub struct Cli {
    /// Directory holding inventory.json and owner_credentials.json
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: platform config dir, vend.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Stock an empty machine with demo snacks and drinks
    Seed {
        /// Replace an inventory that already has items
        #[arg(short, long)]
        force: bool,
    },
}
