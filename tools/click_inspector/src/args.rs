use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clickwise::item::ItemStack;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct ClickInspectorArgs {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Decode the click type of a raw window click.
    #[command(allow_negative_numbers = true)]
    Decode {
        mode: i32,
        button: i32,
        /// Clicked slot. -1 is the window border.
        slot: i32,
    },
    /// Decode a window click and resolve the inventory action it implies.
    #[command(allow_negative_numbers = true)]
    Resolve {
        mode: i32,
        button: i32,
        /// Clicked slot. -1 is the window border.
        slot: i32,
        /// Item on the cursor, as `<item>[:<count>]`.
        #[arg(long)]
        cursor: Option<ItemStack>,
        /// Item in the clicked slot, as `<item>[:<count>]`.
        #[arg(long)]
        slot_item: Option<ItemStack>,
        /// Item in the hotbar slot a number key click addresses.
        #[arg(long)]
        hotbar_item: Option<ItemStack>,
    },
    /// Classify every click listed in a TOML file.
    Replay {
        /// Path to a file of `[[click]]` tables.
        file: PathBuf,
    },
}
