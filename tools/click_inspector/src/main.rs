#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    clippy::dbg_macro
)]

use std::io;

use args::{ClickInspectorArgs, Command};
use clap::Parser;
use clickwise::logic::{ClickEvent, ClickType};
use replay::ReplayFile;
use report::Outcome;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;
mod replay;
mod report;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = ClickInspectorArgs::parse();

    match args.command {
        Command::Decode { mode, button, slot } => match ClickType::decode(mode, button, slot) {
            Some(click_type) => println!("{click_type}"),
            None => println!("unrecognized"),
        },
        Command::Resolve {
            mode,
            button,
            slot,
            cursor,
            slot_item,
            hotbar_item,
        } => {
            let event: ClickEvent = ClickEvent::new(mode, button, slot)
                .with_cursor(cursor)
                .with_slot_item(slot_item);

            debug!(?event, "resolving click");

            println!("{}", Outcome::of(&event, hotbar_item.as_ref()));
        }
        Command::Replay { file } => {
            let replay = ReplayFile::load(&file)?;

            info!("replaying {} clicks from {}", replay.clicks.len(), file.display());

            for (idx, click) in replay.clicks.iter().enumerate() {
                let outcome = Outcome::of(&click.to_event(), click.hotbar_item.as_ref());

                debug!(?click, %outcome, "classified click {idx}");

                println!(
                    "{idx:>4}  mode {} button {:>2} slot {:>4}  {outcome}",
                    click.mode, click.button, click.slot
                );
            }
        }
    }

    Ok(())
}
