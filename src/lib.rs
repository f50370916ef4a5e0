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
    unreachable_pub,
    clippy::dbg_macro
)]

use bevy_app::{PluginGroup, PluginGroupBuilder};

#[cfg(feature = "testing")]
pub mod testing;


#[cfg(feature = "log")]
pub use bevy_log as log;
#[cfg(feature = "inventory")]
pub use clickwise_inventory as inventory;
pub use clickwise_item as item;
pub use clickwise_logic as logic;

/// Contains the most frequently used items in clickwise projects.
///
/// This is usually glob imported like so:
///
/// ```
/// use clickwise::prelude::*;
///
/// let click = ClickType::decode(1, 0, 12);
/// assert_eq!(click, Some(ClickType::ShiftLeft));
/// ```
pub mod prelude {
    pub use bevy_app::prelude::*;
    pub use bevy_ecs; // Needed for bevy_ecs macros to function correctly.
    pub use bevy_ecs::prelude::*;
    #[cfg(feature = "inventory")]
    pub use clickwise_inventory::{
        ClassifyClicksSet, ClickPlugin, ClickSettings, ClickSlotEvent, InventoryClickEvent,
        UnrecognizedClickEvent, UnsupportedClickEvent,
    };
    pub use clickwise_item::{Enchantment, ItemKind, ItemMeta, ItemStack};
    pub use clickwise_logic::{
        decode_click_type, is_place_action, resolve_action, Classification, ClickEvent, ClickMode,
        ClickStack, ClickType, InventoryAction, ResolveError, OUTSIDE_WINDOW_SLOT,
    };

    pub use super::DefaultPlugins;
}

/// This plugin group will add all the default plugins for a clickwise
/// application.
///
/// [`DefaultPlugins`] obeys Cargo feature flags. Users may exert control over
/// this plugin group by disabling `default-features` in their `Cargo.toml` and
/// enabling only those features that they wish to use.
pub struct DefaultPlugins;

impl PluginGroup for DefaultPlugins {
    fn build(self) -> PluginGroupBuilder {
        #[allow(unused_mut)]
        let mut group = PluginGroupBuilder::start::<Self>();

        #[cfg(feature = "log")]
        {
            group = group.add(bevy_log::LogPlugin::default());
        }

        #[cfg(feature = "inventory")]
        {
            group = group.add(clickwise_inventory::ClickPlugin);
        }

        group
    }
}
