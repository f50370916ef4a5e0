#![doc = include_str!("../README.md")]
#![allow(clippy::type_complexity)]
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

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
pub use clickwise_item::ItemStack;
pub use clickwise_logic::{ClickEvent, ClickType, InventoryAction};
use clickwise_logic::{Classification, ResolveError};
use tracing::{debug, warn};

pub struct ClickPlugin;

/// Systems that turn [`ClickSlotEvent`]s into classified events.
#[derive(SystemSet, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ClassifyClicksSet;

impl Plugin for ClickPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(PreUpdate, ClassifyClicksSet)
            .add_systems(PreUpdate, classify_click_slot.in_set(ClassifyClicksSet))
            .init_resource::<ClickSettings>()
            .add_event::<ClickSlotEvent>()
            .add_event::<InventoryClickEvent>()
            .add_event::<UnrecognizedClickEvent>()
            .add_event::<UnsupportedClickEvent>();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Resource)]
pub struct ClickSettings {
    /// Turn [`InventoryAction::HotbarSwap`] into [`InventoryAction::Nothing`]
    /// when the hotbar slot addressed by a number key is empty.
    pub downgrade_empty_hotbar_swap: bool,
    /// Emit [`InventoryClickEvent`]s whose action is
    /// [`InventoryAction::Nothing`].
    pub emit_nothing_actions: bool,
}

impl Default for ClickSettings {
    fn default() -> Self {
        Self {
            downgrade_empty_hotbar_swap: true,
            emit_nothing_actions: true,
        }
    }
}

/// A window click received from a client, before it is interpreted.
#[derive(Event, Clone, Debug)]
pub struct ClickSlotEvent {
    pub client: Entity,
    pub window_id: u8,
    pub click: ClickEvent,
    /// Contents of the hotbar slot a number key click addresses. Ignored
    /// for other clicks.
    pub hotbar_item: Option<ItemStack>,
}

/// A click that was decoded and resolved.
#[derive(Event, Clone, Debug)]
pub struct InventoryClickEvent {
    pub client: Entity,
    pub window_id: u8,
    pub slot_id: i32,
    pub click_type: ClickType,
    pub action: InventoryAction,
    pub cursor_item: Option<ItemStack>,
    pub slot_item: Option<ItemStack>,
}

impl InventoryClickEvent {
    pub fn is_place(&self) -> bool {
        self.action.is_place()
    }
}

/// A click whose raw fields don't describe any known click.
#[derive(Event, Copy, Clone, PartialEq, Eq, Debug)]
pub struct UnrecognizedClickEvent {
    pub client: Entity,
    pub window_id: u8,
    pub mode: i32,
    pub button: i32,
    pub slot_id: i32,
}

/// A click that was decoded but whose action can't be resolved.
#[derive(Event, Copy, Clone, PartialEq, Eq, Debug)]
pub struct UnsupportedClickEvent {
    pub client: Entity,
    pub window_id: u8,
    pub slot_id: i32,
    pub click_type: ClickType,
}

fn classify_click_slot(
    settings: Res<ClickSettings>,
    mut clicks: EventReader<ClickSlotEvent>,
    mut classified_events: EventWriter<InventoryClickEvent>,
    mut unrecognized_events: EventWriter<UnrecognizedClickEvent>,
    mut unsupported_events: EventWriter<UnsupportedClickEvent>,
) {
    for event in clicks.read() {
        let click = &event.click;

        let Classification { click_type, action } = match click.classify() {
            Ok(Some(classification)) => classification,
            Ok(None) => {
                debug!(
                    "unrecognized window click from client {:?}: mode {} button {} slot {}",
                    event.client, click.mode, click.button, click.slot
                );

                unrecognized_events.send(UnrecognizedClickEvent {
                    client: event.client,
                    window_id: event.window_id,
                    mode: click.mode,
                    button: click.button,
                    slot_id: click.slot,
                });
                continue;
            }
            Err(ResolveError::Unsupported(click_type)) => {
                warn!(
                    "client {:?} sent a {click_type} click on slot {}, which is not supported yet",
                    event.client, click.slot
                );

                unsupported_events.send(UnsupportedClickEvent {
                    client: event.client,
                    window_id: event.window_id,
                    slot_id: click.slot,
                    click_type,
                });
                continue;
            }
        };

        let action = if settings.downgrade_empty_hotbar_swap {
            action.with_hotbar_item(event.hotbar_item.is_some())
        } else {
            action
        };

        if action == InventoryAction::Nothing && !settings.emit_nothing_actions {
            continue;
        }

        classified_events.send(InventoryClickEvent {
            client: event.client,
            window_id: event.window_id,
            slot_id: click.slot,
            click_type,
            action,
            cursor_item: click.cursor.clone(),
            slot_item: click.slot_item.clone(),
        });
    }
}
