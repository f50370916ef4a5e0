//! Helpers for driving [`ClickPlugin`] from tests.

use bevy_app::prelude::*;
use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;
use clickwise_inventory::{ClickPlugin, ClickSettings, ClickSlotEvent};
use clickwise_item::ItemStack;
use clickwise_logic::ClickEvent;

pub struct ScenarioSingleClient {
    /// The new bevy application.
    pub app: App,
    /// Entity standing in for the client sending clicks.
    pub client: Entity,
}

impl ScenarioSingleClient {
    /// Sets up an app with [`ClickPlugin`] and a single client entity.
    ///
    /// Reduces boilerplate in unit tests.
    pub fn new() -> Self {
        Self::with_settings(ClickSettings::default())
    }

    pub fn with_settings(settings: ClickSettings) -> Self {
        let mut app = App::new();

        app.insert_resource(settings).add_plugins(ClickPlugin);

        app.update(); // Initialize plugins.

        let client = app.world_mut().spawn_empty().id();

        ScenarioSingleClient { app, client }
    }

    /// Queues a click in the player's own inventory (window 0).
    pub fn click(&mut self, click: ClickEvent) {
        self.click_with_hotbar(click, None);
    }

    /// Queues a click along with the contents of the hotbar slot it
    /// addresses.
    pub fn click_with_hotbar(&mut self, click: ClickEvent, hotbar_item: Option<ItemStack>) {
        let client = self.client;

        self.app.world_mut().send_event(ClickSlotEvent {
            client,
            window_id: 0,
            click,
            hotbar_item,
        });
    }

    /// Collects the events of type `E` emitted during the last update.
    pub fn collect<E: Event + Clone>(&self) -> Vec<E> {
        self.app
            .world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }
}

impl Default for ScenarioSingleClient {
    fn default() -> Self {
        Self::new()
    }
}
