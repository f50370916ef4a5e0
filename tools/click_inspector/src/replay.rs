use std::fs;
use std::path::Path;

use anyhow::Context;
use clickwise::item::ItemStack;
use clickwise::logic::ClickEvent;
use serde::Deserialize;

/// A file of recorded window clicks.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReplayFile {
    #[serde(default, rename = "click")]
    pub(crate) clicks: Vec<ReplayClick>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReplayClick {
    pub(crate) mode: i32,
    pub(crate) button: i32,
    pub(crate) slot: i32,
    #[serde(default)]
    pub(crate) cursor: Option<ItemStack>,
    #[serde(default)]
    pub(crate) slot_item: Option<ItemStack>,
    #[serde(default)]
    pub(crate) hotbar_item: Option<ItemStack>,
}

impl ReplayFile {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read replay file {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse replay file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl ReplayClick {
    pub(crate) fn to_event(&self) -> ClickEvent {
        ClickEvent::new(self.mode, self.button, self.slot)
            .with_cursor(self.cursor.clone())
            .with_slot_item(self.slot_item.clone())
    }
}
