use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Enchantment;

/// Extra data attached to an item stack.
///
/// Two stacks of the same [`ItemKind`](crate::ItemKind) only merge when
/// their metadata is similar. An empty display name and empty lore are
/// treated the same as having none at all.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lore: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    enchantments: BTreeMap<Enchantment, u8>,
}

impl ItemMeta {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.set_display_name(Some(name.into()));
        self
    }

    #[must_use]
    pub fn with_lore<I, L>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.set_lore(lore.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_enchant(mut self, ench: Enchantment, level: u8) -> Self {
        self.add_enchant(ench, level, true);
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    pub fn has_display_name(&self) -> bool {
        self.display_name().is_some()
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn set_lore(&mut self, lore: Vec<String>) {
        self.lore = lore;
    }

    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, u8> {
        &self.enchantments
    }

    pub fn has_enchants(&self) -> bool {
        !self.enchantments.is_empty()
    }

    /// Returns the level of the enchantment, or 0 if it is absent.
    pub fn enchant_level(&self, ench: Enchantment) -> u8 {
        self.enchantments.get(&ench).copied().unwrap_or(0)
    }

    /// Adds an enchantment at the given level.
    ///
    /// Unless `ignore_level_restriction` is set, levels outside of
    /// `1..=ench.max_level()` are rejected. Returns `true` if the metadata
    /// changed.
    pub fn add_enchant(
        &mut self,
        ench: Enchantment,
        level: u8,
        ignore_level_restriction: bool,
    ) -> bool {
        if !ignore_level_restriction && !(1..=ench.max_level()).contains(&level) {
            return false;
        }

        self.enchantments.insert(ench, level) != Some(level)
    }

    /// Returns `true` if the enchantment was present.
    pub fn remove_enchant(&mut self, ench: Enchantment) -> bool {
        self.enchantments.remove(&ench).is_some()
    }

    /// Returns `true` if nothing observable is stored.
    pub fn is_empty(&self) -> bool {
        !self.has_display_name() && !self.has_lore() && !self.has_enchants()
    }

    /// Whether stacks carrying these two metadata values may merge.
    pub fn is_similar(&self, other: &ItemMeta) -> bool {
        self.display_name() == other.display_name()
            && self.lore == other.lore
            && self.enchantments == other.enchantments
    }
}
