use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ItemKind, ItemMeta};

/// A stack of items in an inventory.
///
/// The count is always in `STACK_MIN..=STACK_MAX`. Empty slots are
/// represented with `Option<ItemStack>` instead of a zero count.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "ItemStackRepr")]
pub struct ItemStack {
    pub item: ItemKind,
    count: i8,
    #[serde(default, skip_serializing_if = "ItemMeta::is_empty")]
    pub meta: ItemMeta,
}

impl ItemStack {
    pub const STACK_MIN: i8 = 1;
    pub const STACK_MAX: i8 = 127;

    #[must_use]
    pub fn new(item: ItemKind, count: i8, meta: Option<ItemMeta>) -> Self {
        Self {
            item,
            count: count.clamp(Self::STACK_MIN, Self::STACK_MAX),
            meta: meta.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: i8) -> Self {
        self.set_count(count);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Gets the number of items in this stack.
    pub fn count(&self) -> i8 {
        self.count
    }

    /// Sets the number of items in this stack. Values are clamped to 1-127,
    /// which are the positive values accepted by clients.
    pub fn set_count(&mut self, count: i8) {
        self.count = count.clamp(Self::STACK_MIN, Self::STACK_MAX);
    }

    /// The maximum count of this stack's item kind.
    pub fn max_stack(&self) -> i8 {
        self.item.max_stack()
    }

    /// Whether this stack is at or above its item's max stack count.
    pub fn is_full(&self) -> bool {
        self.count >= self.max_stack()
    }

    /// Whether the two stacks are of the same kind and carry similar
    /// metadata. Counts are ignored.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.item == other.item && self.meta.is_similar(&other.meta)
    }
}

impl From<ItemKind> for ItemStack {
    fn from(item: ItemKind) -> Self {
        Self::new(item, 1, None)
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item, self.count)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseItemStackError {
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("invalid item count `{0}` (expected 1..=127)")]
    InvalidCount(String),
}

/// Parses `<item>` or `<item>:<count>`, e.g. `diamond:12`.
impl FromStr for ItemStack {
    type Err = ParseItemStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, count) = match s.split_once(':') {
            Some((name, count)) => (name, Some(count)),
            None => (s, None),
        };

        let item = ItemKind::from_str(name.trim())
            .ok_or_else(|| ParseItemStackError::UnknownItem(name.to_owned()))?;

        let count = match count {
            Some(count) => count
                .trim()
                .parse::<i8>()
                .ok()
                .filter(|c| (ItemStack::STACK_MIN..=ItemStack::STACK_MAX).contains(c))
                .ok_or_else(|| ParseItemStackError::InvalidCount(count.to_owned()))?,
            None => 1,
        };

        Ok(ItemStack::new(item, count, None))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemStackRepr {
    item: ItemKind,
    #[serde(default = "default_count")]
    count: i64,
    #[serde(default)]
    meta: ItemMeta,
}

fn default_count() -> i64 {
    1
}

impl TryFrom<ItemStackRepr> for ItemStack {
    type Error = ParseItemStackError;

    fn try_from(repr: ItemStackRepr) -> Result<Self, Self::Error> {
        let count = i8::try_from(repr.count)
            .ok()
            .filter(|c| (ItemStack::STACK_MIN..=ItemStack::STACK_MAX).contains(c))
            .ok_or_else(|| ParseItemStackError::InvalidCount(repr.count.to_string()))?;

        Ok(ItemStack::new(repr.item, count, Some(repr.meta)))
    }
}
