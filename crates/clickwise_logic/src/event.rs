use clickwise_item::ItemStack;

use crate::{resolve_action, ClickStack, ClickType, InventoryAction, ResolveError};

/// A snapshot of one window click: the raw protocol fields plus what was on
/// the cursor and in the clicked slot at the time of the click.
#[derive(Clone, PartialEq, Debug)]
pub struct ClickEvent<S = ItemStack> {
    pub mode: i32,
    pub button: i32,
    /// `-1` for the window border.
    pub slot: i32,
    pub cursor: Option<S>,
    pub slot_item: Option<S>,
}

/// The result of interpreting a [`ClickEvent`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Classification {
    pub click_type: ClickType,
    pub action: InventoryAction,
}

impl Classification {
    pub const fn is_place(self) -> bool {
        self.action.is_place()
    }
}

impl<S: ClickStack> ClickEvent<S> {
    pub fn new(mode: i32, button: i32, slot: i32) -> Self {
        Self {
            mode,
            button,
            slot,
            cursor: None,
            slot_item: None,
        }
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<Option<S>>) -> Self {
        self.cursor = cursor.into();
        self
    }

    #[must_use]
    pub fn with_slot_item(mut self, slot_item: impl Into<Option<S>>) -> Self {
        self.slot_item = slot_item.into();
        self
    }

    /// Decodes the click type. Only the raw fields are looked at.
    pub fn click_type(&self) -> Option<ClickType> {
        ClickType::decode(self.mode, self.button, self.slot)
    }

    /// Decodes the click and resolves its action.
    ///
    /// `Ok(None)` means the click was not recognized, which callers
    /// usually ignore. An error means it was recognized but cannot be
    /// resolved.
    pub fn classify(&self) -> Result<Option<Classification>, ResolveError> {
        let Some(click_type) = self.click_type() else {
            return Ok(None);
        };

        let action = resolve_action(
            click_type,
            self.slot,
            self.cursor.as_ref(),
            self.slot_item.as_ref(),
        )?;

        Ok(Some(Classification { click_type, action }))
    }
}
