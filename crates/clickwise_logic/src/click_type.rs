use std::fmt;

/// Slot index the client sends when a click lands on the border of the
/// window rather than on a slot.
pub const OUTSIDE_WINDOW_SLOT: i32 = -1;

/// The `mode` field of a window click. The meaning of `button` depends on
/// the mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickMode {
    Click,
    ShiftClick,
    Hotbar,
    CreativeMiddleClick,
    DropKey,
    Drag,
    DoubleClick,
}

impl ClickMode {
    /// Returns `None` for modes outside of `0..=6`.
    pub const fn from_raw(mode: i32) -> Option<Self> {
        Some(match mode {
            0 => Self::Click,
            1 => Self::ShiftClick,
            2 => Self::Hotbar,
            3 => Self::CreativeMiddleClick,
            4 => Self::DropKey,
            5 => Self::Drag,
            6 => Self::DoubleClick,
            _ => return None,
        })
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Click => 0,
            Self::ShiftClick => 1,
            Self::Hotbar => 2,
            Self::CreativeMiddleClick => 3,
            Self::DropKey => 4,
            Self::Drag => 5,
            Self::DoubleClick => 6,
        }
    }
}

/// What the player did, reconstructed from a window click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickType {
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
    WindowBorderLeft,
    WindowBorderRight,
    /// A number key pressed while hovering a slot.
    NumberKey,
    Middle,
    /// The drop key pressed while hovering a slot.
    Drop,
    ControlDrop,
    DoubleClick,
    Creative,
    DragStartLeft,
    DragAddLeft,
    DragEndLeft,
    DragStartRight,
    DragAddRight,
    DragEndRight,
    Unknown,
}

impl ClickType {
    /// Decodes the `(mode, button, slot)` triple of a window click.
    ///
    /// Returns `None` if the triple does not describe a click we recognize.
    /// Item contents are never consulted.
    ///
    /// | mode | button | slot | click |
    /// |------|--------|------|-------|
    /// | 0 | 0 | -1 | [`WindowBorderLeft`](Self::WindowBorderLeft) |
    /// | 0 | 0 | other | [`Left`](Self::Left) |
    /// | 0 | 1 | -1 | [`WindowBorderRight`](Self::WindowBorderRight) |
    /// | 0 | 1 | other | [`Right`](Self::Right) |
    /// | 1 | 0 | any | [`ShiftLeft`](Self::ShiftLeft) |
    /// | 1 | 1 | any | [`ShiftRight`](Self::ShiftRight) |
    /// | 2 | any | any | [`NumberKey`](Self::NumberKey) |
    /// | 3 | 2 | any | [`Middle`](Self::Middle) |
    /// | 4 | 0 | any | [`Drop`](Self::Drop) |
    /// | 4 | 1 | any | [`ControlDrop`](Self::ControlDrop) |
    /// | 6 | 0 | any | [`DoubleClick`](Self::DoubleClick) |
    pub fn decode(mode: i32, button: i32, slot: i32) -> Option<Self> {
        let on_border = slot == OUTSIDE_WINDOW_SLOT;

        match (ClickMode::from_raw(mode)?, button) {
            (ClickMode::Click, 0) if on_border => Some(Self::WindowBorderLeft),
            (ClickMode::Click, 0) => Some(Self::Left),
            (ClickMode::Click, 1) if on_border => Some(Self::WindowBorderRight),
            (ClickMode::Click, 1) => Some(Self::Right),
            (ClickMode::ShiftClick, 0) => Some(Self::ShiftLeft),
            (ClickMode::ShiftClick, 1) => Some(Self::ShiftRight),
            (ClickMode::Hotbar, _) => Some(Self::NumberKey),
            (ClickMode::CreativeMiddleClick, 2) => Some(Self::Middle),
            (ClickMode::DropKey, 0) => Some(Self::Drop),
            (ClickMode::DropKey, 1) => Some(Self::ControlDrop),
            // TODO: drags span several packets (start, one add per slot, end)
            // and need per-client state before they can map to the Drag*
            // click types.
            (ClickMode::Drag, _) => None,
            (ClickMode::DoubleClick, 0) => Some(Self::DoubleClick),
            _ => None,
        }
    }

    pub const fn is_drag(self) -> bool {
        matches!(
            self,
            Self::DragStartLeft
                | Self::DragAddLeft
                | Self::DragEndLeft
                | Self::DragStartRight
                | Self::DragAddRight
                | Self::DragEndRight
        )
    }

    pub const fn is_window_border(self) -> bool {
        matches!(self, Self::WindowBorderLeft | Self::WindowBorderRight)
    }

    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::ShiftLeft => "shift_left",
            Self::ShiftRight => "shift_right",
            Self::WindowBorderLeft => "window_border_left",
            Self::WindowBorderRight => "window_border_right",
            Self::NumberKey => "number_key",
            Self::Middle => "middle",
            Self::Drop => "drop",
            Self::ControlDrop => "control_drop",
            Self::DoubleClick => "double_click",
            Self::Creative => "creative",
            Self::DragStartLeft => "drag_start_left",
            Self::DragAddLeft => "drag_add_left",
            Self::DragEndLeft => "drag_end_left",
            Self::DragStartRight => "drag_start_right",
            Self::DragAddRight => "drag_add_right",
            Self::DragEndRight => "drag_end_right",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ClickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Same as [`ClickType::decode`].
pub fn decode_click_type(mode: i32, button: i32, slot: i32) -> Option<ClickType> {
    ClickType::decode(mode, button, slot)
}
