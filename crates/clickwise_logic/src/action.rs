use std::fmt;

use thiserror::Error;

use crate::{ClickStack, ClickType};

/// How items move between the cursor and the clicked slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    Nothing,
    PickupAll,
    PickupHalf,
    PlaceOne,
    PlaceAll,
    PlaceSome,
    SwapWithCursor,
    DropAllCursor,
    DropOneCursor,
    MoveToOtherInventory,
    HotbarSwap,
    CollectToCursor,
    DropOneSlot,
    DropAllSlot,
    Unknown,
}

impl InventoryAction {
    /// Returns `true` if the action puts items from the cursor into the
    /// clicked slot.
    pub const fn is_place(self) -> bool {
        match self {
            Self::SwapWithCursor | Self::PlaceOne | Self::PlaceAll | Self::PlaceSome => true,
            Self::Nothing
            | Self::PickupAll
            | Self::PickupHalf
            | Self::DropAllCursor
            | Self::DropOneCursor
            | Self::MoveToOtherInventory
            | Self::HotbarSwap
            | Self::CollectToCursor
            | Self::DropOneSlot
            | Self::DropAllSlot
            | Self::Unknown => false,
        }
    }

    /// A number key swap with an empty hotbar slot does nothing. Only
    /// [`HotbarSwap`](Self::HotbarSwap) is affected.
    #[must_use]
    pub const fn with_hotbar_item(self, hotbar_occupied: bool) -> Self {
        match self {
            Self::HotbarSwap if !hotbar_occupied => Self::Nothing,
            other => other,
        }
    }

    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::PickupAll => "pickup_all",
            Self::PickupHalf => "pickup_half",
            Self::PlaceOne => "place_one",
            Self::PlaceAll => "place_all",
            Self::PlaceSome => "place_some",
            Self::SwapWithCursor => "swap_with_cursor",
            Self::DropAllCursor => "drop_all_cursor",
            Self::DropOneCursor => "drop_one_cursor",
            Self::MoveToOtherInventory => "move_to_other_inventory",
            Self::HotbarSwap => "hotbar_swap",
            Self::CollectToCursor => "collect_to_cursor",
            Self::DropOneSlot => "drop_one_slot",
            Self::DropAllSlot => "drop_all_slot",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InventoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Same as [`InventoryAction::is_place`].
pub fn is_place_action(action: InventoryAction) -> bool {
    action.is_place()
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum ResolveError {
    /// The click type is known but resolving it is not implemented.
    #[error("{0} clicks are not supported yet")]
    Unsupported(ClickType),
}

/// Picks the action implied by `click` given what is on the cursor and in
/// the clicked slot.
///
/// A negative `slot` means the click landed outside of any slot. Neither
/// stack is modified.
pub fn resolve_action<S: ClickStack>(
    click: ClickType,
    slot: i32,
    cursor: Option<&S>,
    slot_item: Option<&S>,
) -> Result<InventoryAction, ResolveError> {
    let action = match click {
        ClickType::Left => resolve_left(slot, cursor, slot_item),
        ClickType::Right => resolve_right(slot, cursor, slot_item),
        ClickType::ShiftLeft | ClickType::ShiftRight => match slot_item {
            Some(_) => InventoryAction::MoveToOtherInventory,
            None => InventoryAction::Nothing,
        },
        ClickType::WindowBorderLeft | ClickType::WindowBorderRight => InventoryAction::Nothing,
        ClickType::Middle | ClickType::Creative => return Err(ResolveError::Unsupported(click)),
        // Callers downgrade this with `with_hotbar_item` once they know
        // whether the hotbar slot is empty.
        ClickType::NumberKey => InventoryAction::HotbarSwap,
        ClickType::DoubleClick => match cursor {
            Some(_) => InventoryAction::CollectToCursor,
            None => InventoryAction::Nothing,
        },
        ClickType::Drop => InventoryAction::DropOneSlot,
        ClickType::ControlDrop => InventoryAction::DropAllSlot,
        ClickType::DragStartLeft
        | ClickType::DragAddLeft
        | ClickType::DragEndLeft
        | ClickType::DragStartRight
        | ClickType::DragAddRight
        | ClickType::DragEndRight
        | ClickType::Unknown => InventoryAction::Unknown,
    };

    Ok(action)
}

fn resolve_left<S: ClickStack>(
    slot: i32,
    cursor: Option<&S>,
    slot_item: Option<&S>,
) -> InventoryAction {
    let Some(cursor) = cursor else {
        return if slot < 0 || slot_item.is_none() {
            InventoryAction::Nothing
        } else {
            InventoryAction::PickupAll
        };
    };

    if slot < 0 {
        return InventoryAction::DropAllCursor;
    }

    let Some(slot_item) = slot_item else {
        return InventoryAction::PlaceAll;
    };

    if !slot_item.is_similar(cursor) {
        return InventoryAction::SwapWithCursor;
    }

    let room = slot_item.max_stack().saturating_sub(slot_item.count());
    let transfer = cursor.count().min(room);

    // A slot above its max stack gives a negative transfer, which is still
    // reported as a partial placement.
    match transfer {
        0 => InventoryAction::Nothing,
        1 => InventoryAction::PlaceOne,
        n if n == cursor.count() => InventoryAction::PlaceAll,
        _ => InventoryAction::PlaceSome,
    }
}

fn resolve_right<S: ClickStack>(
    slot: i32,
    cursor: Option<&S>,
    slot_item: Option<&S>,
) -> InventoryAction {
    let Some(cursor) = cursor else {
        return if slot < 0 || slot_item.is_none() {
            InventoryAction::Nothing
        } else {
            InventoryAction::PickupHalf
        };
    };

    if slot < 0 {
        return InventoryAction::DropOneCursor;
    }

    let Some(slot_item) = slot_item else {
        return InventoryAction::PlaceOne;
    };

    if !cursor.is_similar(slot_item) {
        return InventoryAction::SwapWithCursor;
    }

    if slot_item.count() < slot_item.max_stack() {
        InventoryAction::PlaceOne
    } else {
        InventoryAction::Nothing
    }
}

#[cfg(test)]
mod tests {
    use clickwise_item::{Enchantment, ItemKind, ItemMeta, ItemStack};
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_ACTIONS: [InventoryAction; 15] = [
        InventoryAction::Nothing,
        InventoryAction::PickupAll,
        InventoryAction::PickupHalf,
        InventoryAction::PlaceOne,
        InventoryAction::PlaceAll,
        InventoryAction::PlaceSome,
        InventoryAction::SwapWithCursor,
        InventoryAction::DropAllCursor,
        InventoryAction::DropOneCursor,
        InventoryAction::MoveToOtherInventory,
        InventoryAction::HotbarSwap,
        InventoryAction::CollectToCursor,
        InventoryAction::DropOneSlot,
        InventoryAction::DropAllSlot,
        InventoryAction::Unknown,
    ];

    /// Stand-in stack whose similarity is only its kind.
    #[derive(Clone, Debug)]
    struct TestStack {
        kind: char,
        count: i32,
        max: i32,
    }

    impl ClickStack for TestStack {
        fn count(&self) -> i32 {
            self.count
        }

        fn max_stack(&self) -> i32 {
            self.max
        }

        fn is_similar(&self, other: &Self) -> bool {
            self.kind == other.kind
        }
    }

    fn stack(kind: char, count: i32) -> TestStack {
        TestStack {
            kind,
            count,
            max: 64,
        }
    }

    fn diamonds(count: i8) -> ItemStack {
        ItemStack::new(ItemKind::Diamond, count, None)
    }

    fn left(cursor: Option<&TestStack>, slot_item: Option<&TestStack>) -> InventoryAction {
        resolve_action(ClickType::Left, 3, cursor, slot_item).unwrap()
    }

    fn right(cursor: Option<&TestStack>, slot_item: Option<&TestStack>) -> InventoryAction {
        resolve_action(ClickType::Right, 3, cursor, slot_item).unwrap()
    }

    #[test]
    fn left_click_with_empty_cursor() {
        assert_eq!(left(None, None), InventoryAction::Nothing);
        assert_eq!(left(None, Some(&stack('a', 5))), InventoryAction::PickupAll);
        assert_eq!(
            resolve_action(ClickType::Left, -999, None, Some(&stack('a', 5))),
            Ok(InventoryAction::Nothing)
        );
    }

    #[test]
    fn left_click_with_cursor() {
        let cursor = stack('a', 10);

        assert_eq!(
            resolve_action(ClickType::Left, -999, Some(&cursor), None),
            Ok(InventoryAction::DropAllCursor)
        );
        assert_eq!(left(Some(&cursor), None), InventoryAction::PlaceAll);
        assert_eq!(
            left(Some(&stack('a', 1)), Some(&stack('b', 1))),
            InventoryAction::SwapWithCursor
        );
    }

    #[test]
    fn left_click_merges_by_transfer_size() {
        let cursor = stack('a', 10);

        assert_eq!(left(Some(&cursor), Some(&stack('a', 64))), InventoryAction::Nothing);
        assert_eq!(left(Some(&cursor), Some(&stack('a', 63))), InventoryAction::PlaceOne);
        assert_eq!(left(Some(&cursor), Some(&stack('a', 60))), InventoryAction::PlaceSome);
        assert_eq!(left(Some(&cursor), Some(&stack('a', 54))), InventoryAction::PlaceAll);
        assert_eq!(left(Some(&cursor), Some(&stack('a', 1))), InventoryAction::PlaceAll);

        // A single item that fits is placed one at a time.
        assert_eq!(left(Some(&stack('a', 1)), Some(&stack('a', 5))), InventoryAction::PlaceOne);
    }

    #[test]
    fn left_click_on_overfilled_slot_places_some() {
        let overfilled = TestStack {
            kind: 'a',
            count: 100,
            max: 64,
        };

        assert_eq!(left(Some(&stack('a', 3)), Some(&overfilled)), InventoryAction::PlaceSome);

        // Item stacks can hold more than their kind's max stack.
        assert_eq!(
            resolve_action(ClickType::Left, 3, Some(&diamonds(3)), Some(&diamonds(100))),
            Ok(InventoryAction::PlaceSome)
        );
    }

    #[test]
    fn left_click_with_extreme_counts_does_not_overflow() {
        let weird = TestStack {
            kind: 'a',
            count: -5,
            max: i32::MAX,
        };
        let huge = TestStack {
            kind: 'a',
            count: i32::MAX,
            max: i32::MIN,
        };

        assert_eq!(left(Some(&stack('a', 10)), Some(&weird)), InventoryAction::PlaceAll);
        assert_eq!(left(Some(&stack('a', 10)), Some(&huge)), InventoryAction::PlaceSome);
    }

    #[test]
    fn right_click() {
        assert_eq!(right(None, None), InventoryAction::Nothing);
        assert_eq!(right(None, Some(&stack('a', 4))), InventoryAction::PickupHalf);
        assert_eq!(
            resolve_action(ClickType::Right, -999, None, Some(&stack('a', 4))),
            Ok(InventoryAction::Nothing)
        );
        assert_eq!(
            resolve_action(ClickType::Right, -999, Some(&stack('a', 4)), None),
            Ok(InventoryAction::DropOneCursor)
        );
        assert_eq!(right(Some(&stack('a', 4)), None), InventoryAction::PlaceOne);
        assert_eq!(right(Some(&stack('a', 4)), Some(&stack('a', 63))), InventoryAction::PlaceOne);
        assert_eq!(right(Some(&stack('a', 4)), Some(&stack('a', 64))), InventoryAction::Nothing);
        assert_eq!(
            right(Some(&stack('a', 4)), Some(&stack('b', 1))),
            InventoryAction::SwapWithCursor
        );
    }

    #[test]
    fn shift_clicks_ignore_cursor() {
        for click in [ClickType::ShiftLeft, ClickType::ShiftRight] {
            for cursor in [None, Some(&stack('z', 3))] {
                assert_eq!(
                    resolve_action(click, 3, cursor, Some(&stack('a', 1))),
                    Ok(InventoryAction::MoveToOtherInventory)
                );
                assert_eq!(resolve_action(click, 3, cursor, None), Ok(InventoryAction::Nothing));
            }
        }
    }

    #[test]
    fn unconditional_actions() {
        let cursor = stack('a', 1);
        let slot_item = stack('b', 1);
        let cases = [
            (ClickType::WindowBorderLeft, InventoryAction::Nothing),
            (ClickType::WindowBorderRight, InventoryAction::Nothing),
            (ClickType::NumberKey, InventoryAction::HotbarSwap),
            (ClickType::Drop, InventoryAction::DropOneSlot),
            (ClickType::ControlDrop, InventoryAction::DropAllSlot),
            (ClickType::Unknown, InventoryAction::Unknown),
            (ClickType::DragStartLeft, InventoryAction::Unknown),
            (ClickType::DragEndRight, InventoryAction::Unknown),
        ];

        for (click, expected) in cases {
            for (c, s) in [
                (None, None),
                (Some(&cursor), None),
                (None, Some(&slot_item)),
                (Some(&cursor), Some(&slot_item)),
            ] {
                assert_eq!(resolve_action(click, -1, c, s), Ok(expected), "{click}");
                assert_eq!(resolve_action(click, 3, c, s), Ok(expected), "{click}");
            }
        }
    }

    #[test]
    fn double_click_needs_cursor() {
        assert_eq!(
            resolve_action(ClickType::DoubleClick, 2, Some(&stack('a', 1)), None),
            Ok(InventoryAction::CollectToCursor)
        );
        assert_eq!(
            resolve_action(ClickType::DoubleClick, 2, None, Some(&stack('a', 1))),
            Ok(InventoryAction::Nothing)
        );
    }

    #[test]
    fn middle_and_creative_are_unsupported() {
        for click in [ClickType::Middle, ClickType::Creative] {
            assert_eq!(
                resolve_action::<TestStack>(click, 3, None, None),
                Err(ResolveError::Unsupported(click))
            );
        }
        assert_eq!(
            ResolveError::Unsupported(ClickType::Middle).to_string(),
            "middle clicks are not supported yet"
        );
    }

    #[test]
    fn item_stacks_resolve_with_metadata() {
        let named = diamonds(10).with_meta(ItemMeta::new().with_display_name("Shiny"));
        let sword = ItemStack::new(ItemKind::DiamondSword, 1, None);
        let enchanted = sword
            .clone()
            .with_meta(ItemMeta::new().with_enchant(Enchantment::Sharpness, 1));

        assert_eq!(
            resolve_action(ClickType::Left, 3, Some(&diamonds(10)), Some(&diamonds(63))),
            Ok(InventoryAction::PlaceOne)
        );
        assert_eq!(
            resolve_action(ClickType::Left, 3, Some(&named), Some(&diamonds(5))),
            Ok(InventoryAction::SwapWithCursor)
        );
        // Swords stack to one, so there is never room to merge.
        assert_eq!(
            resolve_action(ClickType::Left, 3, Some(&sword), Some(&sword)),
            Ok(InventoryAction::Nothing)
        );
        assert_eq!(
            resolve_action(ClickType::Right, 3, Some(&sword), Some(&enchanted)),
            Ok(InventoryAction::SwapWithCursor)
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let cursor = stack('a', 10);
        let slot_item = stack('a', 60);

        let first = resolve_action(ClickType::Left, 3, Some(&cursor), Some(&slot_item));
        let second = resolve_action(ClickType::Left, 3, Some(&cursor), Some(&slot_item));

        assert_eq!(first, second);
        assert_eq!(cursor.count, 10);
        assert_eq!(slot_item.count, 60);
    }

    #[test]
    fn place_actions() {
        for action in ALL_ACTIONS {
            let expected = matches!(
                action,
                InventoryAction::SwapWithCursor
                    | InventoryAction::PlaceOne
                    | InventoryAction::PlaceAll
                    | InventoryAction::PlaceSome
            );
            assert_eq!(is_place_action(action), expected, "{action}");
        }
    }

    #[test]
    fn hotbar_swap_downgrade() {
        assert_eq!(
            InventoryAction::HotbarSwap.with_hotbar_item(false),
            InventoryAction::Nothing
        );
        assert_eq!(
            InventoryAction::HotbarSwap.with_hotbar_item(true),
            InventoryAction::HotbarSwap
        );
        for action in ALL_ACTIONS {
            if action != InventoryAction::HotbarSwap {
                assert_eq!(action.with_hotbar_item(false), action);
            }
        }
    }
}
