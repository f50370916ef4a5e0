use clickwise_item::ItemStack;

/// The parts of an item stack that click resolution looks at.
///
/// Counts are expected to be positive, but out of range values never make
/// resolution panic.
pub trait ClickStack {
    /// Number of items in the stack. Never zero for a present stack.
    fn count(&self) -> i32;

    /// Maximum number of items a stack of this kind holds.
    fn max_stack(&self) -> i32;

    /// Whether the two stacks could merge, ignoring their counts.
    fn is_similar(&self, other: &Self) -> bool;
}

impl ClickStack for ItemStack {
    fn count(&self) -> i32 {
        i32::from(ItemStack::count(self))
    }

    fn max_stack(&self) -> i32 {
        i32::from(ItemStack::max_stack(self))
    }

    fn is_similar(&self, other: &Self) -> bool {
        ItemStack::is_similar(self, other)
    }
}
