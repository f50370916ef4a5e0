use std::fmt;

use clickwise::item::ItemStack;
use clickwise::logic::{Classification, ClickEvent, ClickType, ResolveError};

/// What became of a single click.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Outcome {
    Classified(Classification),
    Unrecognized,
    Unsupported(ClickType),
}

impl Outcome {
    /// Classifies `event`. Number key clicks addressing an empty hotbar slot
    /// resolve to nothing.
    pub(crate) fn of(event: &ClickEvent, hotbar_item: Option<&ItemStack>) -> Self {
        match event.classify() {
            Ok(Some(classification)) => Self::Classified(Classification {
                action: classification
                    .action
                    .with_hotbar_item(hotbar_item.is_some()),
                ..classification
            }),
            Ok(None) => Self::Unrecognized,
            Err(ResolveError::Unsupported(click_type)) => Self::Unsupported(click_type),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(classification) => {
                write!(f, "{} -> {}", classification.click_type, classification.action)?;
                if classification.is_place() {
                    f.write_str(" (place)")?;
                }
                Ok(())
            }
            Self::Unrecognized => f.write_str("unrecognized"),
            Self::Unsupported(click_type) => write!(f, "unsupported: {click_type}"),
        }
    }
}
