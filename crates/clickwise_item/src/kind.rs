use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! item_kinds {
    ($($variant:ident => $name:literal, $max_stack:literal;)*) => {
        /// Represents an item from the game.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum ItemKind {
            $($variant,)*
        }

        impl ItemKind {
            /// Construct an item kind from its snake_case name.
            ///
            /// Returns `None` if the name is invalid.
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(name: &str) -> Option<ItemKind> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Gets the snake_case name of this item kind.
            pub const fn to_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the max stack count.
            pub const fn max_stack(self) -> i8 {
                match self {
                    $(Self::$variant => $max_stack,)*
                }
            }

            /// An array of all items.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];
        }
    };
}

item_kinds! {
    Stone => "stone", 64;
    Dirt => "dirt", 64;
    Cobblestone => "cobblestone", 64;
    OakLog => "oak_log", 64;
    OakPlanks => "oak_planks", 64;
    Stick => "stick", 64;
    Torch => "torch", 64;
    Coal => "coal", 64;
    IronIngot => "iron_ingot", 64;
    GoldIngot => "gold_ingot", 64;
    Diamond => "diamond", 64;
    Emerald => "emerald", 64;
    Apple => "apple", 64;
    Bread => "bread", 64;
    Arrow => "arrow", 64;
    Egg => "egg", 16;
    Snowball => "snowball", 16;
    EnderPearl => "ender_pearl", 16;
    Bucket => "bucket", 16;
    OakSign => "oak_sign", 16;
    WaterBucket => "water_bucket", 1;
    DiamondSword => "diamond_sword", 1;
    IronPickaxe => "iron_pickaxe", 1;
    Bow => "bow", 1;
    Shield => "shield", 1;
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl Serialize for ItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ItemKind::from_str(&name).ok_or_else(|| D::Error::custom(format!("unknown item `{name}`")))
    }
}

/// An enchantment that can be stored in [`ItemMeta`](crate::ItemMeta).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Enchantment {
    Sharpness,
    Efficiency,
    Unbreaking,
    Fortune,
    SilkTouch,
    Power,
    Infinity,
    Mending,
}

impl Enchantment {
    /// Construct an enchantment from its snake_case name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<Enchantment> {
        Some(match name {
            "sharpness" => Self::Sharpness,
            "efficiency" => Self::Efficiency,
            "unbreaking" => Self::Unbreaking,
            "fortune" => Self::Fortune,
            "silk_touch" => Self::SilkTouch,
            "power" => Self::Power,
            "infinity" => Self::Infinity,
            "mending" => Self::Mending,
            _ => return None,
        })
    }

    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Sharpness => "sharpness",
            Self::Efficiency => "efficiency",
            Self::Unbreaking => "unbreaking",
            Self::Fortune => "fortune",
            Self::SilkTouch => "silk_touch",
            Self::Power => "power",
            Self::Infinity => "infinity",
            Self::Mending => "mending",
        }
    }

    /// The highest level this enchantment is normally found at.
    pub const fn max_level(self) -> u8 {
        match self {
            Self::Sharpness | Self::Efficiency | Self::Power => 5,
            Self::Unbreaking | Self::Fortune => 3,
            Self::SilkTouch | Self::Infinity | Self::Mending => 1,
        }
    }
}

impl Serialize for Enchantment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for Enchantment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Enchantment::from_str(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown enchantment `{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_names_match_lookup() {
        for &kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_str(kind.to_str()), Some(kind));
        }
        assert_eq!(ItemKind::from_str("air"), None);
    }

    #[test]
    fn max_stack_sizes() {
        assert_eq!(ItemKind::Diamond.max_stack(), 64);
        assert_eq!(ItemKind::EnderPearl.max_stack(), 16);
        assert_eq!(ItemKind::DiamondSword.max_stack(), 1);
        assert!(ItemKind::ALL.iter().all(|k| k.max_stack() >= 1));
    }
}
