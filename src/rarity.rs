use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub const RARITY_NAMES: [&str; 5] = ["Common", "Rare", "Epic", "Legendary", "Mythic"];

/// How many decimals a tier's percentage is printed with.
/// Rarer tiers need more, otherwise they'd all round to zero.
pub const RARITY_PRECISION: [usize; 5] = [1, 1, 2, 3, 4];

/// A rarity tier, ordered from most to least frequent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RarityFlags: u8 {
        const COMMON = 0b00001;
        const RARE = 0b00010;
        const EPIC = 0b00100;
        const LEGENDARY = 0b01000;
        const MYTHIC = 0b10000;
    }
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// ```
    /// use luckchance::rarity::Rarity;
    /// assert_eq!(Rarity::Epic.index(), 2);
    /// ```
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn get_name(&self) -> &'static str {
        RARITY_NAMES[self.index()]
    }

    pub fn precision(&self) -> usize {
        RARITY_PRECISION[self.index()]
    }

    #[inline]
    pub fn flag(&self) -> RarityFlags {
        RarityFlags::from_bits_truncate(1 << self.index())
    }

    /// This tier plus every rarer one.
    /// ```
    /// use luckchance::rarity::{Rarity, RarityFlags};
    /// assert_eq!(
    ///     Rarity::Legendary.or_better(),
    ///     RarityFlags::LEGENDARY | RarityFlags::MYTHIC
    /// );
    /// ```
    pub fn or_better(&self) -> RarityFlags {
        Rarity::ALL[self.index()..]
            .iter()
            .fold(RarityFlags::empty(), |flags, rarity| flags | rarity.flag())
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_name())
    }
}

impl RarityFlags {
    /// The tiers in this set, most frequent first.
    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        Rarity::ALL
            .into_iter()
            .filter(move |rarity| self.contains(rarity.flag()))
    }
}
