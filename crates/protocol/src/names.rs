use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseNameError;

/// Declares a closed, ordered enum whose variants carry a fixed wire label.
///
/// Every generated enum gets `ALL` (declaration order), `as_str`, `Display`
/// and a `FromStr` that accepts the exact wire label only.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        $(#[$meta])*
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseNameError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == raw)
                    .ok_or_else(|| ParseNameError {
                        kind: stringify!($name),
                        value: raw.to_string(),
                    })
            }
        }
    };
}

named_enum! {
    /// Ownership colour tracked independently per form.
    Variant {
        Normal => "normal",
        Shiny => "shiny",
        Albino => "albino",
        Melanistic => "melanistic",
    }
}

impl Variant {
    /// Icon asset stem used by the UI layer (`normal` ships as `pkmn`).
    pub fn icon_stem(self) -> &'static str {
        match self {
            Variant::Normal => "pkmn",
            other => other.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Normal => "Normal",
            Variant::Shiny => "Shiny",
            Variant::Albino => "Albino",
            Variant::Melanistic => "Melanistic",
        }
    }
}

named_enum! {
    /// Per-variant visibility policy.
    DisplayMode {
        All => "all",
        HideUnacquired => "hideUnacquired",
        ShowOnlyUnacquired => "showOnlyUnacquired",
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::All
    }
}

named_enum! {
    Nature {
        Adamant => "Adamant",
        Bashful => "Bashful",
        Bold => "Bold",
        Brave => "Brave",
        Calm => "Calm",
        Careful => "Careful",
        Docile => "Docile",
        Gentle => "Gentle",
        Hardy => "Hardy",
        Hasty => "Hasty",
        Impish => "Impish",
        Jolly => "Jolly",
        Lax => "Lax",
        Lonely => "Lonely",
        Mild => "Mild",
        Modest => "Modest",
        Naive => "Naive",
        Naughty => "Naughty",
        Quiet => "Quiet",
        Quirky => "Quirky",
        Rash => "Rash",
        Relaxed => "Relaxed",
        Sassy => "Sassy",
        Serious => "Serious",
        Timid => "Timid",
    }
}

named_enum! {
    /// Berry flavour preference. Maps onto natures through
    /// `BerryNatureTable` in `dex-filter`.
    Berry {
        Any => "Any",
        Bitter => "Bitter",
        Dry => "Dry",
        Sour => "Sour",
        Spicy => "Spicy",
        Sweet => "Sweet",
    }
}

named_enum! {
    PokemonType {
        Bug => "Bug",
        Dark => "Dark",
        Dragon => "Dragon",
        Electric => "Electric",
        Fairy => "Fairy",
        Fighting => "Fighting",
        Fire => "Fire",
        Flying => "Flying",
        Ghost => "Ghost",
        Grass => "Grass",
        Ground => "Ground",
        Ice => "Ice",
        Normal => "Normal",
        Poison => "Poison",
        Psychic => "Psychic",
        Rock => "Rock",
        Steel => "Steel",
        Water => "Water",
    }
}
