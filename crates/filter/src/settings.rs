use std::collections::{BTreeMap, BTreeSet};

use dex_protocol::{Berry, DisplayMode, Nature, PokemonType, Variant};
use serde::{Deserialize, Serialize};

use crate::berry::natures_for;

/// User-chosen filter and display state.
///
/// `natures`, `berry_preferences` and `pokemon_types` are forwarded to the
/// collaborator API as query parameters; `display_per_variant` drives the
/// local visibility gate. Missing keys in a stored blob fall back to their
/// defaults individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSettings {
    pub natures: BTreeSet<Nature>,
    pub berry_preferences: BTreeSet<Berry>,
    pub pokemon_types: BTreeSet<PokemonType>,
    pub display_per_variant: BTreeMap<Variant, DisplayMode>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            natures: BTreeSet::new(),
            berry_preferences: BTreeSet::new(),
            pokemon_types: BTreeSet::new(),
            display_per_variant: all_variants_showing(),
        }
    }
}

impl FilterSettings {
    pub fn display_mode(&self, variant: Variant) -> DisplayMode {
        self.display_per_variant
            .get(&variant)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_default(&self) -> bool {
        self.natures.is_empty()
            && self.berry_preferences.is_empty()
            && self.pokemon_types.is_empty()
            && Variant::ALL
                .iter()
                .all(|variant| self.display_mode(*variant) == DisplayMode::All)
    }

    pub fn contains(&self, item: FilterItem) -> bool {
        match item {
            FilterItem::Nature(nature) => self.natures.contains(&nature),
            FilterItem::Berry(berry) => self.berry_preferences.contains(&berry),
            FilterItem::Type(kind) => self.pokemon_types.contains(&kind),
        }
    }
}

fn all_variants_showing() -> BTreeMap<Variant, DisplayMode> {
    Variant::ALL
        .iter()
        .map(|variant| (*variant, DisplayMode::All))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    Natures,
    BerryPreferences,
    PokemonTypes,
}

/// A single selectable value on one of the catalog filter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterItem {
    Nature(Nature),
    Berry(Berry),
    Type(PokemonType),
}

impl FilterItem {
    pub fn axis(self) -> FilterAxis {
        match self {
            FilterItem::Nature(_) => FilterAxis::Natures,
            FilterItem::Berry(_) => FilterAxis::BerryPreferences,
            FilterItem::Type(_) => FilterAxis::PokemonTypes,
        }
    }
}

impl From<Nature> for FilterItem {
    fn from(value: Nature) -> Self {
        FilterItem::Nature(value)
    }
}

impl From<Berry> for FilterItem {
    fn from(value: Berry) -> Self {
        FilterItem::Berry(value)
    }
}

impl From<PokemonType> for FilterItem {
    fn from(value: PokemonType) -> Self {
        FilterItem::Type(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Toggle(FilterItem),
    SetDisplayMode { variant: Variant, mode: DisplayMode },
    Clear,
}

pub fn reduce(settings: FilterSettings, action: SettingsAction) -> FilterSettings {
    match action {
        SettingsAction::Toggle(item) => toggle_item(settings, item),
        SettingsAction::SetDisplayMode { variant, mode } => {
            toggle_display_mode(settings, variant, mode)
        }
        SettingsAction::Clear => clear_filters(settings),
    }
}

/// Flips one item on its axis.
///
/// Berries also drive `natures`: selecting a berry adds its natures and
/// deselecting it removes them, including any the user had picked by hand.
pub fn toggle_item(mut settings: FilterSettings, item: FilterItem) -> FilterSettings {
    match item {
        FilterItem::Nature(nature) => {
            toggle_in(&mut settings.natures, nature);
        }
        FilterItem::Type(kind) => {
            toggle_in(&mut settings.pokemon_types, kind);
        }
        FilterItem::Berry(berry) => {
            let selected = toggle_in(&mut settings.berry_preferences, berry);
            let implied = natures_for(berry);
            if selected {
                settings.natures.extend(implied.iter().copied());
            } else {
                settings.natures.retain(|nature| !implied.contains(nature));
            }
        }
    }
    settings
}

pub fn toggle_display_mode(
    mut settings: FilterSettings,
    variant: Variant,
    mode: DisplayMode,
) -> FilterSettings {
    settings.display_per_variant.insert(variant, mode);
    settings
}

pub fn clear_filters(mut settings: FilterSettings) -> FilterSettings {
    settings.natures.clear();
    settings.berry_preferences.clear();
    settings.pokemon_types.clear();
    settings.display_per_variant = all_variants_showing();
    settings
}

/// Returns whether `value` is selected after the toggle.
fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
